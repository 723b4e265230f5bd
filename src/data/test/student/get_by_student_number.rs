use super::*;

/// Tests fetching a student by an existing student number.
///
/// Expected: Ok(Some) with the matching row
#[tokio::test]
async fn gets_student_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student_with_number(db, "20210042").await?;

    let repo = StudentRepository::new(db);
    let result = repo.get_by_student_number("20210042").await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().id, student.id);

    Ok(())
}

/// Tests fetching by a number nobody holds.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::create_student_with_number(db, "20210042").await?;

    let repo = StudentRepository::new(db);
    let result = repo.get_by_student_number("99999999").await?;

    assert!(result.is_none());

    Ok(())
}
