use super::*;

/// Tests deleting several students at once.
///
/// Expected: Ok(2) with only the listed rows removed
#[tokio::test]
async fn deletes_listed_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::student::create_student(db).await?;
    let second = factory::student::create_student(db).await?;
    let third = factory::student::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let removed = repo.delete_batch(&[first.id, third.id]).await?;

    assert_eq!(removed, 2);

    let remaining = entity::prelude::Student::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    Ok(())
}

/// Tests that unknown IDs in the list are skipped silently.
///
/// Expected: Ok(1) counting only the row that existed
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let removed = repo.delete_batch(&[student.id, 9998, 9999]).await?;

    assert_eq!(removed, 1);

    Ok(())
}

/// Tests deleting with an empty ID list.
///
/// Expected: Ok(0) without touching the table
#[tokio::test]
async fn does_nothing_for_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let removed = repo.delete_batch(&[]).await?;

    assert_eq!(removed, 0);

    let remaining = entity::prelude::Student::find().all(db).await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}
