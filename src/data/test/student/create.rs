use super::*;

fn full_data() -> StudentData {
    StudentData {
        name: "张三".to_string(),
        student_number: "20210001".to_string(),
        age: 20,
        gender: Gender::Male,
        major: "计算机科学与技术".to_string(),
        email: Some("zhangsan@example.com".to_string()),
        phone: Some("13800138000".to_string()),
        enrollment_date: Some(NaiveDate::from_ymd_opt(2021, 9, 1).unwrap()),
    }
}

/// Tests creating a student with every field supplied.
///
/// Verifies that the repository inserts the row, assigns an ID, and stores
/// all fields as given.
///
/// Expected: Ok with the stored row matching the input
#[tokio::test]
async fn creates_student_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.create(full_data()).await;

    assert!(result.is_ok());
    let student = result.unwrap();
    assert!(student.id > 0);
    assert_eq!(student.name, "张三");
    assert_eq!(student.student_number, "20210001");
    assert_eq!(student.age, 20);
    assert_eq!(student.gender, "男");
    assert_eq!(student.major, "计算机科学与技术");
    assert_eq!(student.email.as_deref(), Some("zhangsan@example.com"));
    assert_eq!(student.phone.as_deref(), Some("13800138000"));
    assert_eq!(
        student.enrollment_date,
        NaiveDate::from_ymd_opt(2021, 9, 1).unwrap()
    );

    // Verify the row exists in the database
    let db_student = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?;
    assert!(db_student.is_some());
    assert_eq!(db_student.unwrap().student_number, "20210001");

    Ok(())
}

/// Tests that both timestamps are set to the same instant on creation.
///
/// Expected: created_time equals updated_time
#[tokio::test]
async fn sets_both_timestamps_on_creation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.create(full_data()).await?;

    assert_eq!(student.created_time, student.updated_time);

    Ok(())
}

/// Tests that the enrollment date defaults to today when not supplied.
///
/// Expected: Ok with enrollment_date set to the current UTC date
#[tokio::test]
async fn defaults_enrollment_date_to_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(StudentData {
            enrollment_date: None,
            ..full_data()
        })
        .await?;

    assert_eq!(student.enrollment_date, Utc::now().date_naive());

    Ok(())
}

/// Tests that inserting a duplicate student number is rejected by the table
/// constraint.
///
/// Expected: Err from the unique index on student_number
#[tokio::test]
async fn rejects_duplicate_student_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::create_student_with_number(db, "20210001").await?;

    let repo = StudentRepository::new(db);
    let result = repo.create(full_data()).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().sql_err().is_some());

    Ok(())
}
