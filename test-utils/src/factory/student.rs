//! Factory for inserting test student rows.
//!
//! Fills every column with a plausible default so a test only has to spell
//! out the fields its assertion depends on. Defaults are unique per row, so
//! several students can be created in one test without colliding.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder over a student row about to be inserted.
///
/// Starts from the defaults described on [`StudentFactory::new`]; each setter
/// replaces one field before `build()` performs the insert.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .name("张三")
///     .student_number("20210001")
///     .major("软件工程")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    student_number: String,
    age: i32,
    gender: String,
    major: String,
    email: Option<String>,
    phone: Option<String>,
    enrollment_date: NaiveDate,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"学生{id}"` where id is auto-incremented
    /// - student_number: `"20215001"` onwards, derived from the same auto-incremented
    ///   id with an offset that keeps generated numbers clear of the low sequence
    ///   numbers tests tend to pick explicitly
    /// - age: `20`
    /// - gender: `"男"`
    /// - major: `"计算机科学与技术"`
    /// - email: `None`
    /// - phone: `None`
    /// - enrollment_date: today (UTC)
    ///
    /// # Arguments
    /// - `db` - Connection the eventual insert goes through
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("学生{}", id),
            student_number: format!("{}", 20215000 + id),
            age: 20,
            gender: "男".to_string(),
            major: "计算机科学与技术".to_string(),
            email: None,
            phone: None,
            enrollment_date: Utc::now().date_naive(),
        }
    }

    /// Sets the name for the student.
    ///
    /// # Arguments
    /// - `name` - Display name for the student
    ///
    /// # Returns
    /// - `Self` - The factory, for further chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the student number.
    ///
    /// # Arguments
    /// - `student_number` - Unique student number as string
    ///
    /// # Returns
    /// - `Self` - The factory, for further chaining
    pub fn student_number(mut self, student_number: impl Into<String>) -> Self {
        self.student_number = student_number.into();
        self
    }

    /// Sets the age for the student.
    ///
    /// # Arguments
    /// - `age` - Age in years
    ///
    /// # Returns
    /// - `Self` - The factory, for further chaining
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the gender for the student.
    ///
    /// # Arguments
    /// - `gender` - Gender value as stored, `"男"` or `"女"`
    ///
    /// # Returns
    /// - `Self` - The factory, for further chaining
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the major for the student.
    ///
    /// # Arguments
    /// - `major` - Major or program name
    ///
    /// # Returns
    /// - `Self` - The factory, for further chaining
    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    /// Sets the email address for the student.
    ///
    /// # Arguments
    /// - `email` - Email address
    ///
    /// # Returns
    /// - `Self` - The factory, for further chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number for the student.
    ///
    /// # Arguments
    /// - `phone` - Mainland mobile number, e.g. `"13800138001"`
    ///
    /// # Returns
    /// - `Self` - The factory, for further chaining
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the enrollment date for the student.
    ///
    /// # Arguments
    /// - `enrollment_date` - Date of enrollment
    ///
    /// # Returns
    /// - `Self` - The factory, for further chaining
    pub fn enrollment_date(mut self, enrollment_date: NaiveDate) -> Self {
        self.enrollment_date = enrollment_date;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Insert failed
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now();
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            student_number: ActiveValue::Set(self.student_number),
            age: ActiveValue::Set(self.age),
            gender: ActiveValue::Set(self.gender),
            major: ActiveValue::Set(self.major),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            enrollment_date: ActiveValue::Set(self.enrollment_date),
            created_time: ActiveValue::Set(now),
            updated_time: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Connection to insert through
///
/// # Returns
/// - `Ok(entity::student::Model)` - Created student entity
/// - `Err(DbErr)` - Insert failed
///
/// # Example
///
/// ```rust,ignore
/// let student = create_student(&db).await?;
/// ```
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student with a specific student number.
///
/// Shorthand for `StudentFactory::new(db).student_number(number).build().await`.
///
/// # Arguments
/// - `db` - Connection to insert through
/// - `student_number` - Student number as string
///
/// # Returns
/// - `Ok(entity::student::Model)` - Created student entity
/// - `Err(DbErr)` - Insert failed
///
/// # Example
///
/// ```rust,ignore
/// let student = create_student_with_number(&db, "20210001").await?;
/// ```
pub async fn create_student_with_number(
    db: &DatabaseConnection,
    student_number: impl Into<String>,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db)
        .student_number(student_number)
        .build()
        .await
}
