use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    data::student::{sort_column, StudentRepository},
    error::AppError,
    model::student::{
        PageQuery, PaginatedStudents, SearchFilters, Statistics, Student, StudentData,
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student
    ///
    /// The student number must not be taken. The lookup gives a friendly
    /// conflict in the common case and the unique index on the table closes
    /// the race between concurrent creates.
    pub async fn create(&self, data: StudentData) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.exists_by_student_number(&data.student_number).await? {
            return Err(Self::number_taken(&data.student_number));
        }

        let number = data.student_number.clone();
        let student = repo
            .create(data)
            .await
            .map_err(|err| Self::classify_unique_violation(err, &number))?;

        Student::from_entity(student)
    }

    /// Gets a student by ID
    ///
    /// Absence is a normal lookup outcome, not an error. Only update and
    /// delete treat a missing ID as a failure.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .map(Student::from_entity)
            .transpose()
    }

    /// Gets a student by student number
    ///
    /// Absence is a normal lookup outcome, as with `get_by_id`.
    pub async fn get_by_student_number(
        &self,
        student_number: &str,
    ) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        repo.get_by_student_number(student_number)
            .await?
            .map(Student::from_entity)
            .transpose()
    }

    /// Gets all students
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        let students = repo.get_all().await?;

        students.into_iter().map(Student::from_entity).collect()
    }

    /// Gets a page of students ordered as requested
    pub async fn get_paginated(&self, query: &PageQuery) -> Result<PaginatedStudents, AppError> {
        let repo = StudentRepository::new(self.db);

        let column = Self::resolve_sort_column(&query.sort_by)?;

        let (students, total) = repo
            .get_paginated(column, query.sort_dir, query.page, query.per_page)
            .await?;

        Self::build_page(students, total, query)
    }

    /// Searches students matching the given filters, paginated
    pub async fn search(
        &self,
        filters: &SearchFilters,
        query: &PageQuery,
    ) -> Result<PaginatedStudents, AppError> {
        let repo = StudentRepository::new(self.db);

        let column = Self::resolve_sort_column(&query.sort_by)?;

        let (students, total) = repo
            .search(filters, column, query.sort_dir, query.page, query.per_page)
            .await?;

        Self::build_page(students, total, query)
    }

    /// Updates an existing student
    ///
    /// When the student number changes, the new number must not be taken by
    /// any other student.
    pub async fn update(&self, id: i32, data: StudentData) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        let current = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        if data.student_number != current.student_number
            && repo.exists_by_student_number(&data.student_number).await?
        {
            return Err(Self::number_taken(&data.student_number));
        }

        let number = data.student_number.clone();
        let student = repo
            .update(current, data)
            .await
            .map_err(|err| Self::classify_unique_violation(err, &number))?;

        Student::from_entity(student)
    }

    /// Deletes a student by ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(Self::not_found(id));
        }

        Ok(())
    }

    /// Deletes every student in the ID list, skipping unknown IDs
    ///
    /// Returns how many rows were actually removed.
    pub async fn delete_batch(&self, ids: &[i32]) -> Result<u64, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.delete_batch(ids).await?)
    }

    /// Checks if a student number is taken
    pub async fn exists_by_student_number(&self, student_number: &str) -> Result<bool, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.exists_by_student_number(student_number).await?)
    }

    /// Computes aggregate counts over the whole student table
    pub async fn statistics(&self) -> Result<Statistics, AppError> {
        let repo = StudentRepository::new(self.db);

        let total_count = repo.count().await?;
        let count_by_major = repo
            .count_by_major()
            .await?
            .into_iter()
            .map(|(major, count)| (major, count as u64))
            .collect();
        let count_by_gender = repo
            .count_by_gender()
            .await?
            .into_iter()
            .map(|(gender, count)| (gender, count as u64))
            .collect();

        Ok(Statistics {
            total_count,
            count_by_major,
            count_by_gender,
        })
    }

    /// Gets students whose age lies within the inclusive range
    pub async fn get_by_age_range(
        &self,
        min_age: i32,
        max_age: i32,
    ) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        let students = repo.get_by_age_range(min_age, max_age).await?;

        students.into_iter().map(Student::from_entity).collect()
    }

    fn resolve_sort_column(field: &str) -> Result<entity::student::Column, AppError> {
        sort_column(field)
            .ok_or_else(|| AppError::BadRequest(format!("unknown sort field: {}", field)))
    }

    fn build_page(
        students: Vec<entity::student::Model>,
        total: u64,
        query: &PageQuery,
    ) -> Result<PaginatedStudents, AppError> {
        let total_pages = if query.per_page > 0 {
            (total as f64 / query.per_page as f64).ceil() as u64
        } else {
            0
        };

        let students: Result<Vec<_>, _> = students.into_iter().map(Student::from_entity).collect();

        Ok(PaginatedStudents {
            students: students?,
            total,
            page: query.page,
            per_page: query.per_page,
            total_pages,
        })
    }

    /// Maps a unique index violation on insert or update to a conflict.
    ///
    /// The violation only fires when a concurrent writer took the number
    /// after the lookup above, so the message mirrors the lookup path.
    fn classify_unique_violation(err: DbErr, student_number: &str) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::number_taken(student_number),
            _ => AppError::DbErr(err),
        }
    }

    fn number_taken(student_number: &str) -> AppError {
        AppError::Conflict(format!(
            "student number {} already exists",
            student_number
        ))
    }

    fn not_found(id: i32) -> AppError {
        AppError::NotFound(format!("student with id {} not found", id))
    }
}
