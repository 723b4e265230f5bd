use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    sea_query::{Expr, Func},
};

use crate::model::student::{SearchFilters, SortDirection, StudentData};

/// Maps a wire-format sort field name to its table column.
pub fn sort_column(field: &str) -> Option<entity::student::Column> {
    match field {
        "id" => Some(entity::student::Column::Id),
        "name" => Some(entity::student::Column::Name),
        "studentNumber" => Some(entity::student::Column::StudentNumber),
        "age" => Some(entity::student::Column::Age),
        "gender" => Some(entity::student::Column::Gender),
        "major" => Some(entity::student::Column::Major),
        "email" => Some(entity::student::Column::Email),
        "phone" => Some(entity::student::Column::Phone),
        "enrollmentDate" => Some(entity::student::Column::EnrollmentDate),
        "createdTime" => Some(entity::student::Column::CreatedTime),
        "updatedTime" => Some(entity::student::Column::UpdatedTime),
        _ => None,
    }
}

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new student and returns the stored row
    ///
    /// Both timestamps are set to the same instant and the enrollment date
    /// defaults to today when none was supplied.
    pub async fn create(&self, data: StudentData) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now();

        entity::student::ActiveModel {
            name: ActiveValue::Set(data.name),
            student_number: ActiveValue::Set(data.student_number),
            age: ActiveValue::Set(data.age),
            gender: ActiveValue::Set(data.gender.as_str().to_string()),
            major: ActiveValue::Set(data.major),
            email: ActiveValue::Set(data.email),
            phone: ActiveValue::Set(data.phone),
            enrollment_date: ActiveValue::Set(
                data.enrollment_date.unwrap_or_else(|| now.date_naive()),
            ),
            created_time: ActiveValue::Set(now),
            updated_time: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a student by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    /// Gets a student by student number
    pub async fn get_by_student_number(
        &self,
        student_number: &str,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::StudentNumber.eq(student_number))
            .one(self.db)
            .await
    }

    /// Gets all students ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a page of students ordered by the given column
    pub async fn get_paginated(
        &self,
        column: entity::student::Column,
        direction: SortDirection,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::student::Model>, u64), DbErr> {
        let paginator = Self::ordered(entity::prelude::Student::find(), column, direction)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let students = paginator.fetch_page(page).await?;

        Ok((students, total))
    }

    /// Searches students matching the given filters, paginated
    ///
    /// The name filter matches as a case-insensitive substring while major
    /// and gender match exactly. Absent filters are not applied.
    pub async fn search(
        &self,
        filters: &SearchFilters,
        column: entity::student::Column,
        direction: SortDirection,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::student::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(name) = &filters.name {
            let pattern = format!("%{}%", name.to_lowercase());
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(entity::student::Column::Name))).like(pattern),
            );
        }

        if let Some(major) = &filters.major {
            condition = condition.add(entity::student::Column::Major.eq(major));
        }

        if let Some(gender) = &filters.gender {
            condition = condition.add(entity::student::Column::Gender.eq(gender));
        }

        let paginator = Self::ordered(
            entity::prelude::Student::find().filter(condition),
            column,
            direction,
        )
        .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let students = paginator.fetch_page(page).await?;

        Ok((students, total))
    }

    /// Applies new data to an existing student and returns the updated row
    ///
    /// The enrollment date is only replaced when the new data carries one
    /// and the creation timestamp is never touched.
    pub async fn update(
        &self,
        current: entity::student::Model,
        data: StudentData,
    ) -> Result<entity::student::Model, DbErr> {
        let enrollment_date = data.enrollment_date.unwrap_or(current.enrollment_date);

        let mut active_model: entity::student::ActiveModel = current.into();
        active_model.name = ActiveValue::Set(data.name);
        active_model.student_number = ActiveValue::Set(data.student_number);
        active_model.age = ActiveValue::Set(data.age);
        active_model.gender = ActiveValue::Set(data.gender.as_str().to_string());
        active_model.major = ActiveValue::Set(data.major);
        active_model.email = ActiveValue::Set(data.email);
        active_model.phone = ActiveValue::Set(data.phone);
        active_model.enrollment_date = ActiveValue::Set(enrollment_date);
        active_model.updated_time = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes a student by ID, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every student whose ID is in the list, returning the number of rows removed
    pub async fn delete_batch(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Student::delete_many()
            .filter(entity::student::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks if a student with the given number exists
    pub async fn exists_by_student_number(&self, student_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::StudentNumber.eq(student_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts all students
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find().count(self.db).await
    }

    /// Counts students per major
    pub async fn count_by_major(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::Major)
            .column_as(entity::student::Column::Id.count(), "count")
            .group_by(entity::student::Column::Major)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Counts students per gender
    pub async fn count_by_gender(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::Gender)
            .column_as(entity::student::Column::Id.count(), "count")
            .group_by(entity::student::Column::Gender)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Gets students whose age lies within the inclusive range, ordered by ID
    pub async fn get_by_age_range(
        &self,
        min_age: i32,
        max_age: i32,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Age.between(min_age, max_age))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    fn ordered(
        query: Select<entity::prelude::Student>,
        column: entity::student::Column,
        direction: SortDirection,
    ) -> Select<entity::prelude::Student> {
        match direction {
            SortDirection::Asc => query.order_by_asc(column),
            SortDirection::Desc => query.order_by_desc(column),
        }
    }
}
