use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::{ApiResponse, ErrorDto},
        student::{PaginatedStudentsDto, StatisticsDto, StudentDto, StudentPayloadDto},
    },
    error::AppError,
    model::student::{PageQuery, SearchFilters, SortDirection, Student, StudentData},
    service::student::StudentService,
    state::AppState,
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_dir")]
    pub sort_dir: String,
}

impl PageParams {
    fn into_query(self) -> Result<PageQuery, AppError> {
        if self.size == 0 {
            return Err(AppError::BadRequest("size must be at least 1".to_string()));
        }

        Ok(PageQuery {
            page: self.page,
            per_page: self.size,
            sort_by: self.sort_by,
            sort_dir: SortDirection::from_param(&self.sort_dir),
        })
    }
}

/// Search parameters carry their own copy of the pagination fields because
/// the query-string decoder cannot flatten nested numeric fields.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub name: Option<String>,
    pub major: Option<String>,
    pub gender: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_dir")]
    pub sort_dir: String,
}

impl SearchParams {
    fn split(self) -> Result<(SearchFilters, PageQuery), AppError> {
        let filters = SearchFilters {
            name: self.name,
            major: self.major,
            gender: self.gender,
        };

        let query = PageParams {
            page: self.page,
            size: self.size,
            sort_by: self.sort_by,
            sort_dir: self.sort_dir,
        }
        .into_query()?;

        Ok((filters, query))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRangeParams {
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

fn default_size() -> u64 {
    10
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_sort_dir() -> String {
    "asc".to_string()
}

/// Create a new student.
///
/// Validates the payload, rejects student numbers that are already taken,
/// and stores the new record with server-assigned ID and timestamps.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `payload` - Student data to store
///
/// # Returns
/// - `201 Created` - Successfully created student
/// - `400 Bad Request` - Payload failed validation
/// - `409 Conflict` - Student number already taken
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = StudentPayloadDto,
    responses(
        (status = 201, description = "Successfully created student", body = ApiResponse<StudentDto>),
        (status = 400, description = "Payload failed validation", body = ErrorDto),
        (status = 409, description = "Student number already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let data = StudentData::try_from(payload).map_err(AppError::Validation)?;

    let service = StudentService::new(&state.db);

    let student = service.create(data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(student.into_dto())),
    ))
}

/// Get all students.
///
/// Returns every stored student ordered by ID. Intended for small data sets;
/// clients should prefer the paginated listing.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
///
/// # Returns
/// - `200 OK` - List of all students
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = ApiResponse<Vec<StudentDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            students
                .into_iter()
                .map(Student::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get a page of students.
///
/// Returns one page of students together with pagination metadata. The sort
/// field accepts any exposed field name in its wire spelling.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `params` - Page index, page size, sort field, and sort direction
///
/// # Returns
/// - `200 OK` - Page of students with metadata
/// - `400 Bad Request` - Page size below 1 or unknown sort field
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    get,
    path = "/api/students/page",
    tag = STUDENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default: id)"),
        ("sortDir" = Option<String>, Query, description = "Sort direction, asc or desc (default: asc)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student page", body = ApiResponse<PaginatedStudentsDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.into_query()?;

    let service = StudentService::new(&state.db);

    let page = service.get_paginated(&query).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(page.into_dto()))))
}

/// Search students.
///
/// Returns a page of students matching the given filters. The name filter
/// matches as a case-insensitive substring, major and gender match exactly,
/// and absent filters are not applied.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `params` - Optional filters plus pagination fields
///
/// # Returns
/// - `200 OK` - Page of matching students with metadata
/// - `400 Bad Request` - Page size below 1 or unknown sort field
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    get,
    path = "/api/students/search",
    tag = STUDENT_TAG,
    params(
        ("name" = Option<String>, Query, description = "Name keyword, matched as substring"),
        ("major" = Option<String>, Query, description = "Exact major"),
        ("gender" = Option<String>, Query, description = "Exact gender"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default: id)"),
        ("sortDir" = Option<String>, Query, description = "Sort direction, asc or desc (default: asc)")
    ),
    responses(
        (status = 200, description = "Successfully searched students", body = ApiResponse<PaginatedStudentsDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_students(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let (filters, query) = params.split()?;

    let service = StudentService::new(&state.db);

    let page = service.search(&filters, &query).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(page.into_dto()))))
}

/// Get student statistics.
///
/// Returns the total student count along with per-major and per-gender
/// breakdowns.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
///
/// # Returns
/// - `200 OK` - Aggregate counts
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    get,
    path = "/api/students/statistics",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully computed statistics", body = ApiResponse<StatisticsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_statistics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let statistics = service.statistics().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(statistics.into_dto()))))
}

/// Get students within an age range.
///
/// Returns every student whose age lies within the inclusive range.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `params` - Inclusive minimum and maximum age
///
/// # Returns
/// - `200 OK` - Students inside the range
/// - `400 Bad Request` - Missing bounds or minimum above maximum
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    get,
    path = "/api/students/age-range",
    tag = STUDENT_TAG,
    params(
        ("minAge" = i32, Query, description = "Inclusive lower age bound"),
        ("maxAge" = i32, Query, description = "Inclusive upper age bound")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students in range", body = ApiResponse<Vec<StudentDto>>),
        (status = 400, description = "Invalid age range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_by_age_range(
    State(state): State<AppState>,
    Query(params): Query<AgeRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let (min_age, max_age) = match (params.min_age, params.max_age) {
        (Some(min_age), Some(max_age)) => (min_age, max_age),
        _ => {
            return Err(AppError::BadRequest(
                "minAge and maxAge are required".to_string(),
            ))
        }
    };

    if min_age > max_age {
        return Err(AppError::BadRequest(
            "minAge must not be greater than maxAge".to_string(),
        ));
    }

    let service = StudentService::new(&state.db);

    let students = service.get_by_age_range(min_age, max_age).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            students
                .into_iter()
                .map(Student::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Delete several students at once.
///
/// Deletes every student whose ID appears in the request body. Unknown IDs
/// are skipped silently; the response reports how many rows were removed.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `ids` - IDs of the students to delete
///
/// # Returns
/// - `200 OK` - Number of students actually deleted
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    delete,
    path = "/api/students/batch",
    tag = STUDENT_TAG,
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Successfully deleted students", body = ApiResponse<u64>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_students_batch(
    State(state): State<AppState>,
    Json(ids): Json<Vec<i32>>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let removed = service.delete_batch(&ids).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with_message(
            format!("deleted {} students", removed),
            removed,
        )),
    ))
}

/// Get a student by student number.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `student_number` - Student number to look up
///
/// # Returns
/// - `200 OK` - Matching student
/// - `404 Not Found` - No student holds the number
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    get,
    path = "/api/students/number/{student_number}",
    tag = STUDENT_TAG,
    params(
        ("student_number" = String, Path, description = "Student number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = ApiResponse<StudentDto>),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_number(
    State(state): State<AppState>,
    Path(student_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .get_by_student_number(&student_number)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("student with number {} not found", student_number))
        })?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(student.into_dto()))))
}

/// Check whether a student number is taken.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `student_number` - Student number to check
///
/// # Returns
/// - `200 OK` - `true` when the number is taken, `false` otherwise
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    get,
    path = "/api/students/exists/{student_number}",
    tag = STUDENT_TAG,
    params(
        ("student_number" = String, Path, description = "Student number")
    ),
    responses(
        (status = 200, description = "Successfully checked student number", body = ApiResponse<bool>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn student_number_exists(
    State(state): State<AppState>,
    Path(student_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let exists = service.exists_by_student_number(&student_number).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(exists))))
}

/// Get a student by ID.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `id` - Student ID to look up
///
/// # Returns
/// - `200 OK` - Matching student
/// - `404 Not Found` - No student has the ID
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = ApiResponse<StudentDto>),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student with id {} not found", id)))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(student.into_dto()))))
}

/// Update a student.
///
/// Replaces every mutable field of an existing student with validated data.
/// The enrollment date is kept when the payload omits it, and the student
/// number may only change to one that is not taken.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `id` - Student ID to update
/// - `payload` - New student data
///
/// # Returns
/// - `200 OK` - Successfully updated student
/// - `400 Bad Request` - Payload failed validation
/// - `404 Not Found` - No student has the ID
/// - `409 Conflict` - New student number already taken
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Successfully updated student", body = ApiResponse<StudentDto>),
        (status = 400, description = "Payload failed validation", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Student number already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let data = StudentData::try_from(payload).map_err(AppError::Validation)?;

    let service = StudentService::new(&state.db);

    let student = service.update(id, data).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(student.into_dto()))))
}

/// Delete a student.
///
/// # Arguments
/// - `state` - Shared state holding the database pool
/// - `id` - Student ID to delete
///
/// # Returns
/// - `200 OK` - Student deleted
/// - `404 Not Found` - No student has the ID
/// - `500 Internal Server Error` - Unexpected database failure
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message_only("student deleted")),
    ))
}
