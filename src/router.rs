//! Axum route configuration and OpenAPI documentation.
//!
//! All API routes live under `/api/students`. The generated OpenAPI
//! specification is served at `/api-docs/openapi.json` with an interactive
//! Swagger UI at `/swagger-ui`.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::student::{
        create_student, delete_student, delete_students_batch, get_student_by_id,
        get_student_by_number, get_student_statistics, get_students, get_students_by_age_range,
        get_students_page, search_students, student_number_exists, update_student,
    },
    dto::{
        api::{ApiResponse, ErrorDto},
        student::{PaginatedStudentsDto, StatisticsDto, StudentDto, StudentPayloadDto},
    },
    state::AppState,
};

/// OpenAPI document covering every student endpoint.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Studentboard API",
        description = "CRUD backend for student records with pagination, search, and statistics."
    ),
    paths(
        crate::controller::student::create_student,
        crate::controller::student::get_students,
        crate::controller::student::get_students_page,
        crate::controller::student::search_students,
        crate::controller::student::get_student_statistics,
        crate::controller::student::get_students_by_age_range,
        crate::controller::student::delete_students_batch,
        crate::controller::student::get_student_by_number,
        crate::controller::student::student_number_exists,
        crate::controller::student::get_student_by_id,
        crate::controller::student::update_student,
        crate::controller::student::delete_student,
    ),
    components(schemas(
        StudentDto,
        StudentPayloadDto,
        PaginatedStudentsDto,
        StatisticsDto,
        ErrorDto,
        ApiResponse<StudentDto>,
        ApiResponse<Vec<StudentDto>>,
        ApiResponse<PaginatedStudentsDto>,
        ApiResponse<StatisticsDto>,
        ApiResponse<bool>,
        ApiResponse<u64>,
    )),
    tags(
        (name = "student", description = "Student record management endpoints")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/students", post(create_student).get(get_students))
        .route("/api/students/page", get(get_students_page))
        .route("/api/students/search", get(search_students))
        .route("/api/students/statistics", get(get_student_statistics))
        .route("/api/students/age-range", get(get_students_by_age_range))
        .route("/api/students/batch", delete(delete_students_batch))
        .route(
            "/api/students/number/{student_number}",
            get(get_student_by_number),
        )
        .route(
            "/api/students/exists/{student_number}",
            get(student_number_exists),
        )
        .route(
            "/api/students/{id}",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
