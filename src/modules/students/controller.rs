use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::modules::students::model::{
    CreateStudentDto, MessageResponse, StudentListResponse, StudentResponse, UpdateStudentDto,
};
use crate::modules::students::repo::StudentRepo;
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::{ApiError, ErrorResponse, ValidationErrorResponse};

#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "Lista de estudiantes", body = StudentListResponse),
        (status = 500, description = "Error del servidor", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument]
pub async fn list_students<R: StudentRepo>(
    State(state): State<AppState<R>>,
) -> Result<Json<StudentListResponse>, ApiError> {
    let students = StudentService::list(&state.repo).await?;
    Ok(Json(StudentListResponse::new(students)))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = i64, Path, description = "ID del estudiante")
    ),
    responses(
        (status = 200, description = "Estudiante encontrado", body = StudentResponse),
        (status = 404, description = "Estudiante no encontrado", body = ErrorResponse),
        (status = 500, description = "Error del servidor", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument]
pub async fn get_student<R: StudentRepo>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentService::get(&state.repo, id).await?;
    Ok(Json(StudentResponse::new(student)))
}

#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Estudiante creado", body = StudentResponse),
        (status = 422, description = "Error de validación", body = ValidationErrorResponse),
        (status = 500, description = "Error del servidor", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument]
pub async fn create_student<R: StudentRepo>(
    State(state): State<AppState<R>>,
    Json(dto): Json<CreateStudentDto>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student = StudentService::create(&state.repo, dto).await?;
    Ok((StatusCode::CREATED, Json(StudentResponse::new(student))))
}

#[utoipa::path(
    put,
    path = "/students/{id}",
    params(
        ("id" = i64, Path, description = "ID del estudiante")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Estudiante actualizado", body = StudentResponse),
        (status = 404, description = "Estudiante no encontrado", body = ErrorResponse),
        (status = 422, description = "Error de validación", body = ValidationErrorResponse),
        (status = 500, description = "Error del servidor", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument]
pub async fn update_student<R: StudentRepo>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateStudentDto>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentService::update(&state.repo, id, dto).await?;
    Ok(Json(StudentResponse::new(student)))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(
        ("id" = i64, Path, description = "ID del estudiante")
    ),
    responses(
        (status = 200, description = "Estudiante eliminado", body = MessageResponse),
        (status = 404, description = "Estudiante no encontrado", body = ErrorResponse),
        (status = 500, description = "Error del servidor", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument]
pub async fn delete_student<R: StudentRepo>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    StudentService::delete(&state.repo, id).await?;
    Ok(Json(MessageResponse::new(
        "Estudiante eliminado correctamente",
    )))
}
