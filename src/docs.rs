use utoipa::OpenApi;

use crate::modules::students::model::{
    CreateStudentDto, MessageResponse, Student, StudentListResponse, StudentResponse,
    UpdateStudentDto,
};
use crate::utils::errors::{ErrorResponse, ValidationErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::list_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            StudentResponse,
            StudentListResponse,
            MessageResponse,
            ErrorResponse,
            ValidationErrorResponse,
        )
    ),
    tags(
        (name = "Students", description = "Gestión de estudiantes")
    ),
    info(
        title = "API de Estudiantes",
        version = "1.0.0",
        description = "API para la gestión de estudiantes: listar, crear, actualizar y eliminar.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
