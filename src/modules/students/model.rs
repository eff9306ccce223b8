use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student row as stored in the `students` table.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Student {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Juan Pérez")]
    pub name: String,
    #[schema(example = "juan@example.com")]
    pub email: String,
    #[schema(example = "+591 70000000")]
    pub phone: String,
    #[schema(example = "Español")]
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /students`.
///
/// Every field is an `Option` so that a missing field reaches validation
/// (and comes back as a per-field error) instead of being rejected during
/// deserialization.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(
        required(message = "El campo name es obligatorio"),
        length(max = 255, message = "El campo name no debe superar los 255 caracteres")
    )]
    #[schema(example = "María Rodríguez")]
    pub name: Option<String>,

    #[validate(
        required(message = "El campo email es obligatorio"),
        email(message = "El campo email debe ser una dirección de correo válida"),
        length(max = 255, message = "El campo email no debe superar los 255 caracteres")
    )]
    #[schema(example = "maria@example.com")]
    pub email: Option<String>,

    #[validate(
        required(message = "El campo phone es obligatorio"),
        length(max = 15, message = "El campo phone no debe superar los 15 caracteres")
    )]
    #[schema(example = "+591 77777777")]
    pub phone: Option<String>,

    #[validate(
        required(message = "El campo language es obligatorio"),
        length(max = 10, message = "El campo language no debe superar los 10 caracteres")
    )]
    #[schema(example = "Inglés")]
    pub language: Option<String>,
}

impl CreateStudentDto {
    /// Converts a validated payload into the insertable record.
    /// Returns `None` if any required field is absent, which validation
    /// rules out beforehand.
    pub fn into_new_student(self) -> Option<NewStudent> {
        Some(NewStudent {
            name: self.name?,
            email: self.email?,
            phone: self.phone?,
            language: self.language?,
        })
    }
}

/// Payload for `PUT /students/{id}`. All fields optional; absent fields
/// keep their current value.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(max = 255, message = "El campo name no debe superar los 255 caracteres"))]
    pub name: Option<String>,

    #[validate(
        email(message = "El campo email debe ser una dirección de correo válida"),
        length(max = 255, message = "El campo email no debe superar los 255 caracteres")
    )]
    pub email: Option<String>,

    #[validate(length(max = 15, message = "El campo phone no debe superar los 15 caracteres"))]
    pub phone: Option<String>,

    #[validate(length(max = 10, message = "El campo language no debe superar los 10 caracteres"))]
    pub language: Option<String>,
}

impl UpdateStudentDto {
    pub fn into_patch(self) -> StudentPatch {
        StudentPatch {
            name: self.name,
            email: self.email,
            phone: self.phone,
            language: self.language,
        }
    }
}

/// Fields required to insert a new row.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub language: String,
}

/// Partial update applied to an existing row. `None` leaves the column
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    #[schema(example = "success")]
    pub status: String,
    pub student: Student,
}

impl StudentResponse {
    pub fn new(student: Student) -> Self {
        Self {
            status: "success".to_string(),
            student,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListResponse {
    #[schema(example = "success")]
    pub status: String,
    pub students: Vec<Student>,
}

impl StudentListResponse {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            status: "success".to_string(),
            students,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "Estudiante eliminado correctamente")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}
