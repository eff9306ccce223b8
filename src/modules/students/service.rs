use tracing::instrument;
use validator::{Validate, ValidationErrors};

use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::modules::students::repo::StudentRepo;
use crate::utils::errors::ApiError;
use crate::validator::duplicate_email_error;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(repo))]
    pub async fn list<R: StudentRepo>(repo: &R) -> Result<Vec<Student>, ApiError> {
        Ok(repo.find_all().await?)
    }

    #[instrument(skip(repo))]
    pub async fn get<R: StudentRepo>(repo: &R, id: i64) -> Result<Student, ApiError> {
        repo.find_by_id(id).await?.ok_or(ApiError::NotFound)
    }

    /// Validates the payload, pre-checks email uniqueness and inserts the
    /// row. Rule violations and the duplicate email are reported together
    /// in one per-field error map.
    #[instrument(skip(repo, dto))]
    pub async fn create<R: StudentRepo>(
        repo: &R,
        dto: CreateStudentDto,
    ) -> Result<Student, ApiError> {
        let mut errors = dto.validate().err().unwrap_or_else(ValidationErrors::new);

        if let Some(email) = dto.email.as_deref() {
            if repo.email_exists(email, None).await? {
                errors.add("email".into(), duplicate_email_error());
            }
        }

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        let new = dto.into_new_student().ok_or_else(|| {
            ApiError::Internal(anyhow::anyhow!("required field missing after validation"))
        })?;

        repo.insert(new).await.map_err(ApiError::CreateFailed)
    }

    /// Looks the row up first so an unknown id is reported as 404 before
    /// any validation runs. Only supplied fields are validated and applied;
    /// the uniqueness check ignores the row's own email.
    #[instrument(skip(repo, dto))]
    pub async fn update<R: StudentRepo>(
        repo: &R,
        id: i64,
        dto: UpdateStudentDto,
    ) -> Result<Student, ApiError> {
        let existing = repo.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

        let mut errors = dto.validate().err().unwrap_or_else(ValidationErrors::new);

        if let Some(email) = dto.email.as_deref() {
            if repo.email_exists(email, Some(existing.id)).await? {
                errors.add("email".into(), duplicate_email_error());
            }
        }

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        repo.update(existing.id, dto.into_patch())
            .await?
            .ok_or(ApiError::NotFound)
    }

    #[instrument(skip(repo))]
    pub async fn delete<R: StudentRepo>(repo: &R, id: i64) -> Result<(), ApiError> {
        if repo.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound)
        }
    }
}
