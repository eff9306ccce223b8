use std::fmt::Debug;
use std::future::Future;

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::students::model::{NewStudent, Student, StudentPatch};

/// Persistence operations for the student table.
///
/// Handlers and the service layer are generic over this trait, so the
/// integration tests can swap in an in-memory implementation and exercise
/// the full HTTP surface without a running database.
pub trait StudentRepo: Clone + Debug + Send + Sync + 'static {
    fn find_all(&self) -> impl Future<Output = Result<Vec<Student>>> + Send;

    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Option<Student>>> + Send;

    /// Reports whether `email` is already taken, optionally ignoring the
    /// row identified by `exclude_id` (used by update so a student keeping
    /// their own email is not flagged as a duplicate).
    fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> impl Future<Output = Result<bool>> + Send;

    fn insert(&self, new: NewStudent) -> impl Future<Output = Result<Student>> + Send;

    /// Applies the supplied fields to the row and refreshes `updated_at`.
    /// Returns `None` when the row does not exist.
    fn update(
        &self,
        id: i64,
        patch: StudentPatch,
    ) -> impl Future<Output = Result<Option<Student>>> + Send;

    /// Hard-deletes the row. Returns `false` when nothing was deleted.
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool>> + Send;
}

/// PostgreSQL-backed repository used by the server binary.
///
/// Uniqueness of `email` is ultimately guaranteed by the UNIQUE constraint
/// on the table; `email_exists` is only the pre-check that turns the common
/// case into a validation error.
#[derive(Clone, Debug)]
pub struct PgStudentRepo {
    pool: PgPool,
}

impl PgStudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl StudentRepo for PgStudentRepo {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, phone, language, created_at, updated_at
             FROM students
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch students")?;

        Ok(students)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, phone, language, created_at, updated_at
             FROM students
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch student by id")?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM students
                WHERE email = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check email uniqueness")?;

        Ok(exists)
    }

    #[instrument(skip(self, new))]
    async fn insert(&self, new: NewStudent) -> Result<Student> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (name, email, phone, language)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, phone, language, created_at, updated_at",
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.phone)
        .bind(new.language)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert student")?;

        Ok(student)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: StudentPatch) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "UPDATE students
             SET name = COALESCE($2::VARCHAR, name),
                 email = COALESCE($3::VARCHAR, email),
                 phone = COALESCE($4::VARCHAR, phone),
                 language = COALESCE($5::VARCHAR, language),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING id, name, email, phone, language, created_at, updated_at",
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.phone)
        .bind(patch.language)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update student")?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete student")?;

        Ok(result.rows_affected() > 0)
    }
}
