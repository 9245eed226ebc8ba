use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// True when the underlying failure is a unique-constraint violation,
    /// e.g. inserting a second link row for the same (genre, film_work) pair.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            AppError::Db(err) => {
                matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
            }
            AppError::Other(_) => false,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
