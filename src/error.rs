use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors raised while bootstrapping the application: configuration,
/// dependency wiring and database setup.
///
/// Request-level failures live in [`crate::modules::product::ServiceError`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}
