use super::model::ProductId;
use crate::exception::HttpException;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures reported by a [`ProductGateway`](super::ProductGateway).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// An update or delete addressed a row that is not in the store.
    #[error("Record {id} does not exist")]
    RecordNotFound { id: ProductId },
}

/// Errors returned by [`ProductService`](super::ProductService).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Product with ID {id} not found")]
    NotFound { id: ProductId },

    /// Store failure, passed through untouched.
    #[error(transparent)]
    Infrastructure(#[from] GatewayError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

impl From<ServiceError> for HttpException {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { .. } => HttpException::not_found(err.to_string()),
            ServiceError::Infrastructure(source) => {
                tracing::error!(error = %source, "Product store failure");
                HttpException::internal()
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        HttpException::from(self).into_response()
    }
}
