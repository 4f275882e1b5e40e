use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("variant editor {0} not found")]
    EditorNotFound(Uuid),
    #[error("variant axis {0} not found")]
    AxisNotFound(u64),
    #[error("variant row {0} not found")]
    RowNotFound(u64),
    #[error("product {0} not found")]
    ProductNotFound(String),
    #[error("unknown sort column `{0}`")]
    UnknownSortColumn(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EditorNotFound(_)
            | AppError::AxisNotFound(_)
            | AppError::RowNotFound(_)
            | AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnknownSortColumn(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() && status != StatusCode::NOT_FOUND {
            log::warn!("rejected request: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// Extractor failures keep axum's status but use the JSON error body
macro_rules! impl_from_rejection {
    ($($rejection:ty),*) => {
        $(
            impl From<$rejection> for AppError {
                fn from(rejection: $rejection) -> Self {
                    AppError::Rejected {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    }
                }
            }
        )*
    };
}

impl_from_rejection!(JsonRejection, PathRejection, QueryRejection);

pub type AppResult<T> = Result<T, AppError>;
