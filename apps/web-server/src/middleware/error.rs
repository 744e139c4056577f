//! Error handling - everything a handler can't recover from locally.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use std::fmt;

use quill_core::error::RepoError;
use quill_core::ports::AuthError;

use crate::views;

const INTERNAL_ERROR_PAGE: &str = "<!DOCTYPE html>\n<html><head><title>Blog Post</title></head>\
<body><h1>Something went wrong</h1><p>Please try again later.</p></body></html>";

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// No logged-in user. Answered with a redirect to the login page.
    LoginRequired,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::LoginRequired => write!(f, "Login required"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::LoginRequired => StatusCode::FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::LoginRequired => {
                tracing::debug!("No logged-in user, redirecting to /login");
                views::redirect("/login")
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError()
                    .content_type(ContentType::html())
                    .body(INTERNAL_ERROR_PAGE)
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<actix_session::SessionInsertError> for AppError {
    fn from(err: actix_session::SessionInsertError) -> Self {
        AppError::Internal(format!("Session write failed: {}", err))
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("Template rendering failed: {}", err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
