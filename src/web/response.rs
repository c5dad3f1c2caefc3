// src/web/response.rs

//! Turning templates and errors into HTTP responses.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::AppError;

/// Render `template` with status 200.
pub fn render<T: Template>(template: &T) -> Response {
    render_with_status(StatusCode::OK, template)
}

/// Render `template` with the given status; rendering failures become 500.
pub fn render_with_status<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            _ if self.is_not_found() => StatusCode::NOT_FOUND,
            Self::Status { .. } | Self::Http(_) => StatusCode::BAD_GATEWAY,
            Self::Validation(_) | Self::Encoding { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        let body = status.canonical_reason().unwrap_or("Error").to_string();
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::not_found("berita 1").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Status { status: 404, url: String::new() }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Status { status: 503, url: String::new() }.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::config("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_hides_details() {
        let response = AppError::config("secret path /etc").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
