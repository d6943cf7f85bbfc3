use thiserror::Error;

/// Failures talking to the review endpoints from the browser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("session expired or missing")]
    Unauthorized,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    /// Maps a non-success status code to the matching variant.
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            GatewayError::Unauthorized
        } else {
            GatewayError::Status(status)
        }
    }
}

#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("unsupported or corrupt image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[cfg(feature = "ssr")]
impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
