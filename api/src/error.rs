//! Error

use salvo::prelude::*;

use crate::mdl::FeedResponse;

/// Error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// InvalidRequest
    #[error("error: {0}")]
    InvalidRequest(String, Option<String>),
    /// The provider answered with an error or an unreadable payload
    #[error("upstream error: {1}")]
    Upstream(Option<u16>, String),
    /// The upstream request never completed
    #[error("network error: {0}")]
    Network(String, Option<String>),
    /// The upstream request timed out
    #[error("upstream request timed out")]
    Timeout,
    /// Internal server or service error
    #[error("error: {0}")]
    Internal(String, Option<String>),
}

impl Error {
    /// Returns the main message
    pub fn message(&self) -> String {
        match self {
            Error::InvalidRequest(msg, _) => msg.clone(),
            Error::Upstream(_, msg) => msg.clone(),
            Error::Network(msg, _) => msg.clone(),
            Error::Timeout => "upstream request timed out".to_string(),
            Error::Internal(msg, _) => msg.clone(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> String {
        match self {
            Error::InvalidRequest(_, _) => "INVALID_REQUEST".to_string(),
            Error::Upstream(_, _) => "UPSTREAM".to_string(),
            Error::Network(_, _) => "NETWORK".to_string(),
            Error::Timeout => "TIMEOUT".to_string(),
            Error::Internal(_, _) => "INTERNAL".to_string(),
        }
    }

    /// Returns the HTTP code
    ///
    /// Upstream error statuses are relayed as is.
    pub fn http_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_, _) => StatusCode::BAD_REQUEST,
            Error::Upstream(Some(status), _) => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            Error::Upstream(None, _) => StatusCode::BAD_GATEWAY,
            Error::Network(_, _) => StatusCode::BAD_GATEWAY,
            Error::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Error::Internal(_, _) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Error::Timeout
        } else if value.is_decode() {
            Error::Upstream(None, format!("malformed provider payload ({value})"))
        } else if let Some(status) = value.status() {
            Error::Upstream(Some(status.as_u16()), value.to_string())
        } else {
            Error::Network("failed to reach the news provider".to_string(), Some(value.to_string()))
        }
    }
}

#[async_trait]
impl Writer for Error {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let http_code = self.http_code();
        match &self {
            Error::InvalidRequest(_, _) => tracing::debug!(code = %self.code(), "{}", self),
            _ => tracing::warn!(code = %self.code(), detail = ?self.detail(), "{}", self),
        }

        res.status_code(http_code);
        res.render(Json(FeedResponse::failure(self.message())));
    }
}

impl Error {
    /// Returns the detail, if any
    fn detail(&self) -> Option<&str> {
        match self {
            Error::InvalidRequest(_, detail)
            | Error::Network(_, detail)
            | Error::Internal(_, detail) => detail.as_deref(),
            Error::Upstream(_, _) | Error::Timeout => None,
        }
    }
}

// NB: needed for OpenAPI specs
impl EndpointOutRegister for Error {
    fn register(components: &mut salvo::oapi::Components, operation: &mut salvo::oapi::Operation) {
        let schema = FeedResponse::to_schema(components);
        let content = salvo::oapi::Content::new(schema);

        let res = salvo::oapi::Response::new("Bad request")
            .add_content("application/json", content.clone());
        operation.responses.insert("400", res);

        let res = salvo::oapi::Response::new("Upstream failure")
            .add_content("application/json", content.clone());
        operation.responses.insert("502", res);

        let res = salvo::oapi::Response::new("Upstream timeout")
            .add_content("application/json", content.clone());
        operation.responses.insert("504", res);

        let res =
            salvo::oapi::Response::new("Server error").add_content("application/json", content);
        operation.responses.insert("500", res);
    }
}
