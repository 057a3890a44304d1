use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    Session(ar_core::Error),
    /// A newer request replaced the one the client was waiting on.
    Superseded,
    Internal(String),
}

impl From<ar_core::Error> for ApiError {
    fn from(e: ar_core::Error) -> Self {
        Self::Session(e)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        use ar_core::Error;
        match self {
            Self::Session(e) => match e {
                Error::EmptyInput => StatusCode::BAD_REQUEST,
                Error::LookupMiss(_) | Error::NoAnalysis => StatusCode::NOT_FOUND,
                Error::AnalysisPending | Error::ChatPending | Error::ViewUnavailable(_) => {
                    StatusCode::CONFLICT
                }
                Error::AnalysisFailure(_) | Error::Inference(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Superseded => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Session(e) => e.to_string(),
            Self::Superseded => "Request was superseded by a newer one".to_string(),
            Self::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self.message());
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
