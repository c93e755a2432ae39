use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Smart Meter ID ({0}) not found")]
    MeterNotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Pricing(#[from] pricing_core::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        use pricing_core::Error;

        match self {
            Self::MeterNotFound(_) | Self::Pricing(Error::EmptySeries) => StatusCode::NOT_FOUND,
            Self::BadRequest(_)
            | Self::Pricing(Error::Validation(_))
            | Self::Pricing(Error::InvalidLimit(_)) => StatusCode::BAD_REQUEST,
            Self::Pricing(Error::ZeroElapsedTime) | Self::Pricing(Error::Overflow) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            metrics::counter!("http_meter_not_found_total").increment(1);
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
