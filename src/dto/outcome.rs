use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Outcome of a read-heavy endpoint that must keep dashboards rendering on
/// partial backend failure. Both arms serialize as HTTP 200: business
/// degradation is carried in the body, not in the transport status.
#[derive(Debug, Clone)]
pub enum ApiOutcome<T> {
    Ok(T),
    Degraded { reason: String, fallback: T },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl<T: Serialize> ApiOutcome<T> {
    pub fn degraded(reason: impl Into<String>, fallback: T) -> Self {
        Self::Degraded {
            reason: reason.into(),
            fallback,
        }
    }

    fn envelope(self) -> Envelope<T> {
        match self {
            ApiOutcome::Ok(data) => Envelope {
                success: true,
                data,
                warning: None,
            },
            ApiOutcome::Degraded { reason, fallback } => Envelope {
                success: true,
                data: fallback,
                warning: Some(reason),
            },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiOutcome<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.envelope())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_has_no_warning() {
        let out = ApiOutcome::Ok(vec![1, 2, 3]).envelope();
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
        assert!(value.get("warning").is_none());
    }

    #[test]
    fn degraded_envelope_keeps_success_and_carries_reason() {
        let out = ApiOutcome::degraded("datastore unavailable", Vec::<i32>::new()).envelope();
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], serde_json::json!([]));
        assert_eq!(value["warning"], "datastore unavailable");
    }
}
