//! Response envelope shared by every API endpoint.
//!
//! Every outcome is rendered as
//!
//! ```text
//! { "code": 200, "status": "success", "message": "...", "data": ... }
//! { "code": 404, "status": "error",   "message": "...", "error": ... }
//! ```
//!
//! with `code` always equal to the HTTP status of the response. The payload
//! slot is a [`Payload`], so each case keeps a fixed JSON shape.

use std::borrow::Cow;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Serialize, Serializer};

/// Discriminator written to the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Content of the `data` / `error` slot.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    /// Serialized as `null`.
    Absent,
    Item(T),
    List(Vec<T>),
    /// Per-field violation messages.
    Violations(Vec<String>),
    /// Opaque error text.
    Text(String),
}

/// Which slot the payload is written to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot<T> {
    Data(Payload<T>),
    Error(Payload<T>),
}

/// The response envelope. `T` is the item type carried on success.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T = ()> {
    #[serde(serialize_with = "serialize_status_code")]
    pub code: StatusCode,
    pub status: ResponseStatus,
    pub message: Cow<'static, str>,
    #[serde(flatten)]
    pub slot: Slot<T>,
}

fn serialize_status_code<S: Serializer>(code: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(code.as_u16())
}

impl<T> Envelope<T> {
    pub fn success(
        code: StatusCode,
        message: impl Into<Cow<'static, str>>,
        data: Payload<T>,
    ) -> Self {
        Self {
            code,
            status: ResponseStatus::Success,
            message: message.into(),
            slot: Slot::Data(data),
        }
    }

    pub fn error(
        code: StatusCode,
        message: impl Into<Cow<'static, str>>,
        error: Payload<T>,
    ) -> Self {
        Self {
            code,
            status: ResponseStatus::Error,
            message: message.into(),
            slot: Slot::Error(error),
        }
    }

    /// 200
    pub fn ok(message: impl Into<Cow<'static, str>>, data: Payload<T>) -> Self {
        Self::success(StatusCode::OK, message, data)
    }

    /// 201
    pub fn created(message: impl Into<Cow<'static, str>>, data: Payload<T>) -> Self {
        Self::success(StatusCode::CREATED, message, data)
    }

    /// 204, always with an absent payload.
    pub fn no_content(message: impl Into<Cow<'static, str>>) -> Self {
        Self::success(StatusCode::NO_CONTENT, message, Payload::Absent)
    }

    /// 400
    pub fn bad_request(message: impl Into<Cow<'static, str>>, error: Payload<T>) -> Self {
        Self::error(StatusCode::BAD_REQUEST, message, error)
    }

    /// 404
    pub fn not_found(message: impl Into<Cow<'static, str>>, error: Payload<T>) -> Self {
        Self::error(StatusCode::NOT_FOUND, message, error)
    }

    /// 500
    pub fn internal_server_error(
        message: impl Into<Cow<'static, str>>,
        error: Payload<T>,
    ) -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message, error)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        // 204 must not carry a body.
        if self.code == StatusCode::NO_CONTENT {
            return self.code.into_response();
        }
        (self.code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_envelope_shape() {
        let env = Envelope::ok("Movies fetched successfully", Payload::List(vec![1, 2]));
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({
                "code": 200,
                "status": "success",
                "message": "Movies fetched successfully",
                "data": [1, 2],
            })
        );
    }

    #[test]
    fn absent_payload_is_null() {
        let env = Envelope::<()>::ok("Movie deleted successfully", Payload::Absent);
        let value = serde_json::to_value(&env).unwrap();
        assert!(value["data"].is_null());
        assert!(value.as_object().unwrap().contains_key("data"));
    }

    #[test]
    fn error_envelope_uses_error_slot() {
        let env = Envelope::<()>::bad_request(
            "Validation failed",
            Payload::Violations(vec!["title: This field is required".to_string()]),
        );
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["code"], 400);
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], json!(["title: This field is required"]));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn text_payload_is_plain_string() {
        let env = Envelope::<()>::internal_server_error(
            "Failed to fetch movies",
            Payload::Text("connection refused".to_string()),
        );
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["error"], "connection refused");
    }

    #[test]
    fn constructors_fix_status_codes() {
        assert_eq!(Envelope::<()>::ok("m", Payload::Absent).code, StatusCode::OK);
        assert_eq!(
            Envelope::<()>::created("m", Payload::Absent).code,
            StatusCode::CREATED
        );
        assert_eq!(Envelope::<()>::no_content("m").code, StatusCode::NO_CONTENT);
        assert_eq!(
            Envelope::<()>::bad_request("m", Payload::Absent).code,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Envelope::<()>::not_found("m", Payload::Absent).code,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Envelope::<()>::internal_server_error("m", Payload::Absent).code,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn transport_status_matches_code() {
        let response = Envelope::<()>::not_found("Movie not found", Payload::Absent).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
