//! Response envelope
//!
//! The (status code, decoded body) pair produced by one HTTP exchange.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Placeholder rendered in place of a body that is not JSON
pub const NON_JSON_BODY: &str = "No JSON Response";

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Body decoded as JSON
    Json(Value),
    /// Body was empty or not JSON
    NonJson,
}

impl Body {
    /// Decode raw bytes, degrading to [`Body::NonJson`] instead of failing
    pub fn decode(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::NonJson,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::NonJson => None,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Json(value) => write!(f, "{}", value),
            Body::NonJson => f.write_str(NON_JSON_BODY),
        }
    }
}

/// Status code plus decoded body of one exchange
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: StatusCode,
    pub body: Body,
}

impl Envelope {
    pub fn from_parts(status: StatusCode, bytes: &[u8]) -> Self {
        Self {
            status,
            body: Body::decode(bytes),
        }
    }

    /// True when the body decoded to a JSON array
    pub fn is_sequence(&self) -> bool {
        matches!(self.body, Body::Json(Value::Array(_)))
    }

    /// Elements of a JSON array body
    pub fn items(&self) -> Option<&[Value]> {
        match &self.body {
            Body::Json(Value::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// Deserialize the body into a typed value, if it has that shape
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        self.body
            .as_json()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobcheck_core::domain::job::Job;

    #[test]
    fn test_json_body_decodes() {
        let envelope = Envelope::from_parts(StatusCode::OK, br#"[{"id":1}]"#);
        assert!(envelope.is_sequence());
        assert_eq!(envelope.items().map(|items| items.len()), Some(1));
    }

    #[test]
    fn test_empty_body_becomes_sentinel() {
        let envelope = Envelope::from_parts(StatusCode::NO_CONTENT, b"");
        assert_eq!(envelope.body, Body::NonJson);
        assert_eq!(envelope.body.to_string(), NON_JSON_BODY);
        assert!(!envelope.is_sequence());
    }

    #[test]
    fn test_html_body_becomes_sentinel() {
        let envelope = Envelope::from_parts(StatusCode::UNAUTHORIZED, b"<html>login</html>");
        assert_eq!(envelope.body, Body::NonJson);
    }

    #[test]
    fn test_object_is_not_a_sequence() {
        let envelope = Envelope::from_parts(StatusCode::OK, br#"{"id":1}"#);
        assert!(!envelope.is_sequence());
        assert!(envelope.items().is_none());
    }

    #[test]
    fn test_typed_decode() {
        let envelope = Envelope::from_parts(
            StatusCode::CREATED,
            br#"{"id":4,"jobName":"New CI/CD Job","status":"Pending","jobType":"Build"}"#,
        );
        let job: Job = envelope.decode().unwrap();
        assert_eq!(job.id, 4);

        let wrong: Option<Vec<Job>> = envelope.decode();
        assert!(wrong.is_none());
    }
}
