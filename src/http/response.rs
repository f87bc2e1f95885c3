//! Final (resolved) HTTP response.

use reqwest::header::{HeaderMap, LOCATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Terminal response of a request, after any asynchronous operation it
/// started has been resolved.
#[derive(Debug, Clone)]
pub struct FinalResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl FinalResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The `Location` header, required on 202 and 303 responses.
    pub(crate) fn location(&self) -> Result<String, HttpError> {
        self.headers
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or(HttpError::MissingLocation {
                status: self.status_code(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response(status: StatusCode, body: &str) -> FinalResponse {
        FinalResponse {
            status,
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_json_body() {
        let resp = response(StatusCode::OK, r#"{"id":"c1"}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["id"], "c1");
        assert_eq!(resp.status_code(), 200);
    }

    #[test]
    fn test_location_present() {
        let mut resp = response(StatusCode::ACCEPTED, "");
        resp.headers
            .insert(LOCATION, HeaderValue::from_static("/queue/abc"));
        assert_eq!(resp.location().unwrap(), "/queue/abc");
        assert_eq!(resp.header("location"), Some("/queue/abc"));
    }

    #[test]
    fn test_location_missing() {
        let resp = response(StatusCode::ACCEPTED, "");
        assert!(matches!(
            resp.location(),
            Err(HttpError::MissingLocation { status: 202 })
        ));
    }
}
