//! HTTP request representation handed from connectors to the dispatch layer.

use masking::{ErasedMaskSerialize, Maskable, Secret};
use serde::{Deserialize, Serialize};

use crate::ext_traits::url_encode_nested_value;

/// Headers, with per-header masking for sensitive values.
pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

/// Request body, type-erased so that connectors can hand over their own
/// serializable types together with the wire encoding to use.
pub enum RequestContent {
    /// Serialize the body as JSON.
    Json(Box<dyn ErasedMaskSerialize + Send>),
    /// Serialize the body as form-url-encoded key-value pairs, expanding
    /// nested mappings into bracketed keys.
    FormUrlEncoded(Box<dyn ErasedMaskSerialize + Send>),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
            Self::FormUrlEncoded(_) => "FormUrlEncodedRequestBody",
        })
    }
}

impl RequestContent {
    /// Render the body to its wire representation.
    pub fn get_inner_value(&self) -> Secret<String> {
        match self {
            Self::Json(body) => serde_json::to_string(&body).unwrap_or_default().into(),
            Self::FormUrlEncoded(body) => serde_json::to_value(&body)
                .map(|value| url_encode_nested_value(&value))
                .unwrap_or_default()
                .into(),
        }
    }

    /// The `Content-Type` header value matching the encoding.
    pub fn get_content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::FormUrlEncoded(_) => "application/x-www-form-urlencoded",
        }
    }
}

fn default_request_headers() -> [(String, Maskable<String>); 1] {
    [("via".to_string(), "Switcher".to_string().into())]
}

#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl Request {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    pub fn set_body<T: Into<RequestContent>>(&mut self, body: T) {
        self.body.replace(body.into());
    }

    pub fn add_default_headers(&mut self) {
        self.headers.extend(default_request_headers());
    }

    pub fn add_header(&mut self, header: &str, value: Maskable<String>) {
        self.headers.insert((String::from(header), value));
    }
}

#[derive(Debug)]
pub struct RequestBuilder {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn attach_default_headers(mut self) -> Self {
        self.headers.extend(default_request_headers());
        self
    }

    pub fn header(mut self, header: &str, value: &str) -> Self {
        self.headers.insert((header.into(), value.into()));
        self
    }

    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        self.body.replace(body.into());
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use masking::Mask;

    use super::*;

    #[derive(serde::Serialize)]
    struct Body {
        reference: String,
        token: masking::Secret<String>,
    }

    #[test]
    fn json_body_round_trip() {
        let content = RequestContent::Json(Box::new(Body {
            reference: "ref-1".to_string(),
            token: masking::Secret::new("tok".to_string()),
        }));

        let rendered = content.get_inner_value();
        let value: serde_json::Value =
            serde_json::from_str(masking::PeekInterface::peek(&rendered)).unwrap();
        assert_eq!(value["reference"], "ref-1");
        // serialization for the wire exposes the secret
        assert_eq!(value["token"], "tok");
    }

    #[test]
    fn request_builder_collects_headers() {
        let request = RequestBuilder::new()
            .method(Method::Post)
            .url("https://example.com/v1/transactions")
            .attach_default_headers()
            .headers(vec![(
                "Authorization".to_string(),
                "Bearer token".to_string().into_masked(),
            )])
            .build();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.headers.len(), 2);
    }
}
