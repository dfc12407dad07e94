//! Request field extraction
//!
//! Handlers read their inputs as loose form fields. Fields come from the
//! query string and, for `POST`/`PUT`/`PATCH`, from a url-encoded or
//! multipart body. When a name appears more than once the first value
//! wins, and body values are considered before query values.

use crate::error::{Result, ServerError};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Query, Request},
    http::{header, Method},
    Form,
};
use std::collections::HashMap;

/// Form fields gathered from the query string and request body
#[derive(Debug, Clone, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    /// Build from name/value pairs; earlier pairs win
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut fields = HashMap::new();
        for (name, value) in pairs {
            fields.entry(name).or_insert(value);
        }
        Self(fields)
    }

    /// Value of a field, treating an empty value as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Values of several fields that must all be present
    ///
    /// Fails with `BadRequest(message)` if any of them is missing or empty.
    pub fn required<const N: usize>(&self, names: [&str; N], message: &str) -> Result<[&str; N]> {
        let mut values: [&str; N] = [""; N];
        for (slot, name) in values.iter_mut().zip(names) {
            *slot = self
                .get(name)
                .ok_or_else(|| ServerError::BadRequest(message.to_string()))?;
        }
        Ok(values)
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let query_pairs = match req.uri().query() {
            Some(_) => {
                let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
                    .map_err(|e| ServerError::BadRequest(format!("Invalid query string: {}", e)))?;
                pairs
            }
            None => Vec::new(),
        };

        let reads_body = matches!(*req.method(), Method::POST | Method::PUT | Method::PATCH);
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);

        let body_pairs = match content_type {
            Some(ct) if reads_body && ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::BadRequest(format!("Invalid form body: {}", e)))?;
                pairs
            }
            Some(ct) if reads_body && ct.starts_with("multipart/form-data") => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {}", e)))?;
                multipart_pairs(&ct, body).await?
            }
            _ => Vec::new(),
        };

        Ok(Self::from_pairs(body_pairs.into_iter().chain(query_pairs)))
    }
}

async fn multipart_pairs(content_type: &str, body: Bytes) -> Result<Vec<(String, String)>> {
    let boundary = multer::parse_boundary(content_type)
        .map_err(|e| ServerError::BadRequest(format!("Missing boundary: {}", e)))?;

    // Convert Bytes to a stream for multer
    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to parse multipart: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| ServerError::BadRequest(format!("Failed to read field {}: {}", name, e)))?;
        pairs.push((name, value));
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http};

    async fn extract(req: Request) -> Result<FormFields> {
        FormFields::from_request(req, &()).await
    }

    #[tokio::test]
    async fn reads_query_string() {
        let req = http::Request::builder()
            .uri("/viewProfile?user_id=abc&empty=")
            .body(Body::empty())
            .unwrap();

        let fields = extract(req).await.unwrap();
        assert_eq!(fields.get("user_id"), Some("abc"));
        assert_eq!(fields.get("empty"), None);
        assert_eq!(fields.get("missing"), None);
    }

    #[tokio::test]
    async fn body_wins_over_query() {
        let req = http::Request::builder()
            .method(Method::POST)
            .uri("/register?name=FromQuery&extra=q")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=From+Body&email=a%40example.com"))
            .unwrap();

        let fields = extract(req).await.unwrap();
        assert_eq!(fields.get("name"), Some("From Body"));
        assert_eq!(fields.get("email"), Some("a@example.com"));
        assert_eq!(fields.get("extra"), Some("q"));
    }

    #[tokio::test]
    async fn delete_ignores_body() {
        let req = http::Request::builder()
            .method(Method::DELETE)
            .uri("/deletePlaylist?user_id=u")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("playlist_id=p"))
            .unwrap();

        let fields = extract(req).await.unwrap();
        assert_eq!(fields.get("user_id"), Some("u"));
        assert_eq!(fields.get("playlist_id"), None);
    }

    #[tokio::test]
    async fn reads_multipart_body() {
        let body = "--XYZ\r\n\
            Content-Disposition: form-data; name=\"name\"\r\n\r\n\
            Alice\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"email\"\r\n\r\n\
            alice@example.com\r\n\
            --XYZ--\r\n";
        let req = http::Request::builder()
            .method(Method::POST)
            .uri("/register")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XYZ")
            .body(Body::from(body))
            .unwrap();

        let fields = extract(req).await.unwrap();
        assert_eq!(fields.get("name"), Some("Alice"));
        assert_eq!(fields.get("email"), Some("alice@example.com"));
    }

    #[test]
    fn required_reports_message() {
        let fields = FormFields::from_pairs(vec![("a".to_string(), "1".to_string())]);

        assert_eq!(fields.required(["a"], "need a").unwrap(), ["1"]);

        let err = fields.required(["a", "b"], "need a and b").unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(msg) if msg == "need a and b"));
    }

    #[test]
    fn first_value_wins() {
        let fields = FormFields::from_pairs(vec![
            ("k".to_string(), "first".to_string()),
            ("k".to_string(), "second".to_string()),
        ]);
        assert_eq!(fields.get("k"), Some("first"));
    }
}
