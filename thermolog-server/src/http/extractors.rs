//! Custom Axum extractors

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the shared secret on writes
pub const SECRET_HEADER: &str = "x-secret-key";

/// Raw value of the secret header, if present and valid UTF-8.
///
/// Never rejects; the comparison against the configured key happens in the
/// handler once the body has been decoded.
pub struct SecretHeader(pub Option<String>);

impl<S> FromRequestParts<S> for SecretHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Option<String> {
        let (mut parts, _) = request.into_parts();
        let SecretHeader(value) = SecretHeader::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        value
    }

    #[tokio::test]
    async fn reads_header_case_insensitively() {
        let request = Request::builder()
            .header("X-Secret-Key", "abc")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn missing_header_is_none() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await, None);
    }
}
