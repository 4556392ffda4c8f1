//! Status handling for product database responses.
//!
//! | HTTP status | Result |
//! |-------------|--------|
//! | 2xx | body text |
//! | 404 | [`LookupError::NotFound`] for the requested code |
//! | 429 | [`LookupError::RateLimited`], honoring `Retry-After` seconds |
//! | other | [`LookupError::Api`] with the body as message |

use crate::error::LookupError;

/// Wait suggested when a rate-limited response has no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Consume a product response and return its body.
///
/// # Errors
///
/// Returns the [`LookupError`] matching the status (see the module table), or
/// [`LookupError::Http`] if the body cannot be read.
pub async fn product_body(resp: reqwest::Response, code: &str) -> Result<String, LookupError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.text().await?);
    }
    match status.as_u16() {
        404 => Err(LookupError::NotFound {
            code: code.to_string(),
        }),
        429 => Err(LookupError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        }),
        other => Err(LookupError::Api {
            status: other,
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

/// `Retry-After` as delta-seconds. HTTP dates are not interpreted.
fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, retry_after: Option<&str>, body: &str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body.to_string()).unwrap())
    }

    #[tokio::test]
    async fn success_returns_body() {
        let body = product_body(response(200, None, r#"{"status":1}"#), "123")
            .await
            .unwrap();
        assert_eq!(body, r#"{"status":1}"#);
    }

    #[tokio::test]
    async fn not_found_carries_requested_code() {
        let err = product_body(response(404, None, "missing"), "3017620422003")
            .await
            .unwrap_err();
        assert!(
            matches!(err, LookupError::NotFound { ref code } if code == "3017620422003"),
            "got {err:?}"
        );
        assert!(err.is_expected());
    }

    #[tokio::test]
    async fn rate_limited_reads_retry_after_seconds() {
        let err = product_body(response(429, Some("30"), ""), "123")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::RateLimited { retry_after_secs: 30 }));
    }

    #[test]
    fn retry_after_falls_back_when_absent_or_a_date() {
        assert_eq!(retry_after_secs(&response(429, None, "")), DEFAULT_RETRY_AFTER_SECS);
        assert_eq!(
            retry_after_secs(&response(429, Some("Wed, 21 Oct 2026 07:28:00 GMT"), "")),
            DEFAULT_RETRY_AFTER_SECS
        );
    }

    #[tokio::test]
    async fn server_error_keeps_status_and_body() {
        let err = product_body(response(503, None, "maintenance"), "123")
            .await
            .unwrap_err();
        match err {
            LookupError::Api {
                status,
                ref message,
            } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            ref other => panic!("expected Api error, got {other:?}"),
        }
        assert!(!err.is_expected());
    }
}
