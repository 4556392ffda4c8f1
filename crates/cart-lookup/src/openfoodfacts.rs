//! Open Food Facts client.
//!
//! Uses the v0 product endpoint, `GET {base}/api/v0/product/{code}.json`.
//! A found product carries `"status": 1`; anything else is a miss, even
//! when the HTTP status is 200.

use std::time::Duration;

use cart_config::LookupConfig;

use crate::{ProductRecord, ProductSource, error::LookupError, http::product_body};

#[derive(serde::Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i64,
    #[serde(default)]
    status_verbose: Option<String>,
    #[serde(default)]
    product: Option<OffProduct>,
}

#[derive(serde::Deserialize)]
struct OffProduct {
    #[serde(default)]
    ingredients_text: Option<String>,
}

/// HTTP client for the Open Food Facts product database.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    /// Build a client from lookup configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client only when lookups are enabled in `config`.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &LookupConfig) -> Result<Option<Self>, LookupError> {
        if config.is_configured() {
            Self::new(config).map(Some)
        } else {
            Ok(None)
        }
    }

    /// URL of the product endpoint for `code`.
    #[must_use]
    pub fn product_url(&self, code: &str) -> String {
        format!(
            "{}/api/v0/product/{}.json",
            self.base_url,
            urlencoding::encode(code)
        )
    }
}

impl ProductSource for OpenFoodFactsClient {
    async fn fetch_product(&self, code: &str) -> Result<ProductRecord, LookupError> {
        let url = self.product_url(code);
        tracing::debug!(code, %url, "fetching product");

        let resp = self.http.get(&url).send().await?;
        let body = product_body(resp, code).await?;
        parse_product_response(code, &body)
    }
}

/// Map a raw product response body to a [`ProductRecord`].
fn parse_product_response(code: &str, body: &str) -> Result<ProductRecord, LookupError> {
    let data: ProductResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    if data.status != 1 {
        tracing::debug!(
            code,
            status = data.status,
            verbose = data.status_verbose.as_deref().unwrap_or(""),
            "product database reported a miss"
        );
        return Err(LookupError::NotFound {
            code: code.to_string(),
        });
    }

    Ok(ProductRecord {
        code: code.to_string(),
        ingredients_text: data.product.and_then(|p| p.ingredients_text),
    })
}
