//! REST client and the five-way fetch join.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::{BrandRow, CarRow, CorrelationData, DashboardData, Segment, Summary};

/// Origin used when no override is injected at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Base URL for the analytics service: the `OTODASH_API_URL` build-time
/// variable when set, otherwise [`DEFAULT_BASE_URL`].
pub fn default_base_url() -> String {
    option_env!("OTODASH_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

/// Client for the analytics service. Cheap to clone; holds no state beyond
/// the injected origin and the underlying HTTP connector.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(default_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
    ) -> ApiResult<T> {
        let url = self.endpoint(path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { resource, source })
    }

    pub async fn summary(&self) -> ApiResult<Summary> {
        self.fetch("summary", "summary").await
    }

    pub async fn price_distribution(&self) -> ApiResult<Vec<Segment>> {
        self.fetch("price-distribution", "price-distribution").await
    }

    pub async fn brand_analysis(&self) -> ApiResult<Vec<BrandRow>> {
        self.fetch("brand-analysis", "brand-analysis").await
    }

    pub async fn cars(&self) -> ApiResult<Vec<CarRow>> {
        self.fetch("cars", "cars").await
    }

    pub async fn correlation(&self) -> ApiResult<CorrelationData> {
        self.fetch("correlation", "correlation").await
    }

    /// Fetch all five resources concurrently and combine them into one
    /// snapshot. Resolves only once every request has settled successfully;
    /// the first failure fails the whole bundle, so callers never observe
    /// partial data. One fetch per page lifecycle — no retry, no caching,
    /// no timeout.
    pub async fn load_dashboard(&self) -> ApiResult<DashboardData> {
        let joined = futures::try_join!(
            self.summary(),
            self.price_distribution(),
            self.brand_analysis(),
            self.cars(),
            self.correlation(),
        );

        match joined {
            Ok((summary, segments, brands, cars, correlation)) => {
                tracing::info!(
                    cars = cars.len(),
                    brands = brands.len(),
                    "dashboard snapshot loaded"
                );
                Ok(DashboardData {
                    summary,
                    segments,
                    brands,
                    cars,
                    correlation,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "dashboard snapshot fetch failed");
                Err(err)
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
