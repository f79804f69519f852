use reqwest::Client;

use super::{ApiError, CardSource};
use crate::model::CardRecord;

/// reqwest-backed [`CardSource`] rooted at the configured API URL.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build().map_err(ApiError::Client)?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), resource)
    }
}

impl<R: CardRecord> CardSource<R> for ApiClient {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let url = self.endpoint(R::RESOURCE);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                method: "GET",
                url,
                status: response.status().as_u16(),
            });
        }

        response
            .json::<Vec<R>>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    async fn create(&self, draft: R::Draft) -> Result<(), ApiError> {
        let url = self.endpoint(R::RESOURCE);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&draft)
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                method: "POST",
                url,
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.endpoint("words"), "http://localhost:8000/words");
        let client = ApiClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.endpoint("flashcards"), "http://localhost:8000/flashcards");
    }
}
