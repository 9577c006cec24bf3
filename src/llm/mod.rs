mod generate_request;
mod generate_response;

use crate::http::{ClientRequestBuilder, HttpClient};
use anyhow::Result;
use generate_request::GenerateRequest;
use generate_response::GenerateResponse;

/// Client for an Ollama-style `/api/generate` endpoint
pub struct GenerationClient<C: HttpClient> {
    http: C,
    endpoint: String,
    model: String,
}

impl<C: HttpClient> GenerationClient<C> {
    pub fn new(http: C, endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        GenerationClient {
            http,
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        log::debug!(
            "sending {} byte prompt to {} ({})",
            prompt.len(),
            self.endpoint,
            self.model
        );

        let request = GenerateRequest::new(&self.model, prompt);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)?
            .collect::<GenerateResponse>()
            .await?;

        Ok(response.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{self, testing::status_of, ReqwestClient};
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn should_post_model_and_prompt() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::Json(json!({
                "model": "llama3.2",
                "prompt": "describe this",
                "stream": false
            })))
            .with_status(200)
            .with_body(r#"{"model":"llama3.2","response":"Generated text","done":true}"#)
            .create_async()
            .await;

        let client = GenerationClient::new(
            ReqwestClient::new(),
            format!("{}/api/generate", server.url()),
            "llama3.2",
        );

        let text = client.generate("describe this").await?;

        mock.assert_async().await;
        assert_eq!(text, "Generated text");

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_when_the_model_service_errors() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/api/generate")
            .with_status(500)
            .with_body(r#"{"error":"model not found"}"#)
            .create_async()
            .await;

        let client = GenerationClient::new(
            ReqwestClient::new(),
            format!("{}/api/generate", server.url()),
            "missing",
        );

        let err = client.generate("prompt").await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(status_of(&err), Some(500));
    }

    #[tokio::test]
    async fn should_fail_without_response_field() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_body(r#"{"done":true}"#)
            .create_async()
            .await;

        let client = GenerationClient::new(
            ReqwestClient::new(),
            format!("{}/api/generate", server.url()),
            "llama3.2",
        );

        let err = client.generate("prompt").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<http::Error>(),
            Some(http::Error::ParseResponseError { .. })
        ));
    }
}
