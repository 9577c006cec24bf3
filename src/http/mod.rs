mod client;
mod request;
mod request_builder;
mod response;

#[cfg(test)]
pub mod testing;

pub use client::{HttpClient, ReqwestClient};
pub use request::{HttpRequest, Method};
pub use request_builder::ClientRequestBuilder;
pub use response::HttpResponse;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed with status {status}: {body}")]
    StatusError { status: u16, body: String },
    #[error("Failed to send request to {url}")]
    SendRequestError {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to serialize request body")]
    SerializeRequestError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
