use super::{
    client::HttpClient,
    request::{HttpRequest, Method},
    Error,
};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::{de::DeserializeOwned, Serialize};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT_NAME: &str = "prscribe";

pub trait RequestType {}
pub struct Get;
pub struct Post;
pub struct Patch;

impl RequestType for Get {}
impl RequestType for Post {}
impl RequestType for Patch {}

pub struct RequestBuilder<'c, C: HttpClient, T: RequestType> {
    _marker: std::marker::PhantomData<T>,
    client: &'c C,
    request: HttpRequest,
}

impl<'c, C, T> RequestBuilder<'c, C, T>
where
    C: HttpClient,
    T: RequestType,
{
    fn new(client: &'c C, method: Method, url: impl Into<String>) -> Self {
        RequestBuilder {
            _marker: std::marker::PhantomData,
            client,
            request: HttpRequest::new(method, url),
        }
    }

    pub fn github_headers(mut self, token: &str) -> Self {
        self.request
            .bearer_auth(token)
            .header(ACCEPT.as_str(), GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT.as_str(), USER_AGENT_NAME);

        self
    }

    /// Sends the request and decodes a 2xx JSON body, any other status is an error
    pub async fn collect<R>(self) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.client.send(self.request).await?.collect()
    }
}

impl<C: HttpClient> RequestBuilder<'_, C, Post> {
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, Error> {
        let body =
            serde_json::to_value(body).map_err(|cause| Error::SerializeRequestError { cause })?;
        self.request.body(body);
        Ok(self)
    }
}

impl<C: HttpClient> RequestBuilder<'_, C, Patch> {
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, Error> {
        let body =
            serde_json::to_value(body).map_err(|cause| Error::SerializeRequestError { cause })?;
        self.request.body(body);
        Ok(self)
    }
}

pub trait ClientRequestBuilder: HttpClient + Sized {
    fn get(&self, url: impl Into<String>) -> RequestBuilder<'_, Self, Get> {
        RequestBuilder::new(self, Method::Get, url)
    }

    fn post(&self, url: impl Into<String>) -> RequestBuilder<'_, Self, Post> {
        RequestBuilder::new(self, Method::Post, url)
    }

    fn patch(&self, url: impl Into<String>) -> RequestBuilder<'_, Self, Patch> {
        RequestBuilder::new(self, Method::Patch, url)
    }
}

impl<C: HttpClient> ClientRequestBuilder for C {}
