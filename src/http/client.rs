use super::{Error, HttpRequest, HttpResponse};

/// Sends a built [`HttpRequest`] and hands back the raw response.
///
/// Status codes are not interpreted here, see [`HttpResponse::collect`].
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

#[derive(Clone, Debug, Default)]
pub struct ReqwestClient(reqwest::Client);

impl ReqwestClient {
    pub fn new() -> ReqwestClient {
        ReqwestClient(reqwest::Client::new())
    }
}

impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        log::debug!("{} {}", request.method, request.url);

        let mut builder = self.0.request(request.method.into(), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|cause| Error::SendRequestError {
                url: request.url.to_owned(),
                cause,
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        log::debug!("{} {} -> {} ({} bytes)", request.method, request.url, status, body.len());

        Ok(HttpResponse::new(status, body))
    }
}
