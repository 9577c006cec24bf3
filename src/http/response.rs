use super::Error;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx response into [`Error::StatusError`] carrying the raw body
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::StatusError {
                status: self.status,
                body: self.body,
            })
        }
    }

    pub fn collect<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let response = self.error_for_status()?;

        serde_json::from_str::<T>(&response.body).map_err(|cause| Error::ParseResponseError { cause })
    }
}
