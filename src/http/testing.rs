use super::{Error, HttpClient, HttpRequest, HttpResponse};
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// In-memory [`HttpClient`] that records every request and replays queued responses in order.
///
/// Clones share the same queue and log.
#[derive(Clone, Default)]
pub struct RecordingClient {
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    responses: Rc<RefCell<VecDeque<HttpResponse>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(HttpResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| request.url.to_owned())
            .collect()
    }
}

impl HttpClient for RecordingClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let url = request.url.to_owned();
        self.requests.borrow_mut().push(request);

        let response = self.responses.borrow_mut().pop_front();
        Ok(response.unwrap_or_else(|| panic!("no response queued for {}", url)))
    }
}

impl HttpRequest {
    /// Looks a header up by name, ignoring case
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status code carried by an [`Error::StatusError`] anywhere in the error chain
pub fn status_of(err: &anyhow::Error) -> Option<u16> {
    match err.downcast_ref::<Error>() {
        Some(Error::StatusError { status, .. }) => Some(*status),
        _ => None,
    }
}
