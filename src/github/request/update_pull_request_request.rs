use serde::{Deserialize, Serialize};

/// PATCH payload replacing a pull request description.
///
/// Only `body` is sent, so title, state and base stay as they are.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePullRequestRequest {
    pub body: String,
}

impl UpdatePullRequestRequest {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
