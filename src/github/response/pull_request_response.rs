use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
}

impl PullRequest {
    /// True when the description holds anything besides whitespace
    pub fn has_description(&self) -> bool {
        self.body
            .as_deref()
            .is_some_and(|body| !body.trim().is_empty())
    }
}
