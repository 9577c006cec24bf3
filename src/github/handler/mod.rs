mod pull_request_handler;
mod repository_handler;

use super::github_client::GithubClient;
use crate::http::HttpClient;
pub use pull_request_handler::PullRequestHandler;
pub use repository_handler::RepositoryHandler;

/// Github repo handler access implementation
impl<C: HttpClient> GithubClient<C> {
    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_, C> {
        RepositoryHandler::new(self, owner, name)
    }
}
