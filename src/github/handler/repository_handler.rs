use super::pull_request_handler::PullRequestHandler;
use crate::{github::github_client::GithubClient, http::HttpClient};

pub struct RepositoryHandler<'g, C: HttpClient> {
    client: &'g GithubClient<C>,
    owner: String,
    repo: String,
}

impl<'g, C: HttpClient> RepositoryHandler<'g, C> {
    pub fn new(
        client: &'g GithubClient<C>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn pull_request(&self, number: u64) -> PullRequestHandler<'g, C> {
        PullRequestHandler::new(self.client, &self.owner, &self.repo, number)
    }
}
