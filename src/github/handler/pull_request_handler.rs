use crate::{
    github::{
        github_client::GithubClient,
        response::{ChangedFile, Commit, PullRequest},
    },
    http::HttpClient,
};
use anyhow::Result;

pub struct PullRequestHandler<'g, C: HttpClient> {
    client: &'g GithubClient<C>,
    owner: String,
    repo: String,
    number: u64,
}

impl<'g, C: HttpClient> PullRequestHandler<'g, C> {
    pub fn new(
        client: &'g GithubClient<C>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
    ) -> Self {
        PullRequestHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    pub async fn get(&self) -> Result<PullRequest> {
        self.client
            .get_pull_request(&self.owner, &self.repo, self.number)
            .await
    }

    pub async fn commits(&self) -> Result<Vec<Commit>> {
        self.client
            .get_pull_request_commits(&self.owner, &self.repo, self.number)
            .await
    }

    pub async fn files(&self) -> Result<Vec<ChangedFile>> {
        self.client
            .get_pull_request_files(&self.owner, &self.repo, self.number)
            .await
    }

    /// Overwrites the whole description; nothing of the previous body is kept
    pub async fn update_body(&self, body: impl Into<String>) -> Result<PullRequest> {
        self.client
            .update_pull_request_body(&self.owner, &self.repo, self.number, body.into())
            .await
    }
}
