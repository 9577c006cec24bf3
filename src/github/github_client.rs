use super::{
    request::UpdatePullRequestRequest,
    response::{ChangedFile, Commit, PullRequest},
};
use crate::http::{ClientRequestBuilder, HttpClient};
use anyhow::Result;

pub struct GithubClient<C: HttpClient> {
    http: C,
    base_url: String,
    token: String,
}

impl<C: HttpClient> GithubClient<C> {
    pub fn new(http: C, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        GithubClient {
            http,
            base_url,
            token: token.into(),
        }
    }

    fn pull_request_uri(&self, owner: &str, repo: &str, number: u64) -> String {
        format!("{}/repos/{}/{}/pulls/{}", self.base_url, owner, repo, number)
    }

    pub(super) async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest> {
        let uri = self.pull_request_uri(owner, repo, number);

        let pr = self
            .http
            .get(uri)
            .github_headers(&self.token)
            .collect::<PullRequest>()
            .await?;

        Ok(pr)
    }

    pub(super) async fn get_pull_request_commits(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<Commit>> {
        let uri = format!("{}/commits", self.pull_request_uri(owner, repo, number));

        let commits = self
            .http
            .get(uri)
            .github_headers(&self.token)
            .collect::<Vec<Commit>>()
            .await?;

        Ok(commits)
    }

    pub(super) async fn get_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<ChangedFile>> {
        let uri = format!("{}/files", self.pull_request_uri(owner, repo, number));

        let files = self
            .http
            .get(uri)
            .github_headers(&self.token)
            .collect::<Vec<ChangedFile>>()
            .await?;

        Ok(files)
    }

    pub(super) async fn update_pull_request_body(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: String,
    ) -> Result<PullRequest> {
        log::debug!("Updating description of pull request #{}", number);
        let uri = self.pull_request_uri(owner, repo, number);

        let request = UpdatePullRequestRequest::new(body);

        let pr = self
            .http
            .patch(uri)
            .github_headers(&self.token)
            .json(&request)?
            .collect::<PullRequest>()
            .await?;

        Ok(pr)
    }
}
