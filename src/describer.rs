use crate::{
    config::Config,
    github::{ChangedFile, Commit, GithubClient, PullRequest, PullRequestHandler},
    http::HttpClient,
    llm::GenerationClient,
    prompt,
};
use anyhow::{Context, Result};

pub enum Outcome {
    Published {
        description: String,
        pull_request: PullRequest,
    },
    DryRun {
        description: String,
    },
}

/// Fetches a pull request, asks the model for a description and writes it back.
///
/// Every step awaits the previous one; the first failure ends the run before anything
/// is written.
pub struct Describer<C: HttpClient> {
    github: GithubClient<C>,
    generator: GenerationClient<C>,
    owner: String,
    repo: String,
    number: u64,
    dry_run: bool,
}

impl<C: HttpClient + Clone> Describer<C> {
    pub fn new(config: &Config, http: C) -> Result<Self> {
        let token = config.token()?;

        Ok(Describer {
            github: GithubClient::new(http.clone(), &config.api_base_url, token),
            generator: GenerationClient::new(http, &config.model_endpoint, &config.model_name),
            owner: config.owner.to_owned(),
            repo: config.repo.to_owned(),
            number: config.pr_number,
            dry_run: config.dry_run,
        })
    }
}

impl<C: HttpClient> Describer<C> {
    pub async fn run(&self) -> Result<Outcome> {
        log::info!(
            "Fetching pull request #{} of {}/{}",
            self.number,
            self.owner,
            self.repo
        );
        let pull_request = self.fetch_pull_request().await?;
        let commits = self.fetch_commits().await?;
        let files = self.fetch_changed_files().await?;

        log::info!(
            "Generating description for {} commits and {} files using {}",
            commits.len(),
            files.len(),
            self.generator.model()
        );
        let description = self
            .compose_description(&pull_request, &commits, &files)
            .await?;

        if self.dry_run {
            log::info!("Dry run, leaving pull request #{} untouched", self.number);
            return Ok(Outcome::DryRun { description });
        }

        if pull_request.has_description() {
            log::warn!(
                "Overwriting the existing description of pull request #{}",
                self.number
            );
        }

        log::info!("Updating pull request #{}", self.number);
        let pull_request = self.publish_description(&description).await?;

        Ok(Outcome::Published {
            description,
            pull_request,
        })
    }

    fn pull_request(&self) -> PullRequestHandler<'_, C> {
        self.github
            .repo(&self.owner, &self.repo)
            .pull_request(self.number)
    }

    pub async fn fetch_pull_request(&self) -> Result<PullRequest> {
        self.pull_request()
            .get()
            .await
            .with_context(|| format!("Cannot fetch pull request #{}", self.number))
    }

    pub async fn fetch_commits(&self) -> Result<Vec<Commit>> {
        let commits = self
            .pull_request()
            .commits()
            .await
            .with_context(|| format!("Cannot fetch commits of pull request #{}", self.number))?;

        for commit in &commits {
            log::debug!("commit {}", commit.sha);
        }

        Ok(commits)
    }

    pub async fn fetch_changed_files(&self) -> Result<Vec<ChangedFile>> {
        let files = self
            .pull_request()
            .files()
            .await
            .with_context(|| format!("Cannot fetch files of pull request #{}", self.number))?;

        for file in &files {
            log::debug!(
                "file {} ({})",
                file.filename,
                file.status.as_deref().unwrap_or("unknown")
            );
        }

        Ok(files)
    }

    pub async fn compose_description(
        &self,
        pull_request: &PullRequest,
        commits: &[Commit],
        files: &[ChangedFile],
    ) -> Result<String> {
        let prompt = prompt::build(pull_request, commits, files)
            .context("Cannot build the description prompt")?;

        self.generator
            .generate(&prompt)
            .await
            .context("Cannot generate the description")
    }

    pub async fn publish_description(&self, description: &str) -> Result<PullRequest> {
        self.pull_request()
            .update_body(description)
            .await
            .with_context(|| format!("Cannot update pull request #{}", self.number))
    }
}
