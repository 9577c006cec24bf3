mod github_client;
mod handler;
mod request;
mod response;

pub use github_client::GithubClient;
pub use handler::PullRequestHandler;
pub use response::{ChangedFile, Commit, PullRequest};
