mod commit_response;
mod file_response;
mod pull_request_response;

pub use commit_response::Commit;
pub use file_response::ChangedFile;
pub use pull_request_response::PullRequest;
