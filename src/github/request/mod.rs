mod update_pull_request_request;

pub use update_pull_request_request::UpdatePullRequestRequest;
