use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub message: String,
}

impl Commit {
    pub fn message(&self) -> &str {
        &self.commit.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_the_nested_message() {
        let json = r#"[
            {"sha": "a1", "commit": {"message": "first", "author": {"name": "octocat"}}},
            {"sha": "b2", "commit": {"message": "second\n\nwith body"}}
        ]"#;

        let commits: Vec<Commit> = serde_json::from_str(json).unwrap();

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].sha, "a1");
        assert_eq!(commits[0].message(), "first");
        assert_eq!(commits[1].message(), "second\n\nwith body");
    }
}
