use crate::github::{ChangedFile, Commit, PullRequest};
use anyhow::Result;
use handlebars::{no_escape, Handlebars};
use itertools::Itertools;
use serde::Serialize;

pub const DESCRIPTION_PROMPT_TEMPLATE: &str = "description_prompt";

pub fn handlebars<'hb>() -> Result<Handlebars<'hb>> {
    let mut hb = Handlebars::new();

    // prompts are plain text, titles like `Vec<T>` must survive untouched
    hb.register_escape_fn(no_escape);
    hb.set_strict_mode(true);

    let template = include_str!("./description_prompt.hbs");

    hb.register_template_string(DESCRIPTION_PROMPT_TEMPLATE, template)?;

    Ok(hb)
}

#[derive(Serialize)]
struct DescriptionPrompt<'a> {
    title: &'a str,
    commits: String,
    files: String,
}

/// Renders the generation prompt: title, then commit messages, then filenames, each list
/// newline-joined in the order the API returned it.
pub fn build(pr: &PullRequest, commits: &[Commit], files: &[ChangedFile]) -> Result<String> {
    let data = DescriptionPrompt {
        title: &pr.title,
        commits: commits.iter().map(Commit::message).join("\n"),
        files: files.iter().map(|file| file.filename.as_str()).join("\n"),
    };

    let prompt = handlebars()?.render(DESCRIPTION_PROMPT_TEMPLATE, &data)?;

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pull_request(title: &str) -> PullRequest {
        serde_json::from_value(serde_json::json!({
            "number": 1,
            "title": title,
            "html_url": "https://github.com/octocat/hello-world/pull/1"
        }))
        .unwrap()
    }

    fn commit(message: &str) -> Commit {
        serde_json::from_value(serde_json::json!({
            "sha": "0000",
            "commit": { "message": message }
        }))
        .unwrap()
    }

    fn file(filename: &str) -> ChangedFile {
        serde_json::from_value(serde_json::json!({ "filename": filename })).unwrap()
    }

    #[test]
    fn should_embed_title_commits_and_files_in_order() {
        let prompt = build(
            &pull_request("Fix bug"),
            &[commit("a"), commit("b")],
            &[file("x.py")],
        )
        .unwrap();

        let title = prompt.find("Fix bug").unwrap();
        let commits = prompt.find("a\nb").unwrap();
        let files = prompt.find("x.py").unwrap();

        assert!(title < commits);
        assert!(commits < files);
    }

    #[test]
    fn should_join_files_with_newlines() {
        let prompt = build(
            &pull_request("Refactor"),
            &[commit("move things")],
            &[file("src/lib.rs"), file("src/main.rs"), file("Cargo.toml")],
        )
        .unwrap();

        assert!(prompt.contains("src/lib.rs\nsrc/main.rs\nCargo.toml"));
    }

    #[test]
    fn should_not_escape_markup_in_the_title() {
        let prompt = build(&pull_request("Use Vec<u8> & \"bytes\""), &[], &[]).unwrap();

        assert!(prompt.contains("Use Vec<u8> & \"bytes\""));
    }

    #[test]
    fn should_ask_for_the_standard_sections() {
        let prompt = build(&pull_request("Fix bug"), &[commit("a")], &[file("x.py")]).unwrap();

        assert!(prompt.contains("Summary of changes"));
        assert!(prompt.contains("Motivation/Context"));
        assert!(prompt.contains("Risks (if any)"));
        assert!(prompt.contains("Testing/Validation steps"));
    }

    #[test]
    fn should_render_empty_lists() {
        let prompt = build(&pull_request("Empty"), &[], &[]).unwrap();

        assert!(prompt.contains("Commits:\n\n"));
    }
}
