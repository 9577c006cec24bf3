use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    #[serde(default)]
    pub status: Option<String>,
}
