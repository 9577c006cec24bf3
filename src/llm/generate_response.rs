use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}
