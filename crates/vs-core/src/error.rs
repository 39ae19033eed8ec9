use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl From<serde_json::Error> for SkillError {
    fn from(err: serde_json::Error) -> Self {
        SkillError::MalformedRequest(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SkillError>;
