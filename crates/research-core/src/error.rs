use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResearchError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
