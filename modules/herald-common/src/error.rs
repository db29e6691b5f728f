use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeraldError {
    #[error("Invalid destination: {0}")]
    InvalidDestination(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
