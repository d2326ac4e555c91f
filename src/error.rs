use crate::types::RepositoryRef;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StargazersError {
    #[error("Argument should be of form username/repository.")]
    InvalidIdentifier(String),

    #[error("Too many requests.")]
    RateLimited,

    #[error("Resource not Found. Check that the repository {0} is correct.")]
    NotFound(RepositoryRef),

    #[error("{0} HTTP.")]
    Transport(u16),

    #[error("Missing hyperlink tag.")]
    MissingHyperlinkTag,

    #[error("Missing 'href' attribute from hyperlink tag.")]
    MissingHrefAttribute,

    #[error("Unexpected 'href' content: {0:?}")]
    HrefContent(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, StargazersError>;
