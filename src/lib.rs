pub mod cli;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod github;
pub mod html;
pub mod types;

pub use config::ClientConfig;
pub use enumerator::StargazerEnumerator;
pub use error::{Result, StargazersError};
pub use types::{RepositoryRef, Stargazer};
