use crate::error::{Result, StargazersError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An `owner/repository` pair naming a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    owner: String,
    repo: String,
}

impl RepositoryRef {
    /// Splits `identifier` on `/`. Exactly two non-empty components are
    /// required; nothing is trimmed or case-folded.
    pub fn parse(identifier: &str) -> Result<Self> {
        let parts: Vec<&str> = identifier.split('/').collect();
        match parts.as_slice() {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(RepositoryRef {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(StargazersError::InvalidIdentifier(identifier.to_string())),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `<base>/<owner>/<repo>/stargazers`
    pub fn stargazers_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}/stargazers",
            base_url.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    /// URL of the 1-based listing page `page`.
    pub fn page_url(&self, base_url: &str, page: u32) -> String {
        format!("{}?page={}", self.stargazers_url(base_url), page)
    }
}

impl FromStr for RepositoryRef {
    type Err = StargazersError;

    fn from_str(s: &str) -> Result<Self> {
        RepositoryRef::parse(s)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// One entry of a stargazers listing page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Stargazer {
    /// Visible text of the profile hyperlink.
    pub name: String,
    /// Profile path without its leading `/`.
    pub login: String,
}

impl Stargazer {
    pub fn matches(&self, user: &str) -> bool {
        self.name == user || self.login == user
    }
}
