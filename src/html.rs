//! Stargazer extraction from listing page markup.
//!
//! Each stargazer is rendered as a heading wrapping one profile hyperlink:
//!
//! ```html
//! <h3><a href="/octocat">The Octocat</a></h3>
//! ```
//!
//! Any other shape is reported as an error rather than skipped, so a change
//! in the page layout surfaces immediately instead of yielding wrong names.

use crate::error::{Result, StargazersError};
use crate::types::Stargazer;
use scraper::{ElementRef, Html, Selector};

/// Heading text the listing shows once the stargazers are exhausted.
pub const END_OF_STARGAZERS: &str = "This repository has no more stargazers.";

const HEADING_SELECTOR: &str = "h3";
const HYPERLINK_SELECTOR: &str = "a";

/// A hyperlink found inside a heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    pub href: Option<String>,
    pub text: String,
}

/// A heading element and its first hyperlink, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub text: String,
    pub link: Option<Hyperlink>,
}

/// The capabilities extraction needs from a parsed document.
pub trait StargazerMarkup {
    /// Heading elements in document order.
    fn headings(&self) -> Vec<Heading>;
}

/// An HTML page parsed with `scraper`.
pub struct HtmlPage {
    document: Html,
    heading: Selector,
    hyperlink: Selector,
}

impl HtmlPage {
    pub fn parse(body: &str) -> Self {
        HtmlPage {
            document: Html::parse_document(body),
            heading: Selector::parse(HEADING_SELECTOR).expect("heading selector should parse"),
            hyperlink: Selector::parse(HYPERLINK_SELECTOR)
                .expect("hyperlink selector should parse"),
        }
    }

    fn to_heading(&self, element: ElementRef<'_>) -> Heading {
        let link = element.select(&self.hyperlink).next().map(|a| Hyperlink {
            href: a.value().attr("href").map(str::to_string),
            text: element_text(a),
        });

        Heading {
            text: element_text(element),
            link,
        }
    }
}

impl StargazerMarkup for HtmlPage {
    fn headings(&self) -> Vec<Heading> {
        self.document
            .select(&self.heading)
            .map(|element| self.to_heading(element))
            .collect()
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extracts the stargazers of one page, in markup order.
///
/// An empty result means the listing has ended: either the page has no
/// headings, or its only heading is [`END_OF_STARGAZERS`].
pub fn extract<M: StargazerMarkup + ?Sized>(markup: &M) -> Result<Vec<Stargazer>> {
    let headings = markup.headings();
    if is_end_of_listing(&headings) {
        return Ok(Vec::new());
    }

    let mut stargazers = Vec::with_capacity(headings.len());
    for heading in headings {
        let link = heading.link.ok_or(StargazersError::MissingHyperlinkTag)?;
        let href = link.href.ok_or(StargazersError::MissingHrefAttribute)?;
        let login = profile_login(&href)?;

        stargazers.push(Stargazer {
            name: link.text,
            login: login.to_string(),
        });
    }

    Ok(stargazers)
}

/// Parses `body` as HTML and extracts its stargazers.
pub fn extract_stargazers(body: &str) -> Result<Vec<Stargazer>> {
    extract(&HtmlPage::parse(body))
}

fn is_end_of_listing(headings: &[Heading]) -> bool {
    match headings {
        [] => true,
        [only] => {
            only.text == END_OF_STARGAZERS
                || only.link.as_ref().is_some_and(|l| l.text == END_OF_STARGAZERS)
        }
        _ => false,
    }
}

// Profile paths are absolute and name a user: "/" alone is rejected too.
fn profile_login(href: &str) -> Result<&str> {
    match href.strip_prefix('/').map(|path| path.trim_end_matches('/')) {
        Some(login) if !login.is_empty() => Ok(login),
        _ => Err(StargazersError::HrefContent(href.to_string())),
    }
}
