#![allow(dead_code)]

use async_trait::async_trait;
use github_stargazers::github::{PageTransport, RawPage};
use github_stargazers::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://github.com";

pub const PAGE_1: &str =
    r#"<h3> <a href="/foo"> foo </a> </h3> <h3> <a href="/bar"> bar </a> </h3>"#;
pub const PAGE_2: &str =
    r#"<h3> <a href="/foo2"> foo2 </a> </h3> <h3> <a href="/bar2"> bar2 </a> </h3>"#;
pub const NAMED_PAGE: &str = concat!(
    r#"<h3> <a href="/foo"> John Williams </a> </h3> "#,
    r#"<h3> <a href="/bar"> Michael Phelps </a> </h3>"#
);
pub const RENAMED_LOGINS_PAGE: &str = concat!(
    r#"<h3> <a href="/foo-renamed"> John Williams </a> </h3> "#,
    r#"<h3> <a href="/bar-renamed"> Michael Phelps </a> </h3>"#
);
pub const NO_STARGAZERS: &str = "<html> <h1> title </h1> </html>";
pub const END_OF_LISTING: &str = "<h3>This repository has no more stargazers.</h3>";
pub const NO_HYPERLINK: &str = "<h3> foo </h3>";
pub const NO_HREF: &str = "<h3> <a> John Williams </a> </h3>";

pub fn page_with_href(href: &str) -> String {
    format!(r#"<h3> <a href="{}"> John Williams </a> </h3>"#, href)
}

pub fn page_url(identifier: &str, page: u32) -> String {
    format!("{}/{}/stargazers?page={}", BASE_URL, identifier, page)
}

/// In-memory transport: canned responses per URL, every request recorded.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Default)]
struct MockTransportInner {
    routes: HashMap<String, RawPage>,
    requests: Vec<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: impl Into<String>, status: u16, body: &str) -> &Self {
        let mut inner = self.inner.lock().expect("mock transport lock should not be poisoned");
        inner.routes.insert(
            url.into(),
            RawPage {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn requests(&self) -> Vec<String> {
        let inner = self.inner.lock().expect("mock transport lock should not be poisoned");
        inner.requests.clone()
    }
}

#[async_trait]
impl PageTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<RawPage> {
        let mut inner = self.inner.lock().expect("mock transport lock should not be poisoned");
        inner.requests.push(url.to_string());

        // Unregistered pages behave like a missing resource.
        Ok(inner.routes.get(url).cloned().unwrap_or(RawPage {
            status: 404,
            body: String::new(),
        }))
    }
}
