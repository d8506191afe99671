use encoders_models::site::{NavLink, SiteContent, SitePage};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SiteService: Send + Sync + 'static {
    /// Returns the static content of the site.
    fn content(&self) -> &SiteContent;

    /// Resolves a route to the page it shows.
    fn page(&self, path: &str) -> Result<SitePage, SitePageError>;

    /// Returns the navigation bar entries, marking the link of the current
    /// page as active.
    fn navigation(&self, current: Option<SitePage>) -> Vec<NavigationItem>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SitePageError {
    #[error("No page found at {0:?}.")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub link: NavLink,
    pub active: bool,
}

#[cfg(feature = "mock")]
impl MockSiteService {
    pub fn with_content(mut self, content: SiteContent) -> Self {
        self.expect_content().return_const(content);
        self
    }

    pub fn with_navigation(
        mut self,
        current: Option<SitePage>,
        navigation: Vec<NavigationItem>,
    ) -> Self {
        self.expect_navigation()
            .once()
            .with(mockall::predicate::eq(current))
            .return_const(navigation);
        self
    }
}
