use std::sync::Arc;

use encoders_core_site_contracts::{NavigationItem, SitePageError, SiteService};
use encoders_models::site::{NavLink, SiteContent, SitePage};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SiteServiceImpl {
    content: Arc<SiteContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteContentError {
    #[error("The link {name:?} points to {path:?}, which is not a page of the site.")]
    DeadLink { name: String, path: String },
}

impl SiteServiceImpl {
    /// Wraps the site content after checking that every internal link points
    /// to an existing page.
    pub fn new(content: SiteContent) -> Result<Self, SiteContentError> {
        let dead_link =
            internal_links(&content).find(|link| SitePage::from_path(&link.path).is_none());
        if let Some(link) = dead_link {
            return Err(SiteContentError::DeadLink {
                name: link.name.clone(),
                path: link.path.to_string(),
            });
        }

        Ok(Self {
            content: Arc::new(content),
        })
    }
}

impl SiteService for SiteServiceImpl {
    fn content(&self) -> &SiteContent {
        &self.content
    }

    fn page(&self, path: &str) -> Result<SitePage, SitePageError> {
        SitePage::from_path(path).ok_or_else(|| {
            debug!(path, "Unknown route");
            SitePageError::NotFound(path.into())
        })
    }

    fn navigation(&self, current: Option<SitePage>) -> Vec<NavigationItem> {
        self.content
            .navigation
            .iter()
            .map(|link| NavigationItem {
                link: link.clone(),
                active: current.is_some_and(|page| SitePage::from_path(&link.path) == Some(page)),
            })
            .collect()
    }
}

fn internal_links(content: &SiteContent) -> impl Iterator<Item = &NavLink> {
    content
        .navigation
        .iter()
        .chain([&content.call_to_action])
        .chain(&content.home.hero.actions)
        .chain([&content.home.call_to_action.action])
        .chain(&content.footer.quick_links)
}

#[cfg(test)]
mod tests {
    use encoders_demo::site::CONTENT;
    use encoders_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn page_ok() {
        // Arrange
        let sut = SiteServiceImpl::new(CONTENT.clone()).unwrap();

        // Act
        let result = sut.page("/about/");

        // Assert
        assert_eq!(result, Ok(SitePage::About));
    }

    #[test]
    fn page_not_found() {
        // Arrange
        let sut = SiteServiceImpl::new(CONTENT.clone()).unwrap();

        // Act
        let result = sut.page("/events");

        // Assert
        assert_eq!(result, Err(SitePageError::NotFound("/events".into())));
    }

    #[test]
    fn navigation_marks_current_page() {
        // Arrange
        let sut = SiteServiceImpl::new(CONTENT.clone()).unwrap();

        // Act
        let result = sut.navigation(Some(SitePage::Contact));

        // Assert
        assert_eq!(
            result
                .iter()
                .map(|item| (item.link.name.as_str(), item.active))
                .collect::<Vec<_>>(),
            [("Home", false), ("About", false), ("Contact", true)]
        );
    }

    #[test]
    fn navigation_without_current_page() {
        // Arrange
        let sut = SiteServiceImpl::new(CONTENT.clone()).unwrap();

        // Act
        let result = sut.navigation(None);

        // Assert
        assert!(result.iter().all(|item| !item.active));
        assert_eq!(result.len(), CONTENT.navigation.len());
    }

    #[test]
    fn dead_link() {
        // Arrange
        let mut content = CONTENT.clone();
        content.footer.quick_links.push(NavLink {
            name: "Events".into(),
            path: "/events".try_into().unwrap(),
        });

        // Act
        let result = SiteServiceImpl::new(content);

        // Assert
        assert_matches!(
            result,
            Err(SiteContentError::DeadLink { name, path }) if name == "Events" && path == "/events"
        );
    }
}
