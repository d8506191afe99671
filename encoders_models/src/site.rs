use std::fmt;

use serde::{Deserialize, Serialize};

use crate::macros::nutype_string;

/// Static content of the club website. Loaded once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub club: ClubInfo,
    pub navigation: Vec<NavLink>,
    /// Highlighted link shown next to the navigation ("Join Us").
    pub call_to_action: NavLink,
    pub home: HomePage,
    pub about: AboutPage,
    pub contact: ContactPage,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubInfo {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub path: SitePath,
}

nutype_string!(SitePath(
    sanitize(trim),
    validate(predicate = |path: &str| path.starts_with('/'))
));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePage {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub features: CardSection,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub text: String,
    pub actions: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSection {
    pub title: String,
    pub text: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub text: String,
    pub highlights: Vec<String>,
    pub action: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPage {
    pub intro: Heading,
    pub mission: Card,
    pub vision: Card,
    pub values: Vec<Card>,
    pub milestones: Vec<Milestone>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPage {
    pub intro: Heading,
    pub channels: Vec<ContactChannel>,
    pub form: Heading,
    pub success: Heading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub title: String,
    pub content: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub quick_links: Vec<NavLink>,
    pub socials: Vec<SocialLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

/// The pages served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    About,
    Contact,
}

impl SitePage {
    pub const ALL: [Self; 3] = [Self::Home, Self::About, Self::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    /// Returns the page for a route, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = match path.trim_end_matches('/') {
            "" if path.starts_with('/') => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}

impl fmt::Display for SitePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_page_paths() {
        for (input, expected) in [
            ("/", Some(SitePage::Home)),
            ("//", Some(SitePage::Home)),
            ("/about", Some(SitePage::About)),
            ("/about/", Some(SitePage::About)),
            (" /contact ", Some(SitePage::Contact)),
            ("/Contact", None),
            ("contact", None),
            ("", None),
            ("/events", None),
        ] {
            assert_eq!(SitePage::from_path(input), expected, "{input:?}");
        }
    }

    #[test]
    fn site_path_must_be_absolute() {
        assert!(SitePath::try_new(" /about ".to_owned()).is_ok_and(|path| *path == "/about"));
        assert!(SitePath::try_new("about".to_owned()).is_err());
    }
}
