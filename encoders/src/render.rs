//! Plain text rendering of the site for the terminal.

use std::io::{self, Write};

use encoders_core_site_contracts::{NavigationItem, SiteService};
use encoders_models::{
    contact::{ContactForm, ContactFormField, ContactFormState},
    site::{AboutPage, Card, ContactPage, HomePage, SiteContent, SitePage, Stat},
};

const RULE: &str = "────────────────────────────────────────────────────────────";

/// Renders a full page: navigation bar, page body and footer.
pub fn page(w: &mut impl Write, site: &impl SiteService, page: SitePage) -> io::Result<()> {
    let content = site.content();
    navbar(w, content, &site.navigation(Some(page)))?;
    match page {
        SitePage::Home => home(w, content, &content.home)?,
        SitePage::About => about(w, &content.about)?,
        SitePage::Contact => contact(w, &content.contact)?,
    }
    footer(w, content)
}

pub fn not_found(w: &mut impl Write, site: &impl SiteService, path: &str) -> io::Result<()> {
    let content = site.content();
    navbar(w, content, &site.navigation(None))?;
    writeln!(w, "404")?;
    writeln!(w, "Oops! Page {path:?} not found.")?;
    writeln!(w, "Return to Home: {}", SitePage::Home)?;
    writeln!(w)?;
    footer(w, content)
}

pub fn navbar(
    w: &mut impl Write,
    content: &SiteContent,
    items: &[NavigationItem],
) -> io::Result<()> {
    let links = items
        .iter()
        .map(|item| match item.active {
            true => format!("[{}]", item.link.name),
            false => item.link.name.clone(),
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(
        w,
        "{}  |  {links}  |  {} -> {}",
        content.club.name, content.call_to_action.name, content.call_to_action.path
    )?;
    writeln!(w, "{RULE}")
}

fn home(w: &mut impl Write, content: &SiteContent, home: &HomePage) -> io::Result<()> {
    writeln!(w, "{}", home.hero.badge)?;
    writeln!(w, "{}", content.club.name.to_uppercase())?;
    writeln!(w, "{}", home.hero.text)?;
    for action in &home.hero.actions {
        writeln!(w, "  > {} ({})", action.name, action.path)?;
    }
    stats(w, &home.stats)?;

    section(w, &home.features.title, &home.features.text)?;
    cards(w, &home.features.cards)?;

    let cta = &home.call_to_action;
    section(w, &cta.title, &cta.text)?;
    for highlight in &cta.highlights {
        writeln!(w, "  • {highlight}")?;
    }
    writeln!(w, "  > {} ({})", cta.action.name, cta.action.path)?;
    writeln!(w)
}

fn about(w: &mut impl Write, about: &AboutPage) -> io::Result<()> {
    section(w, &about.intro.title, &about.intro.text)?;
    cards(w, [&about.mission, &about.vision])?;

    section(w, "Our Core Values", "")?;
    cards(w, &about.values)?;

    section(w, "Our Journey", "")?;
    for milestone in &about.milestones {
        writeln!(w, "  {}  {}", milestone.year, milestone.event)?;
    }
    stats(w, &about.stats)?;
    writeln!(w)
}

fn contact(w: &mut impl Write, contact: &ContactPage) -> io::Result<()> {
    section(w, &contact.intro.title, &contact.intro.text)?;
    for channel in &contact.channels {
        writeln!(w, "  {}: {} <{}>", channel.title, channel.content, channel.href)?;
    }
    section(w, &contact.form.title, &contact.form.text)?;
    writeln!(w, "  (run `encoders contact interactive` to fill out the form)")?;
    writeln!(w)
}

fn footer(w: &mut impl Write, content: &SiteContent) -> io::Result<()> {
    let footer = &content.footer;
    writeln!(w, "{RULE}")?;
    writeln!(w, "{}", content.club.name)?;
    writeln!(w, "{}", footer.blurb)?;
    let quick_links = footer
        .quick_links
        .iter()
        .map(|link| format!("{} ({})", link.name, link.path))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(w, "Quick Links: {quick_links}")?;
    let socials = footer
        .socials
        .iter()
        .map(|social| social.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(w, "Follow Us: {socials}")?;
    writeln!(w, "{}", footer.copyright)
}

/// Renders the contact form, or the thank-you panel after a successful
/// submission.
pub fn contact_form(w: &mut impl Write, page: &ContactPage, form: &ContactForm) -> io::Result<()> {
    if form.state == ContactFormState::Succeeded {
        writeln!(w, "✔ {}", page.success.title)?;
        return writeln!(w, "  {}", page.success.text);
    }

    for field in ContactFormField::ALL {
        field_line(w, form, field)?;
    }
    let button = match form.state {
        ContactFormState::Submitting => "Sending...",
        _ => "Send Message",
    };
    writeln!(w, "[ {button} ]")
}

pub fn field_line(w: &mut impl Write, form: &ContactForm, field: ContactFormField) -> io::Result<()> {
    let value = form.fields.get(field);
    match value.is_empty() {
        true => writeln!(w, "{}: ({})", field.label(), field.placeholder())?,
        false => writeln!(w, "{}: {value}", field.label())?,
    }
    if let Some(error) = form.errors.get(field) {
        writeln!(w, "  ! {error}")?;
    }
    Ok(())
}

pub fn state_change(w: &mut impl Write, state: ContactFormState) -> io::Result<()> {
    match state {
        ContactFormState::Submitting => writeln!(w, "Sending..."),
        ContactFormState::Succeeded => Ok(()),
        ContactFormState::Idle => writeln!(w, "The form is ready."),
    }
}

fn section(w: &mut impl Write, title: &str, text: &str) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "## {title}")?;
    if !text.is_empty() {
        writeln!(w, "{text}")?;
    }
    Ok(())
}

fn cards<'a>(w: &mut impl Write, cards: impl IntoIterator<Item = &'a Card>) -> io::Result<()> {
    for card in cards {
        writeln!(w, "  * {}: {}", card.title, card.description)?;
    }
    Ok(())
}

fn stats(w: &mut impl Write, stats: &[Stat]) -> io::Result<()> {
    let line = stats
        .iter()
        .map(|stat| format!("{} {}", stat.number, stat.label))
        .collect::<Vec<_>>()
        .join("  |  ");
    writeln!(w, "{line}")
}

#[cfg(test)]
mod tests {
    use encoders_core_site_contracts::MockSiteService;
    use encoders_core_site_impl::SiteServiceImpl;
    use encoders_demo::{contact::EMPTY_NAME_SHORT_MESSAGE, site::CONTENT};
    use encoders_models::contact::ContactFormErrors;
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn navbar_marks_active_link() {
        let site = SiteServiceImpl::new(CONTENT.clone()).unwrap();

        let out = render(|w| navbar(w, &CONTENT, &site.navigation(Some(SitePage::About))));

        assert_eq!(
            out.lines().next(),
            Some("Data Encoders  |  Home  [About]  Contact  |  Join Us -> /contact")
        );
    }

    #[test]
    fn navbar_shows_navigation_of_site() {
        let site = MockSiteService::new()
            .with_content(CONTENT.clone())
            .with_navigation(
                Some(SitePage::Contact),
                vec![NavigationItem {
                    link: CONTENT.navigation[2].clone(),
                    active: true,
                }],
            );

        let out = render(|w| super::page(w, &site, SitePage::Contact));

        assert_eq!(
            out.lines().next(),
            Some("Data Encoders  |  [Contact]  |  Join Us -> /contact")
        );
    }

    #[test]
    fn every_page_has_navbar_and_footer() {
        let site = SiteServiceImpl::new(CONTENT.clone()).unwrap();

        for page in SitePage::ALL {
            let out = render(|w| super::page(w, &site, page));

            assert!(out.starts_with("Data Encoders  |"), "{page}");
            assert!(out.trim_end().ends_with(&CONTENT.footer.copyright), "{page}");
        }
    }

    #[test]
    fn about_page_lists_milestones() {
        let site = SiteServiceImpl::new(CONTENT.clone()).unwrap();

        let out = render(|w| super::page(w, &site, SitePage::About));

        assert!(out.contains("  2020  Data Encoders club founded\n"));
        assert!(out.contains("  * Our Mission: Learning by doing.\n"));
    }

    #[test]
    fn not_found_page() {
        let site = SiteServiceImpl::new(CONTENT.clone()).unwrap();

        let out = render(|w| not_found(w, &site, "/events"));

        assert!(out.contains("Oops! Page \"/events\" not found.\n"));
        assert!(!out.lines().next().unwrap().contains('['));
    }

    #[test]
    fn contact_form_with_errors() {
        let form = ContactForm {
            fields: EMPTY_NAME_SHORT_MESSAGE.clone(),
            errors: [(ContactFormField::Name, "Name is required")]
                .into_iter()
                .collect::<ContactFormErrors>(),
            state: ContactFormState::Idle,
        };

        let out = render(|w| contact_form(w, &CONTENT.contact, &form));

        assert_eq!(
            out,
            "Your Name: (John Doe)\n  ! Name is required\nEmail Address: a@b.com\nSubject: Hi\nYour Message: short\n[ Send Message ]\n"
        );
    }

    #[test]
    fn contact_form_while_submitting() {
        let form = ContactForm {
            state: ContactFormState::Submitting,
            ..Default::default()
        };

        let out = render(|w| contact_form(w, &CONTENT.contact, &form));

        assert!(out.ends_with("[ Sending... ]\n"));
    }

    #[test]
    fn contact_form_success() {
        let form = ContactForm {
            state: ContactFormState::Succeeded,
            ..Default::default()
        };

        let out = render(|w| contact_form(w, &CONTENT.contact, &form));

        assert_eq!(
            out,
            "✔ Thank You!\n  Your message has been sent successfully.\n"
        );
    }
}
