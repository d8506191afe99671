use std::sync::LazyLock;

use encoders_models::site::{
    AboutPage, CallToAction, Card, CardSection, ClubInfo, ContactChannel, ContactPage, Footer,
    Heading, Hero, HomePage, Milestone, NavLink, SiteContent, SocialLink, Stat,
};

pub static CONTENT: LazyLock<SiteContent> = LazyLock::new(|| SiteContent {
    club: ClubInfo {
        name: "Data Encoders".into(),
        tagline: "Welcome to the Future of Learning".into(),
    },
    navigation: vec![
        link("Home", "/"),
        link("About", "/about"),
        link("Contact", "/contact"),
    ],
    call_to_action: link("Join Us", "/contact"),
    home: HomePage {
        hero: Hero {
            badge: "Welcome to the Future of Learning".into(),
            text: "A community of passionate coders.".into(),
            actions: vec![link("Join the Club", "/contact"), link("Learn More", "/about")],
        },
        stats: vec![stat("100+", "Active Members")],
        features: CardSection {
            title: "What We Do".into(),
            text: "From workshops to hackathons.".into(),
            cards: vec![card("Hands-On Coding", "Weekly coding sessions.")],
        },
        call_to_action: CallToAction {
            title: "Ready to Level Up Your Skills?".into(),
            text: "Everyone is welcome.".into(),
            highlights: vec!["Weekly coding workshops and tutorials".into()],
            action: link("Get Started", "/contact"),
        },
    },
    about: AboutPage {
        intro: Heading {
            title: "About Data Encoders".into(),
            text: "We are a vibrant community of students.".into(),
        },
        mission: card("Our Mission", "Learning by doing."),
        vision: card("Our Vision", "Bridging academia and industry."),
        values: vec![card("Innovation", "We push boundaries.")],
        milestones: vec![Milestone {
            year: "2020".into(),
            event: "Data Encoders club founded".into(),
        }],
        stats: vec![stat("25+", "Awards Won")],
    },
    contact: ContactPage {
        intro: Heading {
            title: "Get in Touch".into(),
            text: "We'd love to hear from you!".into(),
        },
        channels: vec![ContactChannel {
            title: "Email Us".into(),
            content: "dataencoders@college.edu".into(),
            href: "mailto:dataencoders@college.edu".into(),
        }],
        form: Heading {
            title: "Send Us Feedback".into(),
            text: "Fill out the form below.".into(),
        },
        success: Heading {
            title: "Thank You!".into(),
            text: "Your message has been sent successfully.".into(),
        },
    },
    footer: Footer {
        blurb: "Empowering students.".into(),
        quick_links: vec![link("Home", "/"), link("About Us", "/about")],
        socials: vec![SocialLink {
            name: "GitHub".into(),
            href: "#".into(),
        }],
        copyright: "© 2026 Data Encoders. All rights reserved.".into(),
    },
});

fn link(name: &str, path: &str) -> NavLink {
    NavLink {
        name: name.into(),
        path: path.try_into().unwrap(),
    }
}

fn card(title: &str, description: &str) -> Card {
    Card {
        title: title.into(),
        description: description.into(),
    }
}

fn stat(number: &str, label: &str) -> Stat {
    Stat {
        number: number.into(),
        label: label.into(),
    }
}
