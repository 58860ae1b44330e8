//! Static site content. The sections render these records verbatim; nothing
//! here changes after startup.

pub mod section_id {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "about";
    pub const RESUME: &str = "resume";
    pub const PORTFOLIO: &str = "portfolio";
    pub const CONTACT: &str = "contact";
}

pub const SITE_TITLE: &str = "Chris Gibson Resume";
pub const RESUME_PDF_PATH: &str = "/Resume.pdf";
pub const GITHUB_USERNAME: &str = "cgibsonp";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/cgibsonp";
pub const SUPPORT_PAGE_PATH: &str = "/monday-night-group";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub image: &'static str,
}

impl PortfolioItem {
    /// True when the url names an external destination rather than an
    /// internal route.
    pub fn has_absolute_url(&self) -> bool {
        self.url.starts_with("http")
    }
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Earshot",
        description: "Hear what's near - a platform that transforms how you explore, support, and enjoy your community.",
        url: "https://www.earshotlivemusic.com",
        image: "/images/portfolio/earshot.png",
    },
    PortfolioItem {
        title: "Polibase",
        description: "Political Analytics made simple.",
        url: "",
        image: "/images/portfolio/polibase.png",
    },
    PortfolioItem {
        title: "Flyertap",
        description: "Event platform for college campuses.",
        url: "https://www.instagram.com/flyertap/",
        image: "/images/portfolio/flyertap.png",
    },
    PortfolioItem {
        title: "EasyCryptoTaxes",
        description: "Crypto Taxes made easy.",
        url: "https://www.easycryptotaxes.com",
        image: "/images/portfolio/easycryptotaxes.png",
    },
    PortfolioItem {
        title: "Monday Night Group",
        description: "Mens Bible Study App",
        url: SUPPORT_PAGE_PATH,
        image: "/images/portfolio/monday-night-group.jpg",
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HeroAction {
    pub label: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

pub struct HeroContent {
    pub name: &'static str,
    pub paragraphs: &'static [&'static str],
    pub actions: &'static [HeroAction],
    pub background_image: &'static str,
}

pub const HERO: HeroContent = HeroContent {
    name: "I'm Chris Gibson.",
    paragraphs: &[
        "I'm a Nashville based Technology Enthusiast, currently working at Booz Allen Hamilton helping clients leverage artificial intelligence capabilities.",
        "In my free time, you can catch me playing golf, listening to live music, or on a billiards table.",
    ],
    actions: &[
        HeroAction {
            label: "Resume",
            href: RESUME_PDF_PATH,
            primary: true,
        },
        HeroAction {
            label: "Contact",
            href: "#contact",
            primary: false,
        },
    ],
    background_image: "/images/header-background.webp",
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AboutDetail {
    pub label: &'static str,
    pub text: &'static str,
}

pub struct AboutContent {
    pub profile_image: &'static str,
    pub paragraphs: &'static [&'static str],
    pub details: &'static [AboutDetail],
}

pub const ABOUT: AboutContent = AboutContent {
    profile_image: "/images/profilepic.jpg",
    paragraphs: &[
        "Experienced in leading and innovating enterprise information technology functions. Thrives when collaborating with talented, diverse teams of designers and engineers to solve complex problems while having fun making something great together.",
        "Interested in no-code development, artificial intelligence tools, and bringing digital technology ideas to life.",
    ],
    details: &[
        AboutDetail { label: "Location", text: "Nashville, TN" },
        AboutDetail { label: "Age", text: "29" },
        AboutDetail { label: "Nationality", text: "American" },
        AboutDetail { label: "Interests", text: "Golf, Live Music, Billiards" },
        AboutDetail { label: "Study", text: "The Citadel" },
        AboutDetail { label: "Employment", text: "Booz Allen Hamilton" },
    ],
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency on a 1-10 scale; rendered as a bar width.
    pub level: u8,
}

pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[SkillGroup {
    name: "Technology",
    skills: &[
        Skill { name: "No-Code Web Development", level: 9 },
        Skill { name: "Make (Integromat)", level: 7 },
        Skill { name: "Amazon Web Services", level: 4 },
        Skill { name: "Web Development", level: 3 },
        Skill { name: "iOS App Development", level: 3 },
    ],
}];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TimelineItem {
    pub date: &'static str,
    pub location: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const EDUCATION: &[TimelineItem] = &[TimelineItem {
    date: "May 2017",
    location: "The Citadel",
    title: "Bachelor of Science, Business Administration",
    detail: "",
}];

pub const EXPERIENCE: &[TimelineItem] = &[
    TimelineItem {
        date: "January 2024 - Present",
        location: "Booz Allen Hamilton",
        title: "Release Train Engineer",
        detail: "Leading DevOps teams to deliver client use cases related to cloud computing & machine learning capabilities.",
    },
    TimelineItem {
        date: "January 2022 - January 2024",
        location: "Booz Allen Hamilton",
        title: "Technical Product Owner",
        detail: "Supported prioritization of the roadmap & backlog of DevOps teams to deliver client use cases related to cloud computing infrastructure & tooling.",
    },
    TimelineItem {
        date: "June 2020 - January 2022",
        location: "Booz Allen Hamilton",
        title: "Scrum Master",
        detail: "Ensured development team alignment to Agile fundamentals to best deliver client use cases related to cloud computing infrastructure & tooling.",
    },
    TimelineItem {
        date: "December 2018 - June 2020",
        location: "Ally Financial",
        title: "Scrum Master",
        detail: "Ensured development team alignment to Agile fundamentals to best deliver digital enhancements to homepage of storefront website.",
    },
    TimelineItem {
        date: "June 2017 - December 2018",
        location: "Ally Financial",
        title: "Information Security Analyst",
        detail: "Facilitated Identify and Access Management internal access reviews for critical applications.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Location,
    Github,
    LinkedIn,
    Instagram,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Location => "Location",
            Self::Github => "Github",
            Self::LinkedIn => "LinkedIn",
            Self::Instagram => "Instagram",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ContactEntry {
    pub kind: ContactKind,
    pub text: &'static str,
    pub href: &'static str,
}

pub const CONTACT_HEADER: &str = "We should connect, reach out!";

pub const CONTACT_ENTRIES: &[ContactEntry] = &[
    ContactEntry {
        kind: ContactKind::Email,
        text: "cgibsonp@gmail.com",
        href: "mailto:cgibsonp@gmail.com",
    },
    ContactEntry {
        kind: ContactKind::Location,
        text: "Nashville, TN, USA",
        href: "https://www.google.ca/maps/place/Nashville,+TN/@36.1868042,-86.9503931,11z",
    },
    ContactEntry {
        kind: ContactKind::Instagram,
        text: "@chrisgibsons",
        href: "https://www.instagram.com/chrisgibsons/",
    },
    ContactEntry {
        kind: ContactKind::Github,
        text: "cgibsonp",
        href: GITHUB_PROFILE_URL,
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: ContactKind::Github,
        label: "Github",
        href: GITHUB_PROFILE_URL,
    },
    SocialLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/cgibsonp/",
    },
    SocialLink {
        kind: ContactKind::Instagram,
        label: "Instagram",
        href: "https://www.instagram.com/chrisgibsons/",
    },
];

pub struct SupportContent {
    pub app_name: &'static str,
    pub developer: &'static str,
    pub support_email: &'static str,
    pub support_address: &'static str,
    pub privacy_policy_url: &'static str,
    pub data_collection_notes: &'static [&'static str],
}

pub const SUPPORT: SupportContent = SupportContent {
    app_name: "Monday Night Group",
    developer: "Developed by Chris Gibson",
    support_email: "cgibsonp@gmail.com",
    support_address: "810 Oak Meadow Dr, Franklin, TN 37064-9998",
    privacy_policy_url: "https://www.termsfeed.com/live/bfbe4173-d916-41e9-afb2-a6d6e5b54d3e",
    data_collection_notes: &[
        "User name and email for support purposes.",
        "Usage data to improve app performance.",
    ],
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I sign up and create an account?",
        answer: "To sign up, download the Monday Night Group app from the App Store. Open the app, tap Sign Up, and enter your name, email, and password.",
    },
    FaqEntry {
        question: "How do I reset my password?",
        answer: "On the login screen, tap Forgot Password? Enter your registered email, and we'll send you a reset link.",
    },
    FaqEntry {
        question: "How do I track chapter readings?",
        answer: "The app includes a reading tracker where the group admin can assign chapters.",
    },
    FaqEntry {
        question: "How do I add or manage events?",
        answer: "Admins can create events under the Events tab. Tap Add Event, enter the details, and save. Members can see available events.",
    },
    FaqEntry {
        question: "How can I update my contact information?",
        answer: "To update your name or email, delete your account and re-sign up.",
    },
    FaqEntry {
        question: "Can I receive notifications for upcoming events or readings?",
        answer: "Not at this time.",
    },
    FaqEntry {
        question: "Why can't I log in to my account?",
        answer: "Double-check that you're using the correct email and password. If you've forgotten your password, use the Forgot Password option to reset it. If issues persist, contact support.",
    },
    FaqEntry {
        question: "What should I do if the app crashes or freezes?",
        answer: "Close and reopen the app. Restart your device. Check the App Store for updates. If the issue continues, report it to support with details about your device and app version.",
    },
    FaqEntry {
        question: "What data does the app collect?",
        answer: "We collect minimal user data such as name, email, and group membership to facilitate group communication. Your data is never shared with third parties.",
    },
    FaqEntry {
        question: "How is my personal information protected?",
        answer: "We use encrypted storage and secure authentication to protect your information. You can read our full Privacy Policy below.",
    },
    FaqEntry {
        question: "Can I delete my account and data?",
        answer: "Yes. To delete your account, go to Settings > Delete Account. This will remove all your personal data from our system.",
    },
    FaqEntry {
        question: "How do I report a bug or request a new feature?",
        answer: "You can also email us at our support email above.",
    },
    FaqEntry {
        question: "Who do I contact for technical support?",
        answer: "For assistance, email us at our support email above.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn item_by_title(title: &str) -> &'static PortfolioItem {
        PORTFOLIO_ITEMS
            .iter()
            .find(|item| item.title == title)
            .expect("seeded portfolio item")
    }

    #[test]
    fn external_projects_carry_absolute_urls() {
        assert!(item_by_title("Earshot").has_absolute_url());
        assert!(item_by_title("Flyertap").has_absolute_url());
        assert!(item_by_title("EasyCryptoTaxes").has_absolute_url());
    }

    #[test]
    fn polibase_has_no_destination() {
        let item = item_by_title("Polibase");
        assert!(item.url.is_empty());
        assert!(!item.has_absolute_url());
    }

    #[test]
    fn support_app_card_routes_internally() {
        let item = item_by_title("Monday Night Group");
        assert_eq!(item.url, SUPPORT_PAGE_PATH);
        assert!(!item.has_absolute_url());
    }

    #[test]
    fn hero_actions_cover_resume_and_contact() {
        let hrefs: Vec<&str> = HERO.actions.iter().map(|action| action.href).collect();
        assert!(hrefs.contains(&RESUME_PDF_PATH));
        assert!(hrefs.contains(&"#contact"));
    }

    #[test]
    fn static_content_is_coherent() {
        assert!(!SITE_TITLE.is_empty());
        assert!(GITHUB_PROFILE_URL.ends_with(GITHUB_USERNAME));

        assert!(!HERO.name.is_empty());
        assert!(!HERO.background_image.is_empty());
        assert!(HERO.paragraphs.iter().all(|paragraph| !paragraph.is_empty()));
        assert_eq!(
            HERO.actions.iter().filter(|action| action.primary).count(),
            1
        );
        assert!(HERO.actions.iter().all(|action| !action.label.is_empty()));

        assert!(!ABOUT.profile_image.is_empty());
        assert!(ABOUT.paragraphs.iter().all(|paragraph| !paragraph.is_empty()));
        assert!(ABOUT
            .details
            .iter()
            .all(|detail| !detail.label.is_empty() && !detail.text.is_empty()));

        for group in SKILL_GROUPS {
            assert!(!group.name.is_empty());
            assert!(group
                .skills
                .iter()
                .all(|skill| !skill.name.is_empty() && skill.level <= 10));
        }

        for item in EDUCATION.iter().chain(EXPERIENCE) {
            assert!(!item.date.is_empty());
            assert!(!item.location.is_empty());
            assert!(!item.title.is_empty());
        }
        assert!(EXPERIENCE.iter().all(|item| !item.detail.is_empty()));

        assert!(!CONTACT_HEADER.is_empty());
        for entry in CONTACT_ENTRIES {
            assert!(!entry.kind.label().is_empty());
            assert!(!entry.text.is_empty());
            assert!(!entry.href.is_empty());
        }
        for link in SOCIAL_LINKS {
            assert!(!link.kind.label().is_empty());
            assert!(!link.label.is_empty());
            assert!(link.href.starts_with("https://"));
        }

        for item in PORTFOLIO_ITEMS {
            assert!(!item.image.is_empty());
            assert!(!item.description.is_empty());
        }

        assert!(!SUPPORT.app_name.is_empty());
        assert!(!SUPPORT.developer.is_empty());
        assert!(!SUPPORT.support_email.is_empty());
        assert!(!SUPPORT.support_address.is_empty());
        assert!(SUPPORT.privacy_policy_url.starts_with("https://"));
        assert!(!SUPPORT.data_collection_notes.is_empty());
    }

    #[test]
    fn faq_entries_are_complete() {
        assert!(!FAQ_ENTRIES.is_empty());
        for entry in FAQ_ENTRIES {
            assert!(!entry.question.is_empty());
            assert!(!entry.answer.is_empty());
        }
    }
}
