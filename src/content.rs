//! Static copy and configuration for the portfolio page.
//!
//! The site has shipped three times with the same layout and different
//! content, so each shipped version is a `PageContent` const rendered by the
//! one `PortfolioPage` component instead of a parallel copy of the page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub tagline: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

/// One card in the services grid. `icon` is inline SVG path data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub url: &'static str,
    pub thumbnail: Option<&'static str>,
}

/// Footer social link. `icon` is a devicon class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    pub title: &'static str,
    pub hero: Hero,
    pub services: &'static [Service],
    pub projects: &'static [Project],
    pub socials: &'static [SocialLink],
    pub contact_email: &'static str,
    pub contact_form: bool,
    pub animated_backdrop: bool,
}

const ICON_LAYOUT: &str = "M3 3h18v18H3zM3 9h18M9 21V9";
const ICON_CODE: &str = "m16 18 6-6-6-6M8 6l-6 6 6 6";
const ICON_BRANCH: &str =
    "M6 3v12M18 9a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM18 9a9 9 0 0 1-9 9";
const ICON_SPARK: &str = "M12 3l1.9 5.8 5.8 1.9-5.8 1.9L12 18.4l-1.9-5.8-5.8-1.9 5.8-1.9z";
const ICON_BOLT: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";

/// The page as it first shipped: placeholder projects, mailto contact.
pub const FIRST_DRAFT: PageContent = PageContent {
    title: "Portfolio",
    hero: Hero {
        tagline: "Webflow Developer",
        heading: "Crafting Digital Experiences Through Motion",
        subheading: "I bring designs to life with seamless animations and intuitive interactions",
        cta_label: "View My Work",
        cta_href: "#work",
    },
    services: &[
        Service {
            icon: ICON_LAYOUT,
            title: "Webflow Development",
            description: "Custom websites built with clean code and smooth animations",
        },
        Service {
            icon: ICON_CODE,
            title: "Custom Solutions",
            description: "Tailored functionality to meet your specific needs",
        },
        Service {
            icon: ICON_BRANCH,
            title: "Version Control",
            description: "Organized development process with proper versioning",
        },
    ],
    projects: &[
        Project {
            title: "Project One",
            category: "Web Development / Animation",
            url: "#",
            thumbnail: None,
        },
        Project {
            title: "Project Two",
            category: "Web Development / Animation",
            url: "#",
            thumbnail: None,
        },
    ],
    socials: &[],
    contact_email: "hello@mirafolio.dev",
    contact_form: false,
    animated_backdrop: false,
};

/// Second pass: real client work, thumbnails, social footer.
pub const REDESIGN: PageContent = PageContent {
    title: "Portfolio",
    hero: Hero {
        tagline: "Webflow & Motion Developer",
        heading: "Websites That Move With Purpose",
        subheading: "Design-faithful builds with animation that guides, never distracts",
        cta_label: "See the Work",
        cta_href: "#work",
    },
    services: &[
        Service {
            icon: ICON_LAYOUT,
            title: "Webflow Development",
            description: "Pixel-accurate builds from Figma with a maintainable class system",
        },
        Service {
            icon: ICON_SPARK,
            title: "Motion Design",
            description: "Scroll and entrance choreography tuned for clarity and feel",
        },
        Service {
            icon: ICON_CODE,
            title: "Custom Code",
            description: "Embeds and integrations where no-code stops short",
        },
    ],
    projects: &[
        Project {
            title: "Lumen Studio",
            category: "Brand Site / Motion",
            url: "https://lumen-studio.example.com",
            thumbnail: Some("/images/lumen-studio.webp"),
        },
        Project {
            title: "Fieldnote",
            category: "SaaS Marketing / Webflow",
            url: "https://fieldnote.example.com",
            thumbnail: Some("/images/fieldnote.webp"),
        },
    ],
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com/mirakhlein",
            icon: "devicon-github-plain",
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://linkedin.com/in/mirakhlein",
            icon: "devicon-linkedin-plain",
        },
    ],
    contact_email: "hello@mirafolio.dev",
    contact_form: false,
    animated_backdrop: false,
};

/// The live version: adds the contact form and the animated backdrop.
pub const CURRENT: PageContent = PageContent {
    title: "Portfolio",
    hero: Hero {
        tagline: "Webflow & Motion Developer",
        heading: "Websites That Move With Purpose",
        subheading: "Design-faithful builds with animation that guides, never distracts",
        cta_label: "See the Work",
        cta_href: "#work",
    },
    services: &[
        Service {
            icon: ICON_LAYOUT,
            title: "Webflow Development",
            description: "Pixel-accurate builds from Figma with a maintainable class system",
        },
        Service {
            icon: ICON_SPARK,
            title: "Motion Design",
            description: "Scroll and entrance choreography tuned for clarity and feel",
        },
        Service {
            icon: ICON_BOLT,
            title: "Performance",
            description: "Fast first paint and smooth animation on mid-range phones",
        },
    ],
    projects: &[
        Project {
            title: "Lumen Studio",
            category: "Brand Site / Motion",
            url: "https://lumen-studio.example.com",
            thumbnail: Some("/images/lumen-studio.webp"),
        },
        Project {
            title: "Fieldnote",
            category: "SaaS Marketing / Webflow",
            url: "https://fieldnote.example.com",
            thumbnail: Some("/images/fieldnote.webp"),
        },
        Project {
            title: "Arcline Coffee",
            category: "E-commerce / Motion",
            url: "https://arcline.example.com",
            thumbnail: Some("/images/arcline.webp"),
        },
        Project {
            title: "Northbeam Architects",
            category: "Portfolio / Webflow",
            url: "https://northbeam.example.com",
            thumbnail: Some("/images/northbeam.webp"),
        },
    ],
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com/mirakhlein",
            icon: "devicon-github-plain",
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://linkedin.com/in/mirakhlein",
            icon: "devicon-linkedin-plain",
        },
        SocialLink {
            label: "Twitter",
            href: "https://twitter.com/mirakhlein",
            icon: "devicon-twitter-original",
        },
    ],
    contact_email: "hello@mirafolio.dev",
    contact_form: true,
    animated_backdrop: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [&PageContent; 3] = [&FIRST_DRAFT, &REDESIGN, &CURRENT];

    #[test]
    fn test_every_variant_has_copy_and_work() {
        for content in VARIANTS {
            assert!(!content.hero.heading.is_empty());
            assert!(!content.hero.subheading.is_empty());
            assert!(!content.services.is_empty());
            assert!(!content.projects.is_empty());
            for project in content.projects {
                assert!(!project.title.is_empty());
                assert!(!project.url.is_empty());
            }
        }
    }

    #[test]
    fn test_only_the_live_variant_has_form_and_backdrop() {
        assert!(!FIRST_DRAFT.contact_form);
        assert!(!REDESIGN.contact_form);
        assert!(CURRENT.contact_form);
        assert!(!FIRST_DRAFT.animated_backdrop);
        assert!(!REDESIGN.animated_backdrop);
        assert!(CURRENT.animated_backdrop);
    }

    #[test]
    fn test_hero_cta_targets_the_work_section() {
        for content in VARIANTS {
            assert_eq!(content.hero.cta_href, "#work");
        }
    }
}
