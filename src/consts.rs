use serde::Serialize;

/// Base path of the paginated blog index pages; page links append the page
/// number, `/blog/2` style.
pub const BLOG_BASE_PATH: &str = "/blog/";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[SiteLink] = &[
    SiteLink {
        href: "/blog",
        label: "blog",
    },
    SiteLink {
        href: "/about",
        label: "about",
    },
];

pub const SOCIAL_LINKS: &[SiteLink] = &[
    SiteLink {
        href: "https://github.com/pcarion",
        label: "GitHub",
    },
    SiteLink {
        href: "https://twitter.com/pcarion",
        label: "Twitter",
    },
    SiteLink {
        href: "mailto:pcarion@gmail.com",
        label: "Email",
    },
    SiteLink {
        href: "/rss.xml",
        label: "RSS",
    },
];

pub const ICON_MAP: &[(&str, &str)] = &[
    ("Website", "lucide:globe"),
    ("GitHub", "lucide:github"),
    ("LinkedIn", "lucide:linkedin"),
    ("Twitter", "lucide:twitter"),
    ("Email", "lucide:mail"),
    ("RSS", "lucide:rss"),
];

/// Icon name of a social link label, if one is mapped.
pub fn icon_for(label: &str) -> Option<&'static str> {
    ICON_MAP
        .iter()
        .find(|(mapped, _)| *mapped == label)
        .map(|(_, icon)| *icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_labels_resolve_to_icons() {
        for link in SOCIAL_LINKS {
            assert!(icon_for(link.label).is_some(), "no icon for {}", link.label);
        }
    }

    #[test]
    fn unknown_label_has_no_icon() {
        assert_eq!(icon_for("Gopher"), None);
    }
}
