//! Static catalogs: social platforms and their icons, and the font list.

use std::fmt;

/// Path segment every social icon URL contains. The parser recognizes
/// social blocks by it.
pub const SOCIAL_ICON_MARKER: &str = "signature-social-icons";

/// Default location of the social icon set.
pub const DEFAULT_ICON_BASE: &str = "https://static.example.com/signature-social-icons";

/// Social platforms with a known icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    LinkedIn,
    YouTube,
    Pinterest,
    Website,
    Email,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 8] = [
        SocialPlatform::Facebook,
        SocialPlatform::Twitter,
        SocialPlatform::Instagram,
        SocialPlatform::LinkedIn,
        SocialPlatform::YouTube,
        SocialPlatform::Pinterest,
        SocialPlatform::Website,
        SocialPlatform::Email,
    ];

    /// Display name, also used as the icon's `alt` text.
    pub fn name(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::Pinterest => "Pinterest",
            SocialPlatform::Website => "Website",
            SocialPlatform::Email => "Email",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::Pinterest => "pinterest",
            SocialPlatform::Website => "website",
            SocialPlatform::Email => "email",
        }
    }

    /// Look up a platform by its exact display name.
    pub fn from_name(name: &str) -> Option<SocialPlatform> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Icon URL under `base` (no trailing slash needed).
    pub fn icon_url(self, base: &str) -> String {
        format!("{}/{}.png", base.trim_end_matches('/'), self.slug())
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fonts offered by the editor. The first five are web-safe.
pub const FONT_CATALOG: [&str; 12] = [
    "Arial",
    "Verdana",
    "Georgia",
    "Times New Roman",
    "Courier New",
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Oswald",
    "Source Sans Pro",
    "Raleway",
];

/// Fonts every mail client has; never linked.
pub const WEB_SAFE_FONTS: [&str; 5] = ["Arial", "Verdana", "Georgia", "Times New Roman", "Courier New"];

/// Whether a font family needs a stylesheet link.
pub fn needs_font_link(family: &str) -> bool {
    FONT_CATALOG.contains(&family) && !WEB_SAFE_FONTS.contains(&family)
}

/// Google Fonts stylesheet URL for a family, regular and bold weights.
/// The `&` is already escaped for use in an attribute.
pub fn font_stylesheet_href(family: &str) -> String {
    let query: String = family
        .chars()
        .map(|c| if c.is_whitespace() { '+' } else { c })
        .collect();
    format!("https://fonts.googleapis.com/css2?family={query}:wght@400;700&amp;display=swap")
}
