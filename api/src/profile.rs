use serde::{Deserialize, Serialize};

// who the page is about
//
// rendered by the hero, the about block and the footer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: HighlightIcon,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightIcon {
    Code,
    Star,
    Award,
}

impl HighlightIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            HighlightIcon::Code => "</>",
            HighlightIcon::Star => "★",
            HighlightIcon::Award => "✪",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: LinkKind,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    Linkedin,
    Mail,
}

impl LinkKind {
    // used for the aria label and the tooltip
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Github => "GitHub",
            LinkKind::Linkedin => "LinkedIn",
            LinkKind::Mail => "Email",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            LinkKind::Github => "GH",
            LinkKind::Linkedin => "in",
            LinkKind::Mail => "@",
        }
    }
}
