use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::{cv::Cv, profile::Profile, project::Project};

// portfolio content
//
// everything the page renders that is not layout: who the page is about, the project
// gallery and the cv.  the webapp bundles a toml copy of this at compile time
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub cv: Cv,
}

// the document keeps the content under a [site] table so that other tooling can share
// the same file
#[derive(Debug, Deserialize, Serialize)]
struct TomlSiteFile {
    site: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_site_config(doc: &str) -> Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlSiteFile = toml::from_str(doc).context("failed to parse site config")?;

    data.site.validate()?;

    debug!(
        projects = data.site.projects.len(),
        "successfully parsed site config"
    );
    Ok(data.site)
}

impl SiteConfig {
    // the parts of the page that would render as visibly broken if left empty
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            bail!("site.profile.name must not be empty");
        }

        for (idx, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                bail!("site.projects[{idx}].title must not be empty");
            }
        }

        if self.cv.document.url.trim().is_empty() {
            bail!("site.cv.document.url must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use api::profile::{HighlightIcon, LinkKind};

    use super::*;

    const MINIMAL: &str = r#"
        [site.profile]
        name = "Your Name"
        tagline = "Full Stack Developer"
        about = "hello"

        [site.cv.document]
        url = "/your-cv.pdf"
        filename = "yourCV.pdf"
    "#;

    const FULL: &str = r#"
        [site.profile]
        name = "Your Name"
        tagline = "Full Stack Developer | Space Enthusiast | Code Explorer"
        about = "Welcome to my corner of the digital universe!"

        [[site.profile.highlights]]
        icon = "code"
        title = "Clean Code"
        text = "Writing maintainable code."

        [[site.profile.links]]
        kind = "github"
        url = "https://github.com/yourusername"

        [[site.profile.links]]
        kind = "mail"
        url = "mailto:you@example.com"

        [[site.projects]]
        title = "Project 1"
        description = "A full-stack web application."
        image = "https://example.com/1.jpg"
        tags = ["React", "Node.js"]
        github = "https://github.com/yourusername/project1"

        [[site.projects]]
        title = "Project 2"
        description = "A design system."
        image = "https://example.com/2.jpg"
        github = "https://github.com/yourusername/project2"

        [site.cv.document]
        url = "/your-cv.pdf"
        filename = "yourCV.pdf"

        [[site.cv.experience]]
        title = "Senior Developer"
        organization = "Company Name"
        period = "2020 - Present"
        summary = "Led development."

        [[site.cv.skills]]
        name = "Tools"
        items = ["Git", "Docker", "AWS"]
    "#;

    #[test]
    fn bundled_site_parses() {
        let site = parse_site_config(include_str!("../../webapp/assets/site.toml")).unwrap();

        assert_eq!(site.projects.len(), 2);
        assert_eq!(site.profile.highlights.len(), 3);
        assert_eq!(site.cv.skills.len(), 3);
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let site = parse_site_config(MINIMAL).unwrap();

        assert_eq!(site.profile.name, "Your Name");
        assert!(site.profile.highlights.is_empty());
        assert!(site.projects.is_empty());
        assert!(site.cv.experience.is_empty());
        assert_eq!(site.cv.document.filename, "yourCV.pdf");
    }

    #[test]
    fn full_document() {
        let site = parse_site_config(FULL).unwrap();

        assert_eq!(site.profile.highlights[0].icon, HighlightIcon::Code);
        assert_eq!(site.profile.links[1].kind, LinkKind::Mail);

        assert_eq!(site.projects.len(), 2);
        assert_eq!(site.projects[0].tags, vec!["React", "Node.js"]);
        assert!(site.projects[1].tags.is_empty());

        assert_eq!(site.cv.experience[0].byline(), "Company Name • 2020 - Present");
        assert_eq!(site.cv.skills[0].items.len(), 3);
    }

    #[test]
    fn content_must_sit_under_site_table() {
        let doc = MINIMAL.replace("[site.", "[");
        assert!(parse_site_config(&doc).is_err());
    }

    #[test]
    fn rejects_unknown_link_kind() {
        let doc = format!(
            "{MINIMAL}\n[[site.profile.links]]\nkind = \"myspace\"\nurl = \"https://myspace.com\"\n"
        );
        assert!(parse_site_config(&doc).is_err());
    }

    #[test]
    fn rejects_blank_name() {
        let doc = MINIMAL.replace(r#"name = "Your Name""#, r#"name = "  ""#);

        let err = parse_site_config(&doc).unwrap_err();
        assert!(err.to_string().contains("site.profile.name"));
    }

    #[test]
    fn rejects_untitled_project() {
        let doc = format!(
            "{MINIMAL}\n[[site.projects]]\ntitle = \"\"\ndescription = \"\"\nimage = \"\"\ngithub = \"\"\n"
        );

        let err = parse_site_config(&doc).unwrap_err();
        assert!(err.to_string().contains("site.projects[0].title"));
    }

    #[test]
    fn rejects_missing_cv_url() {
        let doc = MINIMAL.replace(r#"url = "/your-cv.pdf""#, r#"url = """#);
        assert!(parse_site_config(&doc).is_err());
    }
}
