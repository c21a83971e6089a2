use serde::{Deserialize, Serialize};

// structs and types

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cv {
    pub document: CvDocument,
    #[serde(default)]
    pub experience: Vec<CvEntry>,
    #[serde(default)]
    pub education: Vec<CvEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

// the downloadable copy of the cv
//
// this is a plain static link; there is no validation or retry when fetching it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CvDocument {
    pub url: String,
    // the name the browser saves the file under
    pub filename: String,
}

// one row of the experience or education timelines
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CvEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
}

impl CvEntry {
    pub fn byline(&self) -> String {
        format!("{} • {}", self.organization, self.period)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byline_joins_organization_and_period() {
        let entry = CvEntry {
            title: String::from("Senior Developer"),
            organization: String::from("Company Name"),
            period: String::from("2020 - Present"),
            summary: String::new(),
        };

        assert_eq!(entry.byline(), "Company Name • 2020 - Present");
    }
}
