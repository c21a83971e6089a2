use serde::{Deserialize, Serialize};

// a single card in the project gallery
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    // cover image url
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    // repository link, opened in a new tab
    pub github: String,
}
