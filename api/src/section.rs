use std::fmt;

// the four scrollable regions of the page
//
// declaration order matters: it is both the order the sections are rendered in and the
// priority order the tracker uses when more than one section sits under the activation line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Cv,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Cv,
    ];

    /// The DOM id of the element that renders this section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Cv => "cv",
        }
    }

    /// Text shown on the navigation control.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Cv => "CV",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_home_about_projects_cv() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "about", "projects", "cv"]);
    }

    #[test]
    fn default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn display_and_labels() {
        let shown: Vec<String> = Section::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(shown, vec!["home", "about", "projects", "cv"]);
        assert_eq!(Section::Cv.label(), "CV");
    }
}
