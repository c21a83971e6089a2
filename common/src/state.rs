use api::Section;
use tracing::{debug, info};

use crate::tracker::{Layout, active_section, scroll_target};

/// The section highlighted in the navigation bar.
///
/// Always holds exactly one section; starts at [`Section::Home`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Section,
}

impl NavigationState {
    pub fn current(&self) -> Section {
        self.current
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.current == section
    }

    // re-evaluate against the current scroll position
    //
    // when nothing sits under the activation line (a gap between sections, or a section that
    // has not rendered yet) the previous value is kept.  returns true if the value changed
    pub fn settle<L: Layout + ?Sized>(&mut self, layout: &L) -> bool {
        match active_section(layout) {
            Some(section) if section != self.current => {
                debug!(from = %self.current, to = %section, "active section changed");
                self.current = section;
                true
            }
            _ => false,
        }
    }

    // explicit navigation wins over whatever the scroll position says
    pub fn select(&mut self, section: Section) {
        self.current = section;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    // class on the root element, switches the css palette
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

// all of the transient ui flags for one page session
//
// the webapp keeps a single copy of this in a context signal and only ever mutates it
// through the methods below
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub navigation: NavigationState,
    pub menu_open: bool,
    pub theme: Theme,
    // a section picked while it was not rendered, scrolled to once it is
    pub pending_scroll: Option<Section>,
}

impl UiState {
    pub fn active(&self) -> Section {
        self.navigation.current()
    }

    // called once per scroll event
    pub fn on_scroll<L: Layout + ?Sized>(&mut self, layout: &L) -> bool {
        self.navigation.settle(layout)
    }

    // a click on one of the navigation controls
    //
    // the highlight moves immediately and the mobile menu closes.  the returned offset is
    // where the viewport should smoothly scroll to; None if the section is not rendered yet,
    // in which case the scroll is parked until take_pending_scroll finds it on the page
    pub fn navigate<L: Layout + ?Sized>(&mut self, section: Section, layout: &L) -> Option<f64> {
        info!(%section, "navigating to section");

        self.navigation.select(section);
        self.menu_open = false;

        let target = scroll_target(layout, section);
        self.pending_scroll = match target {
            Some(_) => None,
            None => Some(section),
        };

        target
    }

    // called once the sections have rendered
    //
    // the parked section stays parked if it is still missing from the layout
    pub fn take_pending_scroll<L: Layout + ?Sized>(&mut self, layout: &L) -> Option<f64> {
        let section = self.pending_scroll?;
        let target = scroll_target(layout, section)?;

        debug!(%section, "resuming parked navigation");
        self.pending_scroll = None;
        Some(target)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
