use api::Section;

// distance from the viewport top, in css pixels, of the line that decides which section
// is current
//
// this is a fixed offset rather than a fraction of the viewport height, and the rest of the
// page layout is tuned around it
pub const ACTIVATION_LINE: f64 = 100.0;

// height of the fixed navigation bar
//
// explicit navigation lands the target section just below it
pub const NAV_HEIGHT: f64 = 64.0;

/// Vertical span of a rendered section, relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub bottom: f64,
}

impl Extent {
    pub fn new(top: f64, bottom: f64) -> Self {
        Extent { top, bottom }
    }

    // both edges are inclusive
    pub fn contains(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Read-only view of the page geometry.
///
/// The browser implementation asks the DOM for bounding boxes; tests use fixed layouts.
pub trait Layout {
    /// Current extent of a section, or `None` if it is not rendered.
    fn extent(&self, section: Section) -> Option<Extent>;

    /// How far the document is scrolled, in css pixels.
    fn scroll_offset(&self) -> f64;
}

// the first section, in declaration order, that straddles the activation line
//
// sections that are not rendered simply never match
pub fn active_section<L: Layout + ?Sized>(layout: &L) -> Option<Section> {
    Section::ALL.into_iter().find(|section| {
        layout
            .extent(*section)
            .is_some_and(|extent| extent.contains(ACTIVATION_LINE))
    })
}

// absolute document offset to scroll to so that the section's top edge sits right under
// the navigation bar
pub fn scroll_target<L: Layout + ?Sized>(layout: &L, section: Section) -> Option<f64> {
    layout
        .extent(section)
        .map(|extent| extent.top + layout.scroll_offset() - NAV_HEIGHT)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use super::*;

    // a page whose sections sit at fixed document positions, scrolled by some amount
    #[derive(Clone, Debug, Default)]
    pub struct FixedLayout {
        spans: HashMap<Section, (f64, f64)>,
        pub scroll: f64,
    }

    impl FixedLayout {
        // sections stacked top to bottom with no gaps, starting at the document top
        pub fn stacked(heights: &[(Section, f64)]) -> Self {
            let mut layout = FixedLayout::default();
            let mut top = 0.0;
            for (section, height) in heights {
                layout.spans.insert(*section, (top, top + height));
                top += height;
            }
            layout
        }

        pub fn with_span(mut self, section: Section, top: f64, bottom: f64) -> Self {
            self.spans.insert(section, (top, bottom));
            self
        }

        pub fn without(mut self, section: Section) -> Self {
            self.spans.remove(&section);
            self
        }

        pub fn scrolled_to(mut self, scroll: f64) -> Self {
            self.scroll = scroll;
            self
        }
    }

    impl Layout for FixedLayout {
        fn extent(&self, section: Section) -> Option<Extent> {
            self.spans
                .get(&section)
                .map(|(top, bottom)| Extent::new(top - self.scroll, bottom - self.scroll))
        }

        fn scroll_offset(&self) -> f64 {
            self.scroll
        }
    }

    pub fn portfolio() -> FixedLayout {
        FixedLayout::stacked(&[
            (Section::Home, 600.0),
            (Section::About, 800.0),
            (Section::Projects, 900.0),
            (Section::Cv, 1200.0),
        ])
    }
}
