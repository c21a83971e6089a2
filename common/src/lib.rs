// host-side logic for the portfolio page
//
// everything that decides *what* the page shows lives here; the webapp crate only
// adapts the DOM to the traits below and renders the result
pub mod config;
pub mod state;
pub mod subscription;
pub mod tracker;

pub use state::{NavigationState, Theme, UiState};
pub use tracker::{ACTIVATION_LINE, Extent, Layout, NAV_HEIGHT};
