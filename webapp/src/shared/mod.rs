pub mod dom;
pub mod stars;
pub mod style;

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::error;

use common::{UiState, config::{SiteConfig, parse_site_config}};

// the page content, compiled into the wasm bundle
const SITE_TOML: &str = include_str!("../../assets/site.toml");

// parse the bundled content once at startup
//
// the error is flattened to a string so it can live in a hook and be shown on the page
pub fn load_site() -> Result<Rc<SiteConfig>, String> {
    parse_site_config(SITE_TOML).map(Rc::new).map_err(|err| {
        error!("{err:#}");
        format!("{err:#}")
    })
}

pub fn use_site() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>()
}

pub fn use_ui() -> Signal<UiState> {
    use_context::<Signal<UiState>>()
}
