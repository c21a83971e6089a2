#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use common::{UiState, config::SiteConfig};

mod shared;
use shared::load_site;

mod tracker;

mod nav;
use nav::NavBar;

mod about;
mod cv;
mod footer;
mod home;
mod projects;

mod portfolio;
use portfolio::{ConfigError, PageNotFound, Portfolio};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Portfolio {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[derive(Clone, PartialEq, Props)]
struct SiteRootProps {
    site: Rc<SiteConfig>,
}

// owns the per-session state and hands it, along with the content, to the rest of the tree
#[component]
fn SiteRoot(props: SiteRootProps) -> Element {
    let site = props.site;

    use_context_provider(move || site);
    use_context_provider(|| Signal::new(UiState::default()));

    rsx! {
        Router::<Route> { config: RouterConfig::default }
    }
}

#[component]
pub fn App() -> Element {
    let site = use_hook(load_site);

    rsx! {
        style { "{shared::style::PORTFOLIO_STYLES}" }
        match site {
            Ok(site) => rsx! {
                SiteRoot { site }
            },
            Err(message) => rsx! {
                ConfigError { message }
            },
        }
    }
}
