use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    about::About,
    cv::Curriculum,
    footer::Footer,
    home::Hero,
    projects::Projects,
    shared::use_ui,
    tracker::use_section_tracker,
};

// the whole single-page site
//
// the scroll listener lives exactly as long as this component does
#[component]
pub fn Portfolio() -> Element {
    let ui = use_ui();
    use_section_tracker(ui);

    rsx! {
        Hero {}
        About {}
        Projects {}
        Curriculum {}
        Footer {}
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "card error-panel",
            h2 { class: "section-title", "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Portfolio {}, "Back to the portfolio" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ConfigErrorProps {
    message: String,
}

// shown instead of the page when the bundled content does not parse
#[component]
pub fn ConfigError(props: ConfigErrorProps) -> Element {
    rsx! {
        div { class: "app dark",
            div { class: "card error-panel",
                h2 { class: "section-title", "This page could not be loaded" }
                p { "The site content is invalid. Check the logs for details." }
                pre { "{props.message}" }
            }
        }
    }
}
