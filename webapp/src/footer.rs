use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::shared::use_site;

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let year = Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { "© {year} {site.profile.name}. All rights reserved." }
            }
        }
    }
}
