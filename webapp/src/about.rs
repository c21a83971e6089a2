use dioxus::prelude::*;

use api::Section;

use crate::shared::use_site;

#[component]
pub fn About() -> Element {
    let site = use_site();
    let profile = &site.profile;

    rsx! {
        section { id: Section::About.id(), class: "page-section alt",
            div { class: "container",
                h2 { class: "section-title", "About Me" }
                div { class: "card lift",
                    p { class: "about-text", "{profile.about}" }

                    if !profile.highlights.is_empty() {
                        div { class: "highlights",
                            for highlight in profile.highlights.iter() {
                                div { key: "{highlight.title}", class: "highlight lift",
                                    div { class: "highlight-icon", "{highlight.icon.glyph()}" }
                                    h3 { "{highlight.title}" }
                                    p { "{highlight.text}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
