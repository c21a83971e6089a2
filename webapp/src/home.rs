use std::rc::Rc;

use dioxus::prelude::*;

use api::Section;

use crate::shared::{stars::starfield, use_site};

const STAR_COUNT: usize = 50;

#[component]
fn StarField() -> Element {
    // generated once per mount so the field does not reshuffle on every scroll update
    let stars = use_hook(|| Rc::new(starfield(STAR_COUNT)));

    rsx! {
        div { class: "hero-backdrop",
            for (idx, star) in stars.iter().enumerate() {
                div { key: "{idx}", class: "star", style: star.style() }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let profile = &site.profile;

    rsx! {
        section { id: Section::Home.id(), class: "hero",
            StarField {}
            div { class: "container hero-content",
                div { class: "hero-mark", ">_" }
                h1 { class: "hero-title",
                    "Hello, I'm "
                    span { class: "accent", "{profile.name}" }
                }
                p { class: "hero-subtitle", "{profile.tagline}" }
                div { class: "social-links",
                    for link in profile.links.iter() {
                        a {
                            key: "{link.url}",
                            class: "social-link",
                            href: "{link.url}",
                            title: link.kind.label(),
                            aria_label: link.kind.label(),
                            "{link.kind.glyph()}"
                        }
                    }
                }
            }
        }
    }
}
