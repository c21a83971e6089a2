use dioxus::prelude::*;
use tracing::{error, info};

use api::{Section, cv::CvEntry};

use crate::shared::{dom::download, use_site};

#[derive(Clone, PartialEq, Props)]
struct TimelineProps {
    title: String,
    entries: Vec<CvEntry>,
}

#[component]
fn Timeline(props: TimelineProps) -> Element {
    if props.entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "cv-block",
            h3 { "{props.title}" }
            for (idx, entry) in props.entries.iter().enumerate() {
                div { key: "{idx}", class: "timeline-entry",
                    h4 { "{entry.title}" }
                    p { class: "byline", "{entry.byline()}" }
                    p { class: "summary", "{entry.summary}" }
                }
            }
        }
    }
}

#[component]
pub fn Curriculum() -> Element {
    let site = use_site();
    let cv = &site.cv;

    let document = cv.document.clone();
    let download_cv = move |_| {
        info!(url = %document.url, "downloading cv");
        if let Err(err) = download(&document) {
            error!("failed to download cv: {err:#}");
        }
    };

    rsx! {
        section { id: Section::Cv.id(), class: "page-section alt",
            div { class: "container narrow",
                h2 { class: "section-title", "Curriculum Vitae" }
                div { class: "card",
                    div { class: "cv-download",
                        button { class: "btn btn-primary", onclick: download_cv,
                            span { "⤓" }
                            "Download CV"
                        }
                    }

                    Timeline {
                        title: String::from("Experience"),
                        entries: cv.experience.clone(),
                    }
                    Timeline {
                        title: String::from("Education"),
                        entries: cv.education.clone(),
                    }

                    if !cv.skills.is_empty() {
                        div {
                            h3 { class: "accent", "Skills" }
                            div { class: "skill-grid",
                                for group in cv.skills.iter() {
                                    div { key: "{group.name}", class: "skill-group lift",
                                        h4 { "{group.name}" }
                                        ul {
                                            for item in group.items.iter() {
                                                li { key: "{item}", "{item}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
