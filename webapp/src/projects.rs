use dioxus::prelude::*;

use api::{Section, project::Project};

use crate::shared::use_site;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: Project,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        a {
            class: "project-card lift",
            href: "{project.github}",
            target: "_blank",
            rel: "noopener noreferrer",
            div { class: "project-cover",
                img { src: "{project.image}", alt: "{project.title}" }
            }
            div { class: "project-body",
                h3 { "{project.title}" }
                p { "{project.description}" }
                div { class: "project-tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "chip", "{tag}" }
                    }
                }
                div { class: "project-link", "View on GitHub" }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let site = use_site();

    rsx! {
        section { id: Section::Projects.id(), class: "page-section",
            div { class: "container",
                h2 { class: "section-title", "Featured Projects" }
                div { class: "project-grid",
                    for (idx, project) in site.projects.iter().enumerate() {
                        ProjectCard { key: "{idx}", project: project.clone() }
                    }
                }
            }
        }
    }
}
