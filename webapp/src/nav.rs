use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::Section;
use common::{Theme, UiState};

use crate::{
    Route,
    shared::{dom::{DomLayout, smooth_scroll_to}, use_ui},
};

// move the highlight, close the mobile menu and start the animated scroll
//
// from any page other than the portfolio there is nothing to scroll to yet, so route home
// first; navigate parks the section and the tracker scrolls to it once the sections render
fn go_to(mut ui: Signal<UiState>, nav: Navigator, section: Section, on_portfolio: bool) {
    let target = ui.write().navigate(section, &DomLayout);

    if !on_portfolio {
        nav.push(Route::Portfolio {});
        return;
    }

    if let Some(top) = target {
        smooth_scroll_to(top);
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavButtonProps {
    section: Section,
    mobile: bool,
    on_portfolio: bool,
}

#[component]
fn NavButton(props: NavButtonProps) -> Element {
    let ui = use_ui();
    let nav = navigator();
    let section = props.section;
    let on_portfolio = props.on_portfolio;

    // only the desktop bar shows the highlight
    let class = if props.mobile {
        "mobile-link"
    } else if ui.read().navigation.is_active(section) {
        "nav-link active"
    } else {
        "nav-link"
    };

    rsx! {
        button {
            class,
            onclick: move |_| go_to(ui, nav, section, on_portfolio),
            "{section.label()}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let mut ui = use_ui();
    let route: Route = use_route();
    let on_portfolio = matches!(route, Route::Portfolio {});

    let state = *ui.read();

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "brand",
                    span { class: "brand-mark", "🚀" }
                    span { "DevSpace" }
                }

                nav { class: "nav-links",
                    for section in Section::ALL {
                        NavButton {
                            key: "{section}",
                            section,
                            mobile: false,
                            on_portfolio,
                        }
                    }
                    button {
                        class: "icon-btn",
                        title: "Toggle theme",
                        onclick: move |_| ui.write().toggle_theme(),
                        if state.theme == Theme::Dark {
                            "☀"
                        } else {
                            "☾"
                        }
                    }
                }

                div { class: "menu-toggle",
                    button {
                        class: "icon-btn",
                        title: "Menu",
                        onclick: move |_| ui.write().toggle_menu(),
                        if state.menu_open {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }

            if state.menu_open {
                div { class: "mobile-menu",
                    for section in Section::ALL {
                        NavButton {
                            key: "{section}",
                            section,
                            mobile: true,
                            on_portfolio,
                        }
                    }
                }
            }
        }
    }
}

// the page shell: fixed navigation bar above whatever the route renders
#[component]
pub fn NavBar() -> Element {
    let ui = use_ui();
    let theme = ui.read().theme.class();

    rsx! {
        div { class: "app {theme}",
            NavBarInner {}
            Outlet::<Route> {}
        }
    }
}
