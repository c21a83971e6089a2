use anyhow::{Context, Result};
use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{HtmlAnchorElement, ScrollBehavior, ScrollToOptions, window};

use api::{Section, cv::CvDocument};
use common::{
    Extent, Layout,
    subscription::{ScrollHandler, ScrollSource},
};

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

// the live page geometry, read straight from the dom on every call
//
// nothing is cached, since the answers change with every scroll event
#[derive(Clone, Copy, Debug, Default)]
pub struct DomLayout;

impl Layout for DomLayout {
    fn extent(&self, section: Section) -> Option<Extent> {
        let element = window()?.document()?.get_element_by_id(section.id())?;
        let rect = element.get_bounding_client_rect();

        Some(Extent::new(rect.top(), rect.bottom()))
    }

    fn scroll_offset(&self) -> f64 {
        window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default()
    }
}

// scroll events on the browser window
//
// the handle is the js closure itself: it has to stay alive for as long as the listener is
// registered, and removing the listener needs the same function reference
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    type Handle = Closure<dyn FnMut()>;

    fn subscribe(&self, handler: ScrollHandler) -> Result<Self::Handle> {
        let window = window().context("no global window exists")?;

        let closure = Closure::wrap(handler);
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(js_err)
            .context("failed to add scroll listener")?;

        Ok(closure)
    }

    fn unsubscribe(&self, handle: Self::Handle) {
        let Some(window) = window() else {
            return;
        };

        if let Err(err) =
            window.remove_event_listener_with_callback("scroll", handle.as_ref().unchecked_ref())
        {
            error!("failed to remove scroll listener: {err:?}");
        }
    }
}

// fire-and-forget animated scroll to an absolute document offset
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };

    debug!(top, "smooth scrolling");

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// ask the browser to save the cv
//
// a temporary anchor with the download attribute is the only way to suggest a filename
pub fn download(document: &CvDocument) -> Result<()> {
    let page = window()
        .and_then(|window| window.document())
        .context("no global document exists")?;
    let body = page.body().context("document has no body")?;

    let link: HtmlAnchorElement = page
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow::Error::msg("created element is not an anchor"))?;

    link.set_href(&document.url);
    link.set_download(&document.filename);

    body.append_child(&link).map_err(js_err)?;
    link.click();
    body.remove_child(&link).map_err(js_err)?;

    Ok(())
}
