use shared::{
    progress::{reading_progress, ScrollMetrics},
    scheme::{cookie_value, resolve, Scheme, SchemeSetting, SCHEME_COOKIE},
    toc::{anchor_target, lookup_chain, scroll_target, Lookup, TOC_LINK_SELECTOR},
    Throttle,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Document, Element, Event, HtmlDocument, HtmlElement, ScrollBehavior, ScrollToOptions,
};

use crate::{document, window};

const PROGRESS_BAR_ID: &str = "reading-progress";
const SCHEME_ATTRIBUTE: &str = "data-scheme";

pub fn scroll_offset() -> Result<(f64, f64), JsValue> {
    let window = window()?;

    Ok((window.scroll_x()?, window.scroll_y()?))
}

pub fn viewport_size() -> Result<(f64, f64), JsValue> {
    let window = window()?;

    Ok((
        window.inner_width()?.as_f64().unwrap_or_default(),
        window.inner_height()?.as_f64().unwrap_or_default(),
    ))
}

fn scroll_metrics() -> Result<ScrollMetrics, JsValue> {
    let window = window()?;
    let root = document()?
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;

    Ok(ScrollMetrics {
        scroll_top: window.scroll_y()?,
        scroll_height: root.scroll_height() as f64,
        client_height: root.client_height() as f64,
        inner_height: window.inner_height()?.as_f64().unwrap_or_default(),
    })
}

/// Updates the header progress bar, if the page has one.
pub fn update_reading_progress(throttle: &mut Throttle, now: f64) -> Result<(), JsValue> {
    let Some(bar) = document()?.get_element_by_id(PROGRESS_BAR_ID) else {
        return Ok(());
    };

    let progress = reading_progress(&scroll_metrics()?);

    if progress.is_edge() || throttle.accept(now) {
        bar.dyn_into::<HtmlElement>()?
            .style()
            .set_property("width", &format!("{}%", progress.percent()))?;
    }

    Ok(())
}

fn find_target(document: &Document, id: &str) -> Result<Option<Element>, JsValue> {
    for lookup in lookup_chain(id) {
        let found = match lookup {
            // A selector the browser rejects falls through to the next lookup.
            Lookup::Selector(selector) => document.query_selector(&selector).unwrap_or_default(),
            Lookup::ElementId(id) => document.get_element_by_id(&id),
        };

        if found.is_some() {
            return Ok(found);
        }
    }

    Ok(None)
}

/// Smooth-scrolls to the heading behind a clicked table-of-contents link.
pub fn on_toc_click(event: &Event, offset: f64) -> Result<(), JsValue> {
    let Some(target) = event.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
        return Ok(());
    };

    let Some(link) = target.closest(TOC_LINK_SELECTOR)? else {
        return Ok(());
    };

    let Some(href) = link.get_attribute("href") else {
        return Ok(());
    };

    let Some(id) = anchor_target(&href) else {
        return Ok(());
    };

    event.prevent_default();

    let window = window()?;

    match find_target(&document()?, id)? {
        Some(element) => {
            let top = scroll_target(
                element.get_bounding_client_rect().top(),
                window.scroll_y()?,
                offset,
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        None => console::warn_1(&format!("Target element not found for ID: {id}").into()),
    }

    Ok(())
}

fn saved_scheme() -> Result<Option<String>, JsValue> {
    let document = document()?.dyn_into::<HtmlDocument>()?;
    let cookies = document.cookie()?;

    Ok(cookie_value(&cookies, SCHEME_COOKIE).map(str::to_string))
}

fn prefers_dark() -> Result<bool, JsValue> {
    Ok(window()?
        .match_media("(prefers-color-scheme: dark)")?
        .map(|query| query.matches())
        .unwrap_or_default())
}

pub fn current_scheme(setting: SchemeSetting) -> Result<Scheme, JsValue> {
    Ok(resolve(setting, saved_scheme()?.as_deref(), prefers_dark()?))
}

/// Persists `scheme` in its cookie and exposes it on `<html data-scheme>`.
pub fn apply_scheme(scheme: Scheme) -> Result<(), JsValue> {
    let document = document()?;

    document
        .clone()
        .dyn_into::<HtmlDocument>()?
        .set_cookie(&format!("{SCHEME_COOKIE}={scheme}; path=/"))?;

    if let Some(root) = document.document_element() {
        root.set_attribute(SCHEME_ATTRIBUTE, scheme.as_str())?;
    }

    Ok(())
}
