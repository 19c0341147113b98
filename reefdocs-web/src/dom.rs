use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Current vertical scroll offset of the viewport in CSS pixels.
#[must_use]
pub fn scroll_offset() -> f64 {
    window().page_y_offset().unwrap_or(0.0)
}

/// Rendered viewport height in CSS pixels.
#[must_use]
pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

/// Total scrollable height of the document body.
#[must_use]
pub fn content_height() -> f64 {
    document()
        .body()
        .map_or(0.0, |body| f64::from(body.scroll_height()))
}

/// Ids and rendered heights of all content sections, in document order.
#[must_use]
pub fn content_section_heights() -> Vec<(String, f64)> {
    let mut sections = Vec::new();
    if let Ok(list) = document().query_selector_all(".content-section") {
        for index in 0..list.length() {
            if let Some(element) = list
                .get(index)
                .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            {
                sections.push((element.id(), f64::from(element.offset_height())));
            }
        }
    }
    sections
}

/// Smooth-scroll the viewport so the element's top aligns with the viewport top.
pub fn scroll_to_element(id: &str) {
    if let Some(element) = document().get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Millisecond wall-clock timestamp for debounce bookkeeping.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    let now = js_sys::Date::now();
    if now.is_finite() && now > 0.0 { now as u64 } else { 0 }
}

/// Schedule a one-shot callback `delay_ms` from now. The closure frees
/// itself after it runs, so superseded debounce callbacks cost nothing
/// beyond the no-op call.
pub fn set_timeout_once(delay_ms: i32, callback: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(callback);
    if let Err(err) = window()
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
    {
        log::warn!("failed to schedule timeout: {}", js_error_message(&err));
    }
}

/// A window event subscription that detaches itself when dropped.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Attach `handler` to a window-level event.
    #[must_use]
    pub fn attach(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        if let Err(err) =
            window().add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!(
                "failed to attach {event} listener: {}",
                js_error_message(&err)
            );
        }
        Self { event, closure }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = window()
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
