//! Theme preference persistence and application.
//!
//! The explicit choice lives under one `localStorage` key and always wins
//! over the OS color scheme on later visits. OS-driven changes are applied
//! live but never persisted, so they stop mattering the moment the user
//! picks a side.

use std::str::FromStr;

use reefdocs_nav::Theme;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// `localStorage` key holding the explicit theme choice.
const STORAGE_KEY: &str = "reefdocs.theme";

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read the persisted theme choice, if any. Unreadable values count as
/// absent so the OS preference can take over.
#[must_use]
pub fn stored_theme() -> Option<Theme> {
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())?;
    match Theme::from_str(&raw) {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::warn!("ignoring stored theme: {err}");
            None
        }
    }
}

/// Whether the user has made an explicit choice.
#[must_use]
pub fn has_stored_theme() -> bool {
    stored_theme().is_some()
}

/// Whether the OS currently prefers a dark color scheme.
#[must_use]
pub fn os_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Apply a theme by setting the `data-theme` attribute on the document root.
pub fn apply_theme(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = html.set_attribute("data-theme", theme.as_str());
    }
}

/// Persist an explicit theme choice.
pub fn save_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Flip the current theme, apply it, and persist it. Only explicit toggles
/// write the preference.
#[must_use]
pub fn toggle_theme(current: Theme) -> Theme {
    let next = current.toggled();
    apply_theme(next);
    save_theme(next);
    next
}

/// Subscription to OS color-scheme changes; detaches on drop.
///
/// A change is applied (and reported through `on_change`) only while no
/// explicit choice is stored, and it is never persisted.
pub struct OsThemeListener {
    query: web_sys::MediaQueryList,
    closure: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl OsThemeListener {
    #[must_use]
    pub fn attach(on_change: impl Fn(Theme) + 'static) -> Option<Self> {
        let query = web_sys::window()?
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()?;
        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            if has_stored_theme() {
                return;
            }
            let theme = Theme::from_os_hint(event.matches());
            apply_theme(theme);
            on_change(theme);
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, closure })
    }
}

impl Drop for OsThemeListener {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.closure.as_ref().unchecked_ref());
    }
}
