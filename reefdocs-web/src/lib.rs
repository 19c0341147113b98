#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod menu;
pub mod scrollspy;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Apply the saved (or OS-derived) color scheme before the first paint
    theme::apply_theme(reefdocs_nav::Theme::resolve(
        theme::stored_theme(),
        theme::os_prefers_dark(),
    ));
    yew::Renderer::<app::App>::new().render();
}
