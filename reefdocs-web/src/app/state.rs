use reefdocs_nav::{SectionCatalog, Theme};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<SectionCatalog>,
    pub theme: UseStateHandle<Theme>,
    pub menu_open: UseStateHandle<bool>,
    pub active_section: UseStateHandle<Option<AttrValue>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_state(SectionCatalog::load_from_static),
        theme: use_state(|| {
            Theme::resolve(crate::theme::stored_theme(), crate::theme::os_prefers_dark())
        }),
        menu_open: use_state(crate::menu::menu_opened),
        active_section: use_state(|| None),
    }
}
