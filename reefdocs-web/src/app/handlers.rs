use reefdocs_nav::Theme;
use yew::prelude::*;

use crate::app::state::AppState;

pub fn build_theme_toggle(state: &AppState) -> Callback<()> {
    let theme = state.theme.clone();
    Callback::from(move |()| {
        theme.set(crate::theme::toggle_theme(*theme));
    })
}

pub fn build_os_theme_change(state: &AppState) -> Callback<Theme> {
    let theme = state.theme.clone();
    Callback::from(move |next: Theme| {
        theme.set(next);
    })
}

pub fn build_menu_toggle(state: &AppState) -> Callback<()> {
    let menu_open = state.menu_open.clone();
    Callback::from(move |()| {
        let next = !*menu_open;
        crate::menu::set_menu_opened(next);
        menu_open.set(next);
    })
}

pub fn build_menu_close(state: &AppState) -> Callback<()> {
    let menu_open = state.menu_open.clone();
    Callback::from(move |()| {
        crate::menu::set_menu_opened(false);
        menu_open.set(false);
    })
}
