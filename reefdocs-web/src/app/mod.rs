mod handlers;
mod state;

pub use state::{AppState, use_app_state};

use yew::prelude::*;

use crate::components::content::ContentSections;
use crate::components::content_menu::ContentMenu;
use crate::components::menu_button::MenuButton;
use crate::components::theme_toggle::ThemeToggle;
use crate::scrollspy::use_scroll_spy;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_app_state();
    let on_select = use_scroll_spy(state.active_section.clone());

    // Apply the resolved theme on mount and follow OS scheme changes while
    // no explicit choice is stored.
    {
        let initial = *state.theme;
        let on_os_change = handlers::build_os_theme_change(&state);
        use_effect_with((), move |()| {
            crate::theme::apply_theme(initial);
            let listener =
                crate::theme::OsThemeListener::attach(move |theme| on_os_change.emit(theme));
            move || drop(listener)
        });
    }

    let on_toggle_theme = handlers::build_theme_toggle(&state);
    let on_toggle_menu = handlers::build_menu_toggle(&state);
    let on_close_menu = handlers::build_menu_close(&state);

    html! {
        <div class="docs-page">
            <header class="header">
                <MenuButton on_toggle={on_toggle_menu} />
                <span class="brand">{ "Reef API" }</span>
                <ThemeToggle theme={*state.theme} on_toggle={on_toggle_theme} />
            </header>
            <ContentMenu
                sections={(*state.catalog).sections.clone()}
                active={(*state.active_section).clone()}
                on_select={on_select}
                on_close={on_close_menu}
            />
            <ContentSections sections={(*state.catalog).sections.clone()} />
        </div>
    }
}
