use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_toggle: Callback<()>,
}

/// Mobile header button that toggles the navigation overlay.
#[function_component(MenuButton)]
pub fn menu_button(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    html! {
        <button id="button-menu-mobile" class="button-menu-mobile" aria-label="Toggle navigation menu" {onclick}>
            <span class="burger-bar" />
            <span class="burger-bar" />
            <span class="burger-bar" />
        </button>
    }
}
