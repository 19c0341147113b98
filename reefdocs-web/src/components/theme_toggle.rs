use reefdocs_nav::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

/// Header button that flips the color scheme. The button advertises the
/// mode a click switches to, not the current one.
#[function_component(ThemeToggle)]
pub fn theme_toggle(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (icon, text, aria_label) = if p.theme.is_dark() {
        ("\u{2600}\u{fe0f}", "Light Mode", "Switch to light mode")
    } else {
        ("\u{1f313}", "Dark Mode", "Switch to dark mode")
    };
    html! {
        <button id="theme-toggle" class="theme-toggle" aria-label={aria_label} {onclick}>
            <span class="theme-icon">{ icon }</span>
            <span class="theme-text">{ text }</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(theme: Theme) -> String {
        let props = Props {
            theme,
            on_toggle: Callback::noop(),
        };
        block_on(LocalServerRenderer::<ThemeToggle>::with_props(props).render())
    }

    #[test]
    fn light_theme_offers_dark_mode() {
        let html = render(Theme::Light);
        assert!(html.contains("Dark Mode"));
        assert!(html.contains("Switch to dark mode"));
    }

    #[test]
    fn dark_theme_offers_light_mode() {
        let html = render(Theme::Dark);
        assert!(html.contains("Light Mode"));
        assert!(html.contains("Switch to light mode"));
    }
}
