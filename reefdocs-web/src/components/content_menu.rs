use reefdocs_nav::SectionMeta;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub sections: Vec<SectionMeta>,
    #[prop_or_default]
    pub active: Option<AttrValue>,
    pub on_select: Callback<AttrValue>,
    pub on_close: Callback<()>,
}

/// Left-hand table of contents. Exactly the entry whose `data-target`
/// matches `active` carries the `active` class; everything else is clear.
#[function_component(ContentMenu)]
pub fn content_menu(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <nav class="content-menu left-menu" aria-label="Table of contents">
            <button class="mobile-menu-closer" aria-label="Close menu" onclick={close}>
                { "\u{00d7}" }
            </button>
            <ul>
                { for p.sections.iter().map(|section| {
                    let id = AttrValue::from(section.id.clone());
                    let is_active = p.active.as_ref() == Some(&id);
                    let onclick = {
                        let cb = p.on_select.clone();
                        let id = id.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            cb.emit(id.clone());
                        })
                    };
                    html! {
                        <li class={classes!(is_active.then_some("active"))} data-target={id.clone()}>
                            <a class="scroll-to-link" href={format!("#{}", section.id)} {onclick}>
                                { &section.title }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn sections() -> Vec<SectionMeta> {
        ["introduction", "authentication", "aquariums"]
            .into_iter()
            .map(|id| SectionMeta {
                id: id.to_string(),
                title: id.to_string(),
                body: Vec::new(),
            })
            .collect()
    }

    fn render(active: Option<&str>) -> String {
        let props = Props {
            sections: sections(),
            active: active.map(|s| AttrValue::from(s.to_string())),
            on_select: Callback::noop(),
            on_close: Callback::noop(),
        };
        block_on(LocalServerRenderer::<ContentMenu>::with_props(props).render())
    }

    #[test]
    fn entries_carry_data_targets() {
        let html = render(None);
        assert!(html.contains("data-target=\"introduction\""));
        assert!(html.contains("data-target=\"aquariums\""));
        assert!(html.contains("mobile-menu-closer"));
    }

    #[test]
    fn no_active_prop_marks_nothing() {
        let html = render(None);
        assert_eq!(html.matches("class=\"active\"").count(), 0);
    }

    #[test]
    fn exactly_one_entry_is_marked_active() {
        let html = render(Some("authentication"));
        assert_eq!(html.matches("class=\"active\"").count(), 1);
    }
}
