use reefdocs_nav::SectionMeta;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub sections: Vec<SectionMeta>,
}

/// Main column: one `.content-section` block per catalog entry. The ids
/// rendered here are what the scroll tracker measures and what the menu's
/// `data-target` attributes point at.
#[function_component(ContentSections)]
pub fn content_sections(p: &Props) -> Html {
    html! {
        <main class="content">
            { for p.sections.iter().map(|section| html! {
                <section class="content-section" id={section.id.clone()}>
                    <h2>{ &section.title }</h2>
                    { for section.body.iter().map(|paragraph| html! {
                        <p>{ paragraph }</p>
                    }) }
                </section>
            }) }
        </main>
    }
}
