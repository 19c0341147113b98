use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::Renderer;

use reefdocs_web::app::App;
use reefdocs_web::{dom, theme};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn menu_entries_target_rendered_sections() {
    render_app();
    let doc = dom::document();
    let entries = doc
        .query_selector_all(".content-menu ul li")
        .expect("query menu entries");
    assert!(entries.length() > 0, "menu should not be empty");
    for index in 0..entries.length() {
        let entry = entries.get(index).expect("entry node");
        let entry: web_sys::Element = entry.dyn_into().expect("entry is an element");
        let target = entry.get_attribute("data-target").expect("data-target set");
        assert!(
            doc.get_element_by_id(&target).is_some(),
            "menu entry targets missing section {target}"
        );
    }
}

#[wasm_bindgen_test]
fn theme_toggle_flips_attribute_and_persists() {
    render_app();
    let doc = dom::document();
    let html = doc.document_element().expect("document root");

    theme::apply_theme(reefdocs_nav::Theme::Light);
    let next = theme::toggle_theme(reefdocs_nav::Theme::Light);
    assert_eq!(next, reefdocs_nav::Theme::Dark);
    assert_eq!(html.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(theme::stored_theme(), Some(reefdocs_nav::Theme::Dark));
}

#[wasm_bindgen_test]
fn menu_overlay_class_follows_state() {
    render_app();
    reefdocs_web::menu::set_menu_opened(true);
    assert!(reefdocs_web::menu::menu_opened());
    reefdocs_web::menu::set_menu_opened(false);
    assert!(!reefdocs_web::menu::menu_opened());
}
