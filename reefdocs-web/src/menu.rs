//! Mobile navigation overlay state.
//!
//! The overlay is a single class on the document root; CSS does the rest.

const MENU_OPENED_CLASS: &str = "menu-opened";

fn root_class_list() -> Option<web_sys::DomTokenList> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .map(|html| html.class_list())
}

/// Open or close the mobile menu overlay.
pub fn set_menu_opened(open: bool) {
    if let Some(classes) = root_class_list() {
        let _ = if open {
            classes.add_1(MENU_OPENED_CLASS)
        } else {
            classes.remove_1(MENU_OPENED_CLASS)
        };
    }
}

/// Whether the overlay is currently open. Returns false outside a browser.
#[must_use]
pub fn menu_opened() -> bool {
    root_class_list().is_some_and(|classes| classes.contains(MENU_OPENED_CLASS))
}
