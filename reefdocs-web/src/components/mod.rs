pub mod content;
pub mod content_menu;
pub mod menu_button;
pub mod theme_toggle;
