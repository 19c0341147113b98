//! Scroll-position tracking for the table of contents.
//!
//! The tracker owns the boundary layout derived from the rendered
//! `.content-section` blocks. The layout is rebuilt wholesale on mount and
//! after each debounced resize; scroll events only read it. The active
//! entry flows through a Yew state handle, and the handle is only set when
//! the computed id actually changes, so scrolling inside one section never
//! touches the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use reefdocs_nav::debounce::{Debounce, RESIZE_QUIET_MS};
use reefdocs_nav::section::{SectionLayout, ViewportMetrics};
use yew::prelude::*;

use crate::dom;

/// Sample the viewport numbers one active-entry resolution needs.
#[must_use]
pub fn viewport_metrics() -> ViewportMetrics {
    ViewportMetrics {
        scroll_y: dom::scroll_offset(),
        viewport_height: dom::viewport_height(),
        content_height: dom::content_height(),
    }
}

struct SpyCore {
    layout: SectionLayout,
    debounce: Debounce,
    last_applied: Option<AttrValue>,
}

impl Default for SpyCore {
    fn default() -> Self {
        Self {
            layout: SectionLayout::default(),
            debounce: Debounce::new(RESIZE_QUIET_MS),
            last_applied: None,
        }
    }
}

/// Section tracker handle shared by the event listeners and the click
/// handler. Cheap to clone; all clones see the same layout.
#[derive(Clone)]
pub struct ScrollSpy {
    core: Rc<RefCell<SpyCore>>,
    active: UseStateHandle<Option<AttrValue>>,
}

impl ScrollSpy {
    /// Re-measure the content sections, replace the boundary layout, and
    /// refresh the active entry against the new boundaries.
    pub fn rebuild_layout(&self) {
        self.core.borrow_mut().layout = SectionLayout::from_heights(dom::content_section_heights());
        self.update_active_section();
    }

    /// Recompute which entry is active for the current viewport. With no
    /// sections this resolves to no entry at all.
    pub fn update_active_section(&self) {
        let view = viewport_metrics();
        let next = self
            .core
            .borrow()
            .layout
            .active_entry(&view)
            .map(|id| AttrValue::from(id.to_string()));
        log::trace!("scroll {} -> {next:?}", view.scroll_y);
        self.apply(next);
    }

    /// Smooth-scroll to a section and mark its entry active immediately,
    /// without waiting for the scroll to settle.
    pub fn navigate_to(&self, id: &AttrValue) {
        dom::scroll_to_element(id);
        self.apply(Some(id.clone()));
    }

    /// Debounced rebuild: every resize event restarts the quiet period and
    /// schedules a callback; only the callback whose deadline survives
    /// does any work.
    fn schedule_rebuild(&self) {
        self.core.borrow_mut().debounce.arm(dom::now_ms());
        let spy = self.clone();
        let delay = i32::try_from(RESIZE_QUIET_MS).unwrap_or(i32::MAX);
        dom::set_timeout_once(delay, move || {
            let due = spy.core.borrow_mut().debounce.fire(dom::now_ms());
            if due {
                spy.rebuild_layout();
            }
        });
    }

    fn apply(&self, next: Option<AttrValue>) {
        let mut core = self.core.borrow_mut();
        if core.last_applied == next {
            return;
        }
        core.last_applied = next.clone();
        drop(core);
        self.active.set(next);
    }
}

/// Keep the boundary layout and the active sidebar entry in sync with the
/// viewport. Listeners attach on mount and detach on unmount. Returns the
/// navigation-click callback for the sidebar.
#[hook]
pub fn use_scroll_spy(active: UseStateHandle<Option<AttrValue>>) -> Callback<AttrValue> {
    let core = use_mut_ref(SpyCore::default);
    let spy = ScrollSpy { core, active };

    {
        let spy = spy.clone();
        use_effect_with((), move |()| {
            // First layout pass at mount.
            spy.rebuild_layout();

            let scroll_spy = spy.clone();
            let scroll_listener = dom::WindowListener::attach("scroll", move |_| {
                scroll_spy.update_active_section();
            });
            let resize_spy = spy.clone();
            let resize_listener = dom::WindowListener::attach("resize", move |_| {
                resize_spy.schedule_rebuild();
            });

            move || {
                drop(scroll_listener);
                drop(resize_listener);
            }
        });
    }

    Callback::from(move |id: AttrValue| spy.navigate_to(&id))
}
