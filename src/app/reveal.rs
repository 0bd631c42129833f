use leptos::{ev, html::ElementType, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    nav::SectionScroller,
    reveal::{RegionBounds, RevealController, ScrollReveal, Trigger, TriggerBand},
};

/// Reveal controller scoped to the calling component's owner.
///
/// One window `scroll`/`resize` subscription drives every region registered
/// through the scope; both listeners and the regions are released when the
/// owner is cleaned up.
#[derive(Clone, Copy)]
pub struct RevealScope {
    controller: StoredValue<ScrollReveal>,
}

pub fn use_reveal_scope() -> RevealScope {
    let controller = StoredValue::new(ScrollReveal::new());
    let refresh = move || {
        let Some(height) = viewport_height() else {
            return;
        };
        controller.try_update_value(|c| c.refresh(height));
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| refresh());
    let _ = use_event_listener(use_window(), ev::resize, move |_| refresh());
    // regions already past their band when the page loads
    Effect::new(move |_| refresh());

    on_cleanup(move || {
        controller.try_update_value(|c| {
            log::debug!("releasing {} reveal regions", c.active_regions());
            c.teardown();
        });
    });

    RevealScope { controller }
}

impl RevealScope {
    /// Registers `target` and returns its revealed flag. The region is
    /// dropped again when the calling component is cleaned up.
    pub fn region<E>(&self, target: NodeRef<E>, band: TriggerBand) -> ReadSignal<bool>
    where
        E: ElementType,
        E::Output: JsCast + Clone + 'static,
    {
        let (revealed, set_revealed) = signal(false);
        let probe = move || target.get_untracked().map(|el| bounds_of(el.unchecked_ref()));
        let controller = self.controller;
        let id = controller.try_update_value(|c| {
            c.register_region(
                Trigger::new(band, probe),
                Box::new(move || set_revealed.set(true)),
                Box::new(move || set_revealed.set(false)),
            )
        });
        if let Some(id) = id {
            on_cleanup(move || {
                controller.try_update_value(|c| c.deregister(id));
            });
        }
        revealed
    }
}

fn viewport_height() -> Option<f64> {
    window().inner_height().ok()?.as_f64()
}

pub fn bounds_of(el: &web_sys::Element) -> RegionBounds {
    let rect = el.get_bounding_client_rect();
    RegionBounds {
        top: rect.top(),
        height: rect.height(),
    }
}

/// Class list for an element animated by a reveal region.
pub fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("reveal revealed {base}")
    } else {
        format!("reveal {base}")
    }
}

/// Smooth-scrolls the document to an element id.
pub struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    fn scroll_to(&self, id: &str) -> bool {
        let Some(el) = document().get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
