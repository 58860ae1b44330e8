use js_sys::Function;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, Event, EventTarget, HtmlElement, Node};

use crate::interaction::outside_click_should_cancel;

/// Document-level event listener that detaches itself when dropped, so a
/// component can never leak a handler across mount/unmount cycles.
pub struct DocumentListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DocumentListener {
    pub fn on_document(
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let document = window()?.document()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let target: EventTarget = document.into();
        let function: &Function = callback.as_ref().unchecked_ref();

        target
            .add_event_listener_with_callback(event_type, function)
            .ok()?;

        Some(Self {
            target,
            event_type,
            callback,
        })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let function: &Function = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, function);
    }
}

/// Suspends background scrolling while held and restores the previous
/// overflow value when dropped, whichever close path fired.
pub struct ScrollLock {
    body: HtmlElement,
    previous_overflow: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = window()?.document()?.body()?;
        let style = body.style();
        let previous_overflow = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;

        Some(Self {
            body,
            previous_overflow,
        })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        if self.previous_overflow.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &self.previous_overflow);
        }
    }
}

pub fn touch_primary_device() -> bool {
    window()
        .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn pointer_event_is_outside(event: &Event, region: &Element) -> bool {
    let target_node = event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok());

    match target_node {
        Some(node) => {
            outside_click_should_cancel(node.is_connected(), region.contains(Some(&node)))
        }
        None => true,
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(win) = window() {
        let _ = win.open_with_url_and_target(url, "_blank");
    }
}

pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
