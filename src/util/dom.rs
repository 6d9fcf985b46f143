//! Thin web-sys glue shared by the page wiring and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listeners attached to static page markup live as long as the page, so
//! their closures are leaked with `Closure::forget`. The only listener with
//! an explicit release is the document pointer subscription behind
//! `DocumentPointerHub`.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
use crate::state::disclosure::{PointerHub, PointerOrigin};

/// Open `href` in a new browsing context with no `window.opener`.
pub fn open_detached(href: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target_and_features(href, "_blank", "noopener") {
            log::warn!("failed to open {href}: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}

#[cfg(feature = "csr")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Every element matching `selector`, in document order.
#[cfg(feature = "csr")]
pub fn query_all(root: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Attach `handler` for the page lifetime.
#[cfg(feature = "csr")]
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to attach {event} listener: {err:?}");
        return;
    }
    closure.forget();
}

/// Run `f` on the next animation frame.
#[cfg(feature = "csr")]
pub fn next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
        log::debug!("animation frame not scheduled: {err:?}");
    }
}

/// Document click listener that reports whether each click's composed path
/// crossed `host`. The composed path reaches into shadow roots, so clicks
/// inside an encapsulated widget still count as inside.
#[cfg(feature = "csr")]
pub struct DocumentPointerHub {
    document: web_sys::Document,
    host: web_sys::Element,
}

#[cfg(feature = "csr")]
impl DocumentPointerHub {
    pub fn new(document: web_sys::Document, host: web_sys::Element) -> Self {
        Self { document, host }
    }
}

#[cfg(feature = "csr")]
impl PointerHub for DocumentPointerHub {
    type Subscription = Closure<dyn FnMut(web_sys::Event)>;

    fn subscribe(&mut self, listener: Box<dyn Fn(PointerOrigin)>) -> Self::Subscription {
        let host = self.host.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let origin = if ev.composed_path().includes(host.as_ref(), 0) {
                PointerOrigin::Inside
            } else {
                PointerOrigin::Outside
            };
            listener(origin);
        });
        if let Err(err) = self
            .document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::warn!("outside-click listener not attached: {err:?}");
        }
        closure
    }

    fn unsubscribe(&mut self, subscription: Self::Subscription) {
        if let Err(err) = self
            .document
            .remove_event_listener_with_callback("click", subscription.as_ref().unchecked_ref())
        {
            log::debug!("outside-click listener not removed: {err:?}");
        }
    }
}
