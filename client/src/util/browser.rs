//! DOM-backed toggle capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only adapters between the browser-agnostic `toggle` core and the
//! live document: a `MutationObserver` for the root marker, feature-detected
//! `document.startViewTransition`, and `Element.animate` for the reveal.

use futures::FutureExt;
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit, Window};

use crate::toggle::{
    ControlAnchor, PointerOrigin, ReadyFuture, RevealAnimation, RootMarker, Subscription, ToggleError,
    TransitionCapability, TransitionHost, ViewTransitionApi, Viewport,
};

fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

fn js_error(value: JsValue) -> ToggleError {
    ToggleError::Js(describe(&value))
}

fn document_root() -> Result<Element, ToggleError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or(ToggleError::Unsupported("document root element"))
}

/// The `<html>` element's marker class.
pub struct DocumentRoot {
    root: Element,
    marker_class: String,
}

impl DocumentRoot {
    /// # Errors
    ///
    /// Returns an error outside a browser document.
    pub fn from_window(marker_class: &str) -> Result<Self, ToggleError> {
        Ok(Self { root: document_root()?, marker_class: marker_class.to_owned() })
    }
}

impl RootMarker for DocumentRoot {
    fn has_marker(&self) -> bool {
        self.root.class_list().contains(&self.marker_class)
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<Subscription, ToggleError> {
        let root = self.root.clone();
        let marker = self.marker_class.clone();
        let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(move |_records: Array, _observer: MutationObserver| {
            on_change(root.class_list().contains(&marker));
        });

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(js_error)?;
        let init = MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&Array::of1(&JsValue::from_str("class")));
        observer.observe_with_options(&self.root, &init).map_err(js_error)?;

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

fn transition_promise(transition: &JsValue, name: &str) -> Option<Promise> {
    match Reflect::get(transition, &JsValue::from_str(name)) {
        Ok(value) => value.dyn_ref::<Promise>().cloned(),
        Err(_) => None,
    }
}

/// `document.startViewTransition` plus `Element.animate` on the root.
pub struct DocumentTransitions {
    document: Document,
    start: Function,
}

impl DocumentTransitions {
    /// `None` when the document has no `startViewTransition`.
    pub fn detect(document: &Document) -> Option<Self> {
        let start = match Reflect::get(document, &JsValue::from_str("startViewTransition")) {
            Ok(value) => value.dyn_into::<Function>(),
            Err(err) => Err(err),
        };
        match start {
            Ok(start) => Some(Self { document: document.clone(), start }),
            Err(_) => None,
        }
    }
}

impl ViewTransitionApi for DocumentTransitions {
    fn start(&self, update: Box<dyn FnOnce()>) -> Result<ReadyFuture, ToggleError> {
        let callback = Closure::once(move || update());
        let transition = self.start.call1(&self.document, callback.as_ref()).map_err(js_error)?;
        let ready = transition_promise(&transition, "ready")
            .ok_or(ToggleError::Unsupported("view transition without ready promise"))?;
        let update_done = transition_promise(&transition, "updateCallbackDone");

        // The browser may still invoke the update after `ready` rejects, so
        // the closure lives until `updateCallbackDone` settles.
        Ok(async move {
            let outcome = match JsFuture::from(ready).await {
                Ok(_) => Ok(()),
                Err(err) => Err(ToggleError::TransitionRejected(describe(&err))),
            };
            if let Some(done) = update_done {
                if let Err(err) = JsFuture::from(done).await {
                    log::debug!("view transition update failed: {}", describe(&err));
                }
            }
            drop(callback);
            outcome
        }
        .boxed_local())
    }

    fn animate_reveal(&self, reveal: &RevealAnimation) -> Result<(), ToggleError> {
        let root = self
            .document
            .document_element()
            .ok_or(ToggleError::Unsupported("document root element"))?;

        let [from, to] = reveal.clip_path_keyframes();
        let keyframes = Object::new();
        Reflect::set(
            &keyframes,
            &JsValue::from_str("clipPath"),
            &Array::of2(&JsValue::from(from), &JsValue::from(to)),
        )
        .map_err(js_error)?;

        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("duration"), &JsValue::from(reveal.duration_ms)).map_err(js_error)?;
        Reflect::set(&options, &JsValue::from_str("easing"), &JsValue::from_str(&reveal.easing)).map_err(js_error)?;
        Reflect::set(&options, &JsValue::from_str("pseudoElement"), &JsValue::from_str(&reveal.pseudo_element))
            .map_err(js_error)?;

        let animate = Reflect::get(&root, &JsValue::from_str("animate"))
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(|_| ToggleError::Unsupported("Element.animate"))?;
        animate.call2(&root, &keyframes, &options).map_err(js_error)?;
        Ok(())
    }
}

/// Window-level host; detection runs once per `detect` call.
pub struct BrowserHost {
    window: Window,
    transitions: Option<DocumentTransitions>,
}

impl BrowserHost {
    /// # Errors
    ///
    /// Returns an error outside a browser window.
    pub fn detect() -> Result<Self, ToggleError> {
        let window = web_sys::window().ok_or(ToggleError::Unsupported("window"))?;
        let document = window.document().ok_or(ToggleError::Unsupported("document"))?;
        let transitions = DocumentTransitions::detect(&document);
        Ok(Self { window, transitions })
    }
}

fn dimension(value: Result<JsValue, JsValue>) -> f64 {
    match value {
        Ok(v) => v.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

impl TransitionHost for BrowserHost {
    fn capability(&self) -> TransitionCapability<'_> {
        match &self.transitions {
            Some(api) => TransitionCapability::Animated(api),
            None => TransitionCapability::Immediate,
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport { width: dimension(self.window.inner_width()), height: dimension(self.window.inner_height()) }
    }
}

/// Anchors the reveal on a rendered element's bounding box.
pub struct ElementAnchor {
    element: Option<Element>,
}

impl ElementAnchor {
    pub fn new(element: Option<Element>) -> Self {
        Self { element }
    }
}

impl ControlAnchor for ElementAnchor {
    fn center(&self) -> Option<PointerOrigin> {
        let element = self.element.as_ref().filter(|el| el.is_connected())?;
        let rect = element.get_bounding_client_rect();
        Some(PointerOrigin::center_of(rect.left(), rect.top(), rect.width(), rect.height()))
    }
}
