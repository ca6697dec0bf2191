use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::gate::{
    forward, IntersectionListener, IntersectionSource, ObserveError, Observation, Subscription,
};

/// `IntersectionObserver` bound to a single mounted element.
pub struct ElementViewport {
    element: Element,
}

impl ElementViewport {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl IntersectionSource for ElementViewport {
    fn subscribe(
        &self,
        threshold: f64,
        mut listener: IntersectionListener,
    ) -> Result<Subscription, ObserveError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entries = entries.iter().map(|entry| {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    (entry.is_intersecting(), entry.intersection_ratio())
                });
                if forward(entries, &mut listener) == Observation::Stop {
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| ObserveError::Unsupported(format!("{:?}", e)))?;
        observer.observe(&self.element);

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}
