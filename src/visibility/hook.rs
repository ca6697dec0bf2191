use web_sys::Element;
use yew::prelude::*;

use super::browser::ElementViewport;
use super::gate::{ObserveError, VisibilityGate};

/// Entrance-animation trigger for a landing section.
///
/// Attach the returned `NodeRef` to the element to watch. The flag turns
/// `true` the first time the element is at least `threshold` on screen and
/// never goes back. Observation is released on unmount.
#[hook]
pub fn use_scroll_animation(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let gate = node
                    .cast::<Element>()
                    .ok_or(ObserveError::MissingTarget)
                    .and_then(|element| {
                        let viewport = ElementViewport::new(element);
                        VisibilityGate::attach(&viewport, threshold, move || visible.set(true))
                    });
                let gate = match gate {
                    Ok(gate) => Some(gate),
                    Err(e) => {
                        log::warn!("Entrance animation disabled: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(gate) = gate {
                        gate.detach();
                    }
                }
            },
            (),
        );
    }

    (node, *visible)
}
