//! Viewport visibility.
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Identifies if the referenced element has entered the viewport.
///
/// Observation stops after the first entry; the flag never resets for the
/// lifetime of the mount.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with(node, move |node| {
            let element = node
                .cast::<web_sys::Element>()
                .expect("could not cast node to element");

            let on_intersect: Closure<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)> =
                Closure::new(
                    move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                        let entered = entries.iter().any(|entry| {
                            entry
                                .dyn_into::<web_sys::IntersectionObserverEntry>()
                                .expect("could not cast entry")
                                .is_intersecting()
                        });

                        if entered {
                            in_view.set(true);
                            observer.disconnect();
                        }
                    },
                );

            let observer =
                web_sys::IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())
                    .expect("could not create intersection observer");

            observer.observe(&element);

            // clean up
            move || {
                observer.disconnect();
                drop(on_intersect);
            }
        });
    }

    *in_view
}
