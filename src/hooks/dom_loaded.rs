//! First client-side paint.
use yew::prelude::*;

/// Identifies if the first client-side render has committed.
///
/// Starts `false` and flips to `true` exactly once, after mount.
/// Markup that depends on client-only state must be gated behind this
/// flag so it is absent from any render pass performed without a live
/// document (e.g. on a server), keeping both passes consistent.
#[hook]
pub fn use_dom_loaded() -> bool {
    let dom_loaded = use_state(|| false);

    {
        let dom_loaded = dom_loaded.clone();
        use_effect_with((), move |_| {
            dom_loaded.set(true);
        });
    }

    *dom_loaded
}
