//! Animated wrapper.
use crate::constants::MOTION_CUSTOM_PROPERTY;
use crate::hooks::use_in_view;
use crate::types::MotionConfig;
use yew::prelude::*;

/// Properties for [`Motion`].
#[derive(Properties, PartialEq)]
pub struct MotionProps {
    /// Animation configuration. Callers hand this through untouched; the
    /// wrapper owns its interpretation.
    #[prop_or_default]
    pub config: MotionConfig,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub children: Children,
}

/// Wrapper applying an entrance animation to its children.
///
/// The active variant starts at `initial` and switches to `while_in_view`
/// the first time the element enters the viewport. `custom` is exposed to
/// the stylesheet as a CSS custom property so variant styles can derive
/// values from it (e.g. staggered transition delays).
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let config = &props.config;
    let state = if in_view {
        config.while_in_view.as_ref().or(config.initial.as_ref())
    } else {
        config.initial.as_ref()
    };

    let mut rules = Vec::new();
    if let Some(style) = state.and_then(|name| config.variants.get(name)) {
        rules.push(style.to_string());
    }
    if let Some(custom) = config.custom {
        rules.push(format!("{MOTION_CUSTOM_PROPERTY}: {custom}"));
    }
    let style = (!rules.is_empty()).then(|| AttrValue::from(rules.join("; ")));

    html! {
        <div ref={node} class={classes!("folio-ui-motion", props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}
