//! Tags.
use yew::prelude::*;

/// Properties for [`Tags`].
#[derive(Properties, PartialEq)]
pub struct TagsProps {
    /// Tags, rendered in the order given.
    ///
    /// Tag text doubles as the render key, so duplicate tags are not
    /// distinguishable to the renderer.
    #[prop_or(Vec::new())]
    pub value: Vec<String>,

    #[prop_or_default]
    pub class: Classes,
}

/// Wrapped list of pill shaped tag labels.
#[function_component(Tags)]
pub fn tags(props: &TagsProps) -> Html {
    html! {
        <div class={classes!("folio-ui-tags", props.class.clone())}>
            { props.value.iter().map(|tag| html! {
                <span key={tag.clone()} class={classes!("tag")}>{ tag }</span>
            }).collect::<Html>() }
        </div>
    }
}
