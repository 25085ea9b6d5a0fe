//! Icon hyperlink.
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Properties for an [`IconLink`].
#[derive(Properties, PartialEq)]
pub struct IconLinkProps {
    /// Link destination.
    pub href: AttrValue,

    /// Icon to display.
    pub icon_id: IconId,

    /// Icon width and height, in pixels.
    #[prop_or(AttrValue::Static("20"))]
    pub size: AttrValue,

    /// Accessible name for the link.
    #[prop_or_default]
    pub label: Option<AttrValue>,

    #[prop_or_default]
    pub class: Classes,
}

/// Hyperlink wrapping a single icon.
///
/// Opens its destination in a new browsing context. Clicks never reach an
/// enclosing activation surface; the link navigates on its own.
#[function_component(IconLink)]
pub fn icon_link(props: &IconLinkProps) -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <a class={classes!("folio-ui-icon-link", props.class.clone())}
            href={props.href.clone()}
            target={"_blank"}
            aria-label={props.label.clone()}
            {onclick}>

            <Icon icon_id={props.icon_id} width={props.size.clone()} height={props.size.clone()} />
        </a>
    }
}
