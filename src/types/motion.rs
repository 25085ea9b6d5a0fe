//! Animation configuration.
use indexmap::IndexMap;
use yew::prelude::*;

/// Named style variants.
///
/// Maps a state name to the inline style applied while that state is
/// active.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variants(IndexMap<String, AttrValue>);

impl Variants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variant, replacing any previous style under the same name.
    pub fn with(mut self, name: impl Into<String>, style: impl Into<AttrValue>) -> Self {
        self.0.insert(name.into(), style.into());
        self
    }

    /// Style for the named variant.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Animation bag consumed by the
/// [`Motion`](crate::components::Motion) wrapper.
///
/// The motion module owns this contract; other components hand the bag
/// through without reading it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionConfig {
    /// Available animation states.
    pub variants: Variants,

    /// Variant applied from mount.
    pub initial: Option<AttrValue>,

    /// Variant applied once the element enters the viewport.
    pub while_in_view: Option<AttrValue>,

    /// Opaque scalar exposed to styles as a CSS custom property.
    pub custom: Option<f64>,
}

#[cfg(test)]
#[path = "./motion_test.rs"]
mod motion_test;
