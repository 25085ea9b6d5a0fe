//! Project deck.
use super::ProjectCard;
use crate::types::{MotionConfig, Project, ToKey};
use yew::prelude::*;
use yew::virtual_dom::Key;

impl ToKey for Project {
    /// Projects are keyed by name.
    /// Duplicate names are not distinguishable to the renderer.
    fn key(&self) -> Key {
        self.name.clone().into()
    }
}

/// Properties for a [`ProjectDeck`].
#[derive(Properties, PartialEq)]
pub struct ProjectDeckProps {
    /// Projects to display, in order.
    pub projects: Vec<Project>,

    /// Animation bag handed to every card, with `custom` set to the
    /// card's index so variant styles can stagger entrances.
    #[prop_or_default]
    pub motion: MotionConfig,

    #[prop_or_default]
    pub class: Classes,
}

/// Grid of [`ProjectCard`]s.
#[function_component(ProjectDeck)]
pub fn project_deck(props: &ProjectDeckProps) -> Html {
    let cards = props
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            html! {
                <ProjectCard
                    key={project.key()}
                    project={project.clone()}
                    motion={staggered(&props.motion, index)} />
            }
        })
        .collect::<Html>();

    html! {
        <div class={classes!("folio-ui-project-deck", props.class.clone())}>{ cards }</div>
    }
}

/// The deck's animation bag for the card at `index`.
fn staggered(base: &MotionConfig, index: usize) -> MotionConfig {
    MotionConfig {
        custom: Some(index as f64),
        ..base.clone()
    }
}

#[cfg(test)]
#[path = "./project_deck_test.rs"]
mod project_deck_test;
