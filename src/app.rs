//! Portfolio application.
use crate::types::{MotionConfig, Project, Variants};
use crate::widgets::ProjectDeck;
use yew::prelude::*;

/// Embedded project catalog.
static CATALOG: &str = include_str!("../assets/projects.json");

/// Parses the embedded project catalog.
pub fn load_projects() -> crate::Result<Vec<Project>> {
    let projects = serde_json::from_str(CATALOG)?;
    Ok(projects)
}

/// Entrance animation for project cards.
///
/// Cards rest translated below their slot and fade in once scrolled into
/// view, delayed by their deck index.
fn entrance_motion() -> MotionConfig {
    MotionConfig {
        variants: Variants::new()
            .with("rest", "opacity: 0; transform: translateY(24px)")
            .with(
                "reveal",
                "opacity: 1; transform: none; \
                 transition: all 0.5s ease calc(var(--motion-custom, 0) * 120ms)",
            ),
        initial: Some("rest".into()),
        while_in_view: Some("reveal".into()),
        custom: None,
    }
}

/// Application root.
#[function_component(App)]
pub fn app() -> Html {
    let projects = use_memo((), |_| match load_projects() {
        Ok(projects) => projects,
        Err(err) => {
            tracing::error!(?err, "could not load the project catalog");
            Vec::new()
        }
    });

    html! {
        <main class={classes!("folio-app")}>
            <h1>{ "Projects" }</h1>
            <ProjectDeck projects={(*projects).clone()} motion={entrance_motion()} />
        </main>
    }
}

#[cfg(test)]
#[path = "./app_test.rs"]
mod app_test;
