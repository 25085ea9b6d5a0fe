//! Project card.
use crate::common;
use crate::components::{IconLink, Motion};
use crate::constants::{REPO_ICON_SIZE, SITE_ICON_SIZE};
use crate::hooks::use_dom_loaded;
use crate::types::{MotionConfig, Project};
use crate::widgets::Tags;
use yew::prelude::*;
use yew_icons::IconId;

/// Properties for a [`ProjectCard`].
#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    /// Project to display.
    pub project: Project,

    /// Animation bag, forwarded verbatim to the [`Motion`] wrapper.
    #[prop_or_default]
    pub motion: MotionConfig,

    #[prop_or_default]
    pub class: Classes,
}

/// Clickable card presenting a project.
///
/// Activating the card surface opens the project's `url` in a new browsing
/// context. The nested repository and live-site links navigate on their
/// own without also activating the surface. Nothing is rendered until the
/// first client-side paint has committed.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let dom_loaded = use_dom_loaded();
    if !dom_loaded {
        return html! {};
    }

    let project = &props.project;
    let onclick = {
        let url = project.url.clone();

        Callback::from(move |_: MouseEvent| {
            tracing::debug!(%url, "card activated");
            // Refused navigations (e.g. blocked pop-ups) are not surfaced.
            let _ = common::open_in_new_tab(&url);
        })
    };

    html! {
        <Motion config={props.motion.clone()}
            class={classes!("folio-ui-project-card", props.class.clone())}>

            <div class={classes!("card-surface")} role="button" {onclick}>
                <div class={classes!("media-container")}>
                    { project_media(project).to_html() }
                </div>

                <div class={classes!("card-details")}>
                    <div class={classes!("card-meta")}>
                        <Tags value={project.tags.clone()} />

                        <div class={classes!("card-links")}>
                            <IconLink href={project.repo.clone()}
                                icon_id={IconId::BootstrapGithub}
                                size={REPO_ICON_SIZE}
                                label={"source repository"} />

                            <IconLink href={project.url.clone()}
                                icon_id={IconId::BootstrapBoxArrowUpRight}
                                size={SITE_ICON_SIZE}
                                label={"live site"} />
                        </div>
                    </div>

                    <h4 class={classes!("card-title")}>
                        <span class={classes!("name")}>{ &project.name }</span>
                        <span class={classes!("year")}>{ project.year }</span>
                    </h4>
                </div>
            </div>
        </Motion>
    }
}

/// Media shown for a project.
#[derive(Clone, Debug, PartialEq)]
enum ProjectMedia {
    /// Local video player, optionally postered by the project image.
    Video {
        src: AttrValue,
        poster: Option<AttrValue>,
    },

    /// Embedded video frame.
    Embed { src: AttrValue },

    /// Static image.
    Image { src: AttrValue, alt: AttrValue },

    /// Empty media slot.
    None,
}

/// Selects the media for a project.
///
/// A local video wins over an embedded one; an embedded video wins over
/// the image; without any of the three the slot stays empty.
fn project_media(project: &Project) -> ProjectMedia {
    if let Some(video) = project.video.as_ref() {
        ProjectMedia::Video {
            src: video.clone().into(),
            poster: project.img.clone().map(Into::into),
        }
    } else if let Some(embed) = project.video_url.as_ref() {
        ProjectMedia::Embed {
            src: embed.clone().into(),
        }
    } else if let Some(img) = project.img.as_ref() {
        ProjectMedia::Image {
            src: img.clone().into(),
            alt: project.name.clone().into(),
        }
    } else {
        ProjectMedia::None
    }
}

impl ProjectMedia {
    fn to_html(&self) -> Html {
        match self {
            Self::Video { src, poster } => html! {
                <video controls={true} poster={poster.clone()}>
                    <source src={src.clone()} type="video/mp4" />
                </video>
            },

            Self::Embed { src } => html! {
                <iframe src={src.clone()}
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen={true} />
            },

            Self::Image { src, alt } => html! {
                <img src={src.clone()} alt={alt.clone()} />
            },

            Self::None => html! {},
        }
    }
}

#[cfg(test)]
#[path = "./project_card_test.rs"]
mod project_card_test;
