//! Portfolio project.
use serde::{Deserialize, Serialize};

/// A portfolio project.
///
/// Fully determined by the caller before each render.
/// URI-valued fields are handed to the rendering primitives as given,
/// without validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Display name.
    pub name: String,

    /// Destination opened when the card surface is activated.
    pub url: String,

    /// Source repository.
    pub repo: String,

    /// Display year.
    pub year: i32,

    /// Poster or fallback image.
    #[serde(default)]
    pub img: Option<String>,

    /// Local video source. Takes precedence over `video_url`.
    #[serde(default)]
    pub video: Option<String>,

    /// Embedded video source.
    #[serde(default, rename = "videoUrl")]
    pub video_url: Option<String>,

    /// Tags, in display order. Not deduplicated.
    #[serde(default)]
    pub tags: Vec<String>,
}
