//! Constant values.

/// Size of the repository icon, in pixels.
pub static REPO_ICON_SIZE: &str = "20";

/// Size of the live-site icon, in pixels.
pub static SITE_ICON_SIZE: &str = "22";

/// CSS custom property carrying the `custom` animation value.
pub static MOTION_CUSTOM_PROPERTY: &str = "--motion-custom";
