//! Common functionality.
use crate::Result;

/// Opens `url` in a new browsing context.
///
/// Fire-and-forget: a refused navigation (e.g. a blocked pop-up) reports
/// nothing to the user.
pub fn open_in_new_tab(url: &str) -> Result {
    let window = web_sys::window().expect("window not found");
    window.open_with_url_and_target(url, "_blank")?;
    Ok(())
}
