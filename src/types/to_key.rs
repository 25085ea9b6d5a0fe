use yew::virtual_dom::Key;

/// Functionality for an object to provide its render key when iterated.
pub trait ToKey {
    fn key(&self) -> Key;
}
