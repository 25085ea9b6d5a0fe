#![cfg(target_arch = "wasm32")]
//! Tests for `hooks`.
use folio_web::hooks::use_dom_loaded;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use wasm_bindgen_test::*;
use yew::prelude::*;
wasm_bindgen_test_configure!(run_in_browser);

// **********************
// *** use_dom_loaded ***
// **********************

thread_local! {
    static GATES: RefCell<Vec<bool>> = RefCell::new(Vec::new());
}

#[function_component(Probe)]
fn probe() -> Html {
    let dom_loaded = use_dom_loaded();
    GATES.with(|gates| gates.borrow_mut().push(dom_loaded));

    html! { <span>{ dom_loaded.to_string() }</span> }
}

#[wasm_bindgen_test]
async fn use_dom_loaded_should_start_closed_then_open_once() {
    let host = output_host();
    yew::Renderer::<Probe>::with_root(host.clone()).render();
    TimeoutFuture::new(100).await;

    let gates = GATES.with(|gates| gates.borrow().clone());
    assert_eq!(gates, vec![false, true]);
    assert_eq!(host.text_content(), Some("true".to_string()));
}

fn output_host() -> web_sys::Element {
    let document = web_sys::window()
        .expect("window not found")
        .document()
        .expect("document not found");

    let host = document
        .create_element("div")
        .expect("could not create element");

    document
        .body()
        .expect("document body not found")
        .append_child(&host)
        .expect("could not attach element");

    host
}
