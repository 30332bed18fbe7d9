//! Browser tests for mounting terminals into the page.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn placeholder(config: Option<&str>) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    element.set_attribute("data-terminal", "").unwrap();
    if let Some(config) = config {
        element.set_attribute("data-config", config).unwrap();
    }
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_mount_marks_element() {
    let element = placeholder(None);
    dhterm_web::mount_terminal(element.clone());
    assert_eq!(element.dataset().get("initialized").as_deref(), Some("true"));
    assert!(element.child_element_count() > 0);
}

#[wasm_bindgen_test]
fn test_mount_is_idempotent() {
    let element = placeholder(None);
    dhterm_web::mount_terminal(element.clone());
    let children = element.child_element_count();
    dhterm_web::mount_terminal(element.clone());
    assert_eq!(element.child_element_count(), children);
}

#[wasm_bindgen_test]
fn test_welcome_banner_rendered() {
    let element = placeholder(Some(r#"{"user": "ada"}"#));
    dhterm_web::mount_terminal(element.clone());
    let text = element.text_content().unwrap_or_default();
    assert!(text.contains("Welcome to the Terminal Simulator!"));
    assert!(text.contains("ada@computer:~$ "));
}
