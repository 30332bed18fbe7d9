//! Browser host for the dhterm practice terminal.
//!
//! Every element carrying `data-terminal` gets its own independent
//! [`TerminalShell`](dhterm_core::TerminalShell), rendered with Leptos.
//! Pages that build their markup late can call [`mount_terminal`] directly.

mod components;
mod config;
mod logging;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlElement;

use components::Terminal;

/// Selector for terminal placeholders.
const TERMINAL_SELECTOR: &str = "[data-terminal]";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    init_terminals();
}

/// Mount a terminal into every `[data-terminal]` element not yet mounted.
#[wasm_bindgen]
pub fn init_terminals() {
    let Some(nodes) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(TERMINAL_SELECTOR).ok())
    else {
        log::warn!("no document; terminals not mounted");
        return;
    };

    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i)
            && let Ok(element) = node.dyn_into::<HtmlElement>()
        {
            mount_terminal(element);
        }
    }
}

/// Mount a terminal into `element`, reading its `data-config`.
///
/// Elements already marked `data-initialized="true"` are left alone.
#[wasm_bindgen]
pub fn mount_terminal(element: HtmlElement) {
    let dataset = element.dataset();
    if dataset.get("initialized").as_deref() == Some("true") {
        return;
    }
    let config = config::parse(dataset.get("config").as_deref());
    if dataset.set("initialized", "true").is_err() {
        log::warn!("could not mark terminal element as initialized");
    }

    mount_to(element, move || view! { <Terminal config=config /> }).forget();
}
