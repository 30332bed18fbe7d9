//! Terminal widget: header with controls, output log and input line.

use dhterm_core::{Key, ShellConfig};
use leptos::prelude::*;

use super::input::Input;
use super::output::Output;
use super::state::TerminalState;

stylance::import_crate_style!(css, "src/components/terminal.module.css");

// ============================================================================
// Helper Functions
// ============================================================================

/// Keep the newest line in view whenever output changes.
fn setup_autoscroll_effect(state: TerminalState, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        state.lines.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

/// A self-contained practice terminal.
///
/// Each instance owns its own shell; nothing is shared between terminals on
/// the same page.
#[component]
pub fn Terminal(config: ShellConfig) -> impl IntoView {
    let state = TerminalState::new(config);
    let output_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    setup_autoscroll_effect(state, output_ref);

    let on_key = Callback::new(move |(key, line): (Key, String)| state.key(key, &line));
    let on_get_hint = Callback::new(move |line: String| state.hint(&line));
    let on_clear = Callback::new(move |()| state.clear());

    let focus_input = move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <div class=css::container on:click=focus_input>
            <div class=css::header>
                <span class=css::title>"Terminal"</span>
                <div class=css::controls>
                    <button class=css::button on:click=move |_| state.clear()>"Clear"</button>
                    <button class=css::button on:click=move |_| state.reset()>"Reset"</button>
                </div>
            </div>

            <div node_ref=output_ref class=css::output>
                <For
                    each=move || state.lines.get()
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <Input
                input_ref=input_ref
                prompt=state.prompt
                on_key=on_key
                on_get_hint=on_get_hint
                on_clear=on_clear
            />
        </div>
    }
}

