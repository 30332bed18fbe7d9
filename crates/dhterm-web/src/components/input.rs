//! Terminal input line with history, completion and ghost text hints.

use dhterm_core::{InputEdit, Key};
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::HintState;

stylance::import_crate_style!(css, "src/components/input.module.css");

/// Length in the UTF-16 units the DOM uses for selection offsets.
fn utf16_len(value: &str) -> u32 {
    value.encode_utf16().count() as u32
}

fn cursor_at_end(selection_start: u32, value: &str) -> bool {
    selection_start == utf16_len(value)
}

/// Input field that forwards shell keys and renders the hint overlay.
///
/// Enter, Tab and the vertical arrows go to the shell through `on_key`;
/// the field then applies the returned [`InputEdit`]. ArrowRight at the
/// end of the line accepts the current hint.
#[component]
pub fn Input(
    input_ref: NodeRef<leptos::html::Input>,
    #[prop(into)] prompt: Signal<String>,
    on_key: Callback<(Key, String), InputEdit>,
    on_get_hint: Callback<String, Option<String>>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let hint_state = HintState::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = utf16_len(&input.value());
            let _ = input.set_selection_range(len, len);
        }
    };

    let refresh_hint = move |value: &str| {
        if value.is_empty() {
            hint_state.clear();
        } else {
            hint_state.set(on_get_hint.run(value.to_string()));
        }
    };

    let handle_arrow_right = move |value: &str| -> Option<String> {
        let input = input_ref.get()?;
        let pos = input.selection_start().ok().flatten().unwrap_or(0);
        if !cursor_at_end(pos, value) {
            return None;
        }
        let hint = hint_state.get()?;
        Some(format!("{value}{hint}"))
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let name = ev.key();
        if let Some(key) = Key::from_name(&name) {
            if key != Key::Enter {
                ev.prevent_default();
            }
            match on_key.run((key, input_value.get_untracked())) {
                InputEdit::Replace(value) => {
                    refresh_hint(&value);
                    set_input_value.set(value);
                    move_cursor_to_end();
                }
                InputEdit::Keep => {}
            }
            return;
        }

        match name.as_str() {
            "ArrowRight" => {
                let value = input_value.get_untracked();
                if let Some(completed) = handle_arrow_right(&value) {
                    ev.prevent_default();
                    refresh_hint(&completed);
                    set_input_value.set(completed);
                    move_cursor_to_end();
                }
            }
            "c" if ev.ctrl_key() => {
                hint_state.clear();
                set_input_value.set(String::new());
            }
            "l" if ev.ctrl_key() => {
                ev.prevent_default();
                on_clear.run(());
            }
            "Escape" => hint_state.clear(),
            _ => {}
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        let value = input.value();
        refresh_hint(&value);
        set_input_value.set(value);
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{prompt}</span>
            <div class=css::field>
                // Ghost text overlay (input value + hint)
                <div class=css::ghostOverlay>
                    <span class=css::ghostText>{move || input_value.get()}</span>
                    <span class=css::ghostHint>
                        {move || hint_state.hint.get().unwrap_or_default()}
                    </span>
                </div>
                <input
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    autocomplete="off"
                    autocapitalize="off"
                    spellcheck="false"
                    prop:value=input_value
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </div>
        </div>
    }
}
