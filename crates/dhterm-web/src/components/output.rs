use dhterm_core::{LineStyle, OutputLine, OutputLineData};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/output.module.css");

/// CSS class for a line style.
fn style_class(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Command => css::command,
        LineStyle::Output => css::output,
        LineStyle::Error => css::error,
        LineStyle::Info => css::info,
    }
}

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    let style = line.style();
    let class = format!("{} {}", css::line, style_class(style));
    match line.data {
        OutputLineData::Command { prompt, input } => view! {
            <div class=class data-style=style.class_name()>
                <span class=css::prompt>{prompt}</span>
                <span>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::Text(text) | OutputLineData::Error(text) | OutputLineData::Info(text) => {
            view! { <div class=class data-style=style.class_name()>{text}</div> }.into_any()
        }
        OutputLineData::Empty => view! { <div class=css::lineEmpty></div> }.into_any(),
    }
}
