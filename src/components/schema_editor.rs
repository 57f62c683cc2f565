//! Built-in text-editing widget: a plain `<textarea>`.
//!
//! Satisfies the injected-widget contract: `value` seeds the textarea when
//! the widget mounts, and every input event reports the full text through
//! `on_change`. Hosts with richer editors inject their own slot instead.

use leptos::prelude::*;

use crate::components::editor::SchemaEditorProps;

/// Render the default schema textarea.
#[must_use]
pub fn schema_text_area(props: SchemaEditorProps) -> AnyView {
    let SchemaEditorProps { value, on_change } = props;
    let on_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            if let Some(area) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            {
                on_change(area.value());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, &on_change);
        }
    };
    view! {
        <textarea class="graphpane-code__textarea" spellcheck="false" on:input=on_input>
            {value}
        </textarea>
    }
    .into_any()
}
