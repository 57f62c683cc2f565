//! Built-in language selector region: a minimal generate bar.
//!
//! The editor surface treats the selector as an injected collaborator; this
//! default satisfies the contract for hosts that do not bring their own.

use leptos::prelude::*;

use crate::components::editor::LanguageSelectorProps;

/// Render the default selector region: a language label and a generate
/// button that appears only while a non-empty cached schema exists.
#[must_use]
pub fn select_language(props: LanguageSelectorProps) -> AnyView {
    let LanguageSelectorProps { generate_visible, on_generate } = props;
    let on_click = move |_| on_generate();
    view! {
        <div class="graphpane-select-language">
            <span class="graphpane-select-language__label">"GraphQL"</span>
            <Show when=move || generate_visible.get()>
                <button class="graphpane-select-language__generate" on:click=on_click.clone()>
                    "Generate diagram"
                </button>
            </Show>
        </div>
    }
    .into_any()
}
