//! Root application component and server-side HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::editor::Editor;

/// Schema preloaded into the demo surface.
const DEMO_SCHEMA: &str = "type Query {\n  hello: String\n}\n";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Hosts the editor surface with the built-in collaborators and a demo
/// schema. Real hosts embed [`Editor`] directly, inject their own widget and
/// selector, and drive `editor_visible`/`read_only` from their own state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let editor_visible = RwSignal::new(true);
    let read_only = RwSignal::new(false);

    view! {
        <Stylesheet id="leptos" href="/pkg/graphpane.css"/>
        <Title text="graphpane"/>

        <main class="graphpane">
            <Editor
                schema=DEMO_SCHEMA.to_owned()
                editor_visible=editor_visible
                read_only=read_only
            />
        </main>
    }
}
