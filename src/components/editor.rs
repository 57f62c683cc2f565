//! The split-pane editor surface.
//!
//! ARCHITECTURE
//! ============
//! The component owns the diagram controller's lifecycle and the engine-side
//! shell machine, and wires DOM events into them: drag events on the resize
//! handle drive the pane width, edits from the injected text widget feed the
//! schema cache, and the controller's asynchronous pushes flow back into
//! component state. Everything with an invariant lives in
//! [`editor::shell::ShellCore`]; this file is wiring.

use std::sync::Arc;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use editor::diagram::{DiagramCallbacks, DiagramController};
#[cfg(not(feature = "hydrate"))]
use editor::diagram::DiagramController;
use editor::shell::{Action, ShellCore};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;

use crate::state::editor::EditorState;
use crate::state::pane::{PaneState, pane_width_style};
#[cfg(feature = "hydrate")]
use crate::util::frame::on_next_frame;
#[cfg(feature = "hydrate")]
use crate::util::viewport::viewport_width;

/// Props handed to the injected text-editing widget when it (re)mounts.
///
/// The widget treats `value` as meaningful only at mount; the host re-invokes
/// the slot whenever an external schema push changes the cache, so a widget
/// that never re-reads `value` still ends up showing the pushed text.
pub struct SchemaEditorProps {
    /// The schema text to display.
    pub value: String,
    /// Called with the full text on every edit batch.
    pub on_change: Arc<dyn Fn(String) + Send + Sync>,
}

/// Injected text-editing widget.
pub type SchemaEditorSlot = Arc<dyn Fn(SchemaEditorProps) -> AnyView + Send + Sync>;

/// Props handed to the injected language selector region.
pub struct LanguageSelectorProps {
    /// True only while a non-empty cached schema exists.
    pub generate_visible: Signal<bool>,
    /// Request an explicit text → diagram generation.
    pub on_generate: Arc<dyn Fn() + Send + Sync>,
}

/// Injected language selector region.
pub type LanguageSelectorSlot = Arc<dyn Fn(LanguageSelectorProps) -> AnyView + Send + Sync>;

/// Hook receiving the constructed diagram controller right after mount.
///
/// The reference is only valid during the call; hosts wanting to drive the
/// controller later should do so synchronously from here.
pub type ControllerHook = Arc<dyn Fn(&DiagramController) + Send + Sync>;

/// Split-pane editor surface.
///
/// Composes the resizable text pane (selector region, injected text widget,
/// drag handle), the diagram mount element, and the inline error region.
/// The diagram controller is constructed exactly once, one rendering frame
/// after mount, and owned here for the component's whole lifetime.
#[component]
pub fn Editor(
    /// Initial schema, imported once the diagram controller attaches.
    #[prop(optional, into)]
    schema: Option<String>,
    /// Whether the text pane is part of the layout.
    #[prop(into)]
    editor_visible: Signal<bool>,
    /// Read-only mode; forwarded to the diagram controller on change.
    #[prop(into, default = Signal::from(false))]
    read_only: Signal<bool>,
    /// Host callback fired once, with the first meaningful edit.
    #[prop(optional)]
    schema_changed: Option<Callback<String>>,
    /// Host callback fired on every drag-frame width change and on
    /// visibility toggles.
    #[prop(optional)]
    on_resized: Option<Callback<()>>,
    /// Hook exposing the constructed diagram controller to the host.
    #[prop(optional)]
    on_controller: Option<ControllerHook>,
    /// Injected text widget; defaults to the built-in textarea.
    #[prop(optional)]
    editor_slot: Option<SchemaEditorSlot>,
    /// Injected language selector; defaults to the built-in generate bar.
    #[prop(optional)]
    selector_slot: Option<LanguageSelectorSlot>,
) -> impl IntoView {
    let state = RwSignal::new(EditorState::default());
    let pane = RwSignal::new(PaneState::default());
    let shell = RwSignal::new(ShellCore::new(
        read_only.get_untracked(),
        editor_visible.get_untracked(),
    ));
    // Bumped only when an external push changes the cache; keys the widget
    // slot so its value stays initial-only otherwise.
    let schema_epoch = RwSignal::new(0_u64);
    let generate_visible = RwSignal::new(false);
    let generate_seq = RwSignal::new(0_u64);

    let container_ref = NodeRef::<leptos::html::Div>::new();
    let handle_ref = NodeRef::<leptos::html::Div>::new();

    let editor_slot = StoredValue::new(
        editor_slot.unwrap_or_else(|| Arc::new(crate::components::schema_editor::schema_text_area)),
    );
    let selector_slot = StoredValue::new(
        selector_slot.unwrap_or_else(|| Arc::new(crate::components::select_language::select_language)),
    );

    // Edits never touch the controller, only the cache and the host's
    // one-time seeding callback.
    let on_change: Arc<dyn Fn(String) + Send + Sync> = Arc::new(move |text: String| {
        let action = shell.try_update(|s| s.on_edit(&text)).flatten();
        generate_visible.set(!text.is_empty());
        if let Some(Action::NotifySchemaChanged(code)) = action {
            state.update(|s| s.code.clone_from(&code));
            if let Some(callback) = schema_changed {
                callback.run(code);
            }
        }
    });
    let on_change = StoredValue::new(on_change);

    let on_generate: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
        generate_seq.update(|seq| *seq += 1);
    });
    let on_generate = StoredValue::new(on_generate);

    #[cfg(feature = "hydrate")]
    let controller = StoredValue::new_local(None::<DiagramController>);
    #[cfg(feature = "hydrate")]
    let diagram_callbacks = StoredValue::new_local(None::<DiagramCallbacks>);

    // Construct and attach the controller one frame after mount, so styling
    // has settled before the diagram measures the DOM.
    #[cfg(feature = "hydrate")]
    {
        let initial_schema = schema.clone();
        Effect::new(move || {
            if container_ref.get().is_none() || controller.with_value(Option::is_some) {
                return;
            }
            let initial_schema = initial_schema.clone();
            let on_controller = on_controller.clone();
            on_next_frame(move || {
                // The component may have been torn down before the frame
                // fired; bail out if the mount target is gone.
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                if controller.with_value(Option::is_some) {
                    return;
                }
                let instance = DiagramController::new();
                instance.set_dom_element(&container);
                diagram_callbacks.set_value(Some(DiagramCallbacks::register(
                    &instance,
                    move |code: String, stitches: JsValue| {
                        let stitches = stitches.as_string();
                        let refresh = shell
                            .try_update(|s| s.on_schema_push(&code, stitches.as_deref()))
                            .flatten()
                            .is_some();
                        generate_visible.set(!code.is_empty());
                        state.update(|s| {
                            s.code.clone_from(&code);
                            s.stitches = stitches.unwrap_or_default();
                            s.errors.clear();
                        });
                        if refresh {
                            schema_epoch.update(|epoch| *epoch += 1);
                        }
                    },
                    move |message: String| {
                        log::warn!("diagram import failed: {message}");
                        shell.update(|s| s.on_diagram_errors(&message));
                        state.update(|s| s.errors = message);
                    },
                )));
                if let Some(hook) = on_controller.as_ref() {
                    hook(&instance);
                }
                for action in shell.with_untracked(|s| s.bootstrap(initial_schema.as_deref())) {
                    apply_action(&instance, state, schema_epoch, schema_changed, on_resized, action);
                }
                controller.set_value(Some(instance));
            });
        });
    }

    // Explicit generation requests arrive from the selector as seq bumps.
    #[cfg(feature = "hydrate")]
    {
        let last_generate_seq = RwSignal::new(0_u64);
        Effect::new(move || {
            let seq = generate_seq.get();
            if seq == 0 || seq == last_generate_seq.get_untracked() {
                return;
            }
            controller.with_value(|controller| {
                if let Some(controller) = controller
                    && let Some(Action::ImportSchema(text)) =
                        shell.with_untracked(ShellCore::on_generate)
                {
                    controller.load_graphql(&text);
                }
            });
            last_generate_seq.set(seq);
        });
    }

    // Pane visibility changed the available space; let the diagram re-measure.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let visible = editor_visible.get();
        let action = shell.try_update(|s| s.set_editor_visible(visible)).flatten();
        if let Some(action) = action {
            controller.with_value(|controller| {
                if let Some(controller) = controller {
                    apply_action(controller, state, schema_epoch, schema_changed, on_resized, action);
                }
            });
        }
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let flag = read_only.get();
        let action = shell.try_update(|s| s.set_read_only(flag)).flatten();
        if let Some(action) = action {
            controller.with_value(|controller| {
                if let Some(controller) = controller {
                    apply_action(controller, state, schema_epoch, schema_changed, on_resized, action);
                }
            });
        }
    });

    let on_drag_start = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::DragEvent| {
                // The platform requires drag operations to carry transfer
                // data; the payload itself is never read.
                if let Some(transfer) = ev.data_transfer() {
                    let _ = transfer.set_data("id", "dragging");
                }
                shell.update(|s| s.on_drag_start(f64::from(ev.client_x())));
                pane.update(|p| p.resizing = true);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::DragEvent| {}
        }
    };

    let on_drag_over = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::DragEvent| {
                let Some(width) = shell
                    .try_update(|s| s.on_drag_over(f64::from(ev.client_x()), viewport_width()))
                else {
                    return;
                };
                pane.update(|p| p.width = width);
                controller.with_value(|controller| {
                    if let Some(controller) = controller {
                        controller.resize_diagram();
                    }
                });
                if let Some(callback) = on_resized {
                    callback.run(());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::DragEvent| {}
        }
    };

    let on_drag_end = move |_ev: leptos::ev::DragEvent| {
        shell.update(|s| s.on_drag_end());
        pane.update(|p| p.resizing = false);
    };

    let on_drag_leave = move |_ev: leptos::ev::DragEvent| {
        shell.update(|s| s.on_drag_cancel());
        pane.update(|p| p.resizing = false);
    };

    // `dragexit` is not a typed Leptos event; attach it by hand and keep the
    // closure alive for the handle's lifetime. Re-runs when the pane
    // remounts and the handle element is replaced.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let exit_closure = StoredValue::new_local(None::<Closure<dyn FnMut(web_sys::DragEvent)>>);
        Effect::new(move || {
            let Some(handle) = handle_ref.get() else {
                return;
            };
            let cb = Closure::wrap(Box::new(move |_ev: web_sys::DragEvent| {
                shell.update(|s| s.on_drag_cancel());
                pane.update(|p| p.resizing = false);
            }) as Box<dyn FnMut(web_sys::DragEvent)>);
            let _ = handle.add_event_listener_with_callback("dragexit", cb.as_ref().unchecked_ref());
            exit_closure.set_value(Some(cb));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&schema, &on_controller, &on_resized);
    }

    view! {
        <Show when=move || editor_visible.get()>
            <div
                class="graphpane-sidebar"
                style=move || pane.with(|p| pane_width_style(p.width))
            >
                {move || {
                    (!read_only.get()).then(|| {
                        selector_slot.with_value(|slot| {
                            slot(LanguageSelectorProps {
                                generate_visible: generate_visible.into(),
                                on_generate: on_generate.get_value(),
                            })
                        })
                    })
                }}
                <div class="graphpane-code">
                    {move || {
                        let _ = schema_epoch.get();
                        editor_slot.with_value(|slot| {
                            slot(SchemaEditorProps {
                                value: state.with_untracked(|s| s.code.clone()),
                                on_change: on_change.get_value(),
                            })
                        })
                    }}
                </div>
                <div
                    node_ref=handle_ref
                    class="graphpane-resizer"
                    class:drag=move || pane.with(|p| p.resizing)
                    draggable="true"
                    on:dragstart=on_drag_start
                    on:dragover=on_drag_over
                    on:dragend=on_drag_end
                    on:dragleave=on_drag_leave
                ></div>
            </div>
        </Show>
        <div class="graphpane-diagram" node_ref=container_ref></div>
        <Show when=move || state.with(|s| !s.errors.is_empty())>
            <div class="graphpane-errors">{move || state.with(|s| s.errors.clone())}</div>
        </Show>
    }
}

/// Apply one engine action to the controller and host callbacks.
#[cfg(feature = "hydrate")]
fn apply_action(
    controller: &DiagramController,
    state: RwSignal<EditorState>,
    schema_epoch: RwSignal<u64>,
    schema_changed: Option<Callback<String>>,
    on_resized: Option<Callback<()>>,
    action: Action,
) {
    match action {
        Action::NotifySchemaChanged(code) => {
            state.update(|s| s.code.clone_from(&code));
            if let Some(callback) = schema_changed {
                callback.run(code);
            }
        }
        Action::ImportSchema(text) => controller.load_graphql(&text),
        Action::ResizeDiagram => {
            controller.resize_diagram();
            if let Some(callback) = on_resized {
                callback.run(());
            }
        }
        Action::RefreshEditor => schema_epoch.update(|epoch| *epoch += 1),
        Action::SetReadOnly(read_only) => controller.set_read_only(read_only),
    }
}
