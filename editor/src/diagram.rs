//! Binding to the external diagram engine.
//!
//! The diagram controller is a JavaScript collaborator supplied by the host
//! page as a global `DiagramController` class. The hosting shell owns a
//! single instance for its whole lifetime: it attaches the instance to a
//! mount element exactly once, registers the outbound callbacks, and drives
//! imports and re-layouts through the methods below. The controller calls
//! back asynchronously from its own editing operations, so the registered
//! closures must stay alive for as long as the instance can fire them —
//! [`DiagramCallbacks`] is that owner.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
    /// External diagram engine instance.
    pub type DiagramController;

    #[wasm_bindgen(constructor)]
    pub fn new() -> DiagramController;

    /// Attach the diagram's rendering surface to a host element.
    #[wasm_bindgen(method, js_name = setDOMElement)]
    pub fn set_dom_element(this: &DiagramController, element: &web_sys::HtmlElement);

    /// Register the callback receiving `(schema, stitches?)` pushes.
    #[wasm_bindgen(method, js_name = setPassSchema)]
    pub fn set_pass_schema(this: &DiagramController, callback: &js_sys::Function);

    /// Register the callback receiving import/parse error messages.
    #[wasm_bindgen(method, js_name = setPassDiagramErrors)]
    pub fn set_pass_diagram_errors(this: &DiagramController, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = setReadOnly)]
    pub fn set_read_only(this: &DiagramController, read_only: bool);

    /// Import schema text and rebuild the diagram from it.
    #[wasm_bindgen(method, js_name = loadGraphQL)]
    pub fn load_graphql(this: &DiagramController, schema: &str);

    /// Re-measure and re-layout the diagram after the available space changed.
    #[wasm_bindgen(method, js_name = resizeDiagram)]
    pub fn resize_diagram(this: &DiagramController);
}

/// Keeps the controller-facing closures alive after registration.
///
/// Dropping this before the controller is done firing would detach the
/// callbacks mid-flight, so the hosting shell stores it next to the
/// controller handle.
pub struct DiagramCallbacks {
    _schema: Closure<dyn FnMut(String, JsValue)>,
    _errors: Closure<dyn FnMut(String)>,
}

impl DiagramCallbacks {
    /// Wrap the two handlers and register them on `controller`.
    ///
    /// The schema handler receives the pushed text plus the optional
    /// stitches fragment (a string or `undefined` on the JS side).
    pub fn register(
        controller: &DiagramController,
        on_schema: impl FnMut(String, JsValue) + 'static,
        on_errors: impl FnMut(String) + 'static,
    ) -> Self {
        let schema = Closure::wrap(Box::new(on_schema) as Box<dyn FnMut(String, JsValue)>);
        let errors = Closure::wrap(Box::new(on_errors) as Box<dyn FnMut(String)>);
        controller.set_pass_schema(schema.as_ref().unchecked_ref());
        controller.set_pass_diagram_errors(errors.as_ref().unchecked_ref());
        Self { _schema: schema, _errors: errors }
    }
}
