//! One-frame scheduling helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mount-time work must wait one rendering frame so layout-affecting styling
//! has settled before the DOM is measured. The scheduled callback is
//! fire-and-forget with no cancellation path; callers re-check that their
//! targets still exist when it runs.

/// Run `callback` on the next animation frame.
///
/// Falls back to running the callback directly when no window is available
/// or scheduling fails.
#[cfg(feature = "hydrate")]
pub fn on_next_frame(callback: impl FnOnce() + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        callback();
        return;
    };

    let pending = Rc::new(RefCell::new(Some(callback)));
    let pending_for_cb = Rc::clone(&pending);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(callback) = pending_for_cb.borrow_mut().take() {
            callback();
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else if let Some(callback) = pending.borrow_mut().take() {
        callback();
    }
}

/// Outside the browser there is no frame to wait for; run directly.
#[cfg(not(feature = "hydrate"))]
pub fn on_next_frame(callback: impl FnOnce() + 'static) {
    callback();
}
