//! Internal DOM focus and geometry helpers for stateful components.

use wasm_bindgen::JsCast;

/// Focuses an element by id and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

/// Whether the event originated inside `container`.
pub(crate) fn event_within(ev: &web_sys::Event, container: &web_sys::Node) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// Left edge and width of the element with `id`, in viewport pixels.
pub(crate) fn horizontal_bounds(id: &str) -> Option<(f64, f64)> {
    let rect = web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .get_bounding_client_rect();
    Some((rect.left(), rect.width()))
}
