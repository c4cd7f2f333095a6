//! Reads container and viewport geometry out of the live DOM.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use kineto_interact_core::{ContainerRect, Geometry, Point};

/// Captures the geometry the dispatcher needs for one event.
pub fn snapshot(window: &Window, container: &Element) -> Geometry {
    let rect = container.get_bounding_client_rect();
    let container_rect = ContainerRect::new(rect.top() as f32, rect.height() as f32);
    Geometry::new(container_rect, viewport_height(window)).with_origin(cumulative_offset(container))
}

fn viewport_height(window: &Window) -> f32 {
    let inner = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    if inner > 0.0 {
        return inner as f32;
    }
    window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| root.client_height() as f32)
        .unwrap_or(0.0)
}

/// Walks the offset-parent chain to express the container's top-left corner
/// in page coordinates, the space mouse events report in.
fn cumulative_offset(element: &Element) -> Point {
    let mut x = 0.0f32;
    let mut y = 0.0f32;
    let mut current = element.clone().dyn_into::<HtmlElement>().ok();
    while let Some(node) = current {
        x += node.offset_left() as f32;
        y += node.offset_top() as f32;
        current = node
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    Point::new(x, y)
}
