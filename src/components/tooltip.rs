// src/components/tooltip.rs
use gloo_events::EventListener;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, Node};
use yew::prelude::*;

pub const TOOLTIP_ATTR: &str = "data-tooltip";
/// Minimum distance kept between the label and either viewport edge.
pub const VIEWPORT_MARGIN: f64 = 8.0;
/// Vertical gap between the anchor's bottom edge and the label.
pub const ANCHOR_GAP: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
}

/// Centre the label under the anchor, then pull it back inside the viewport.
pub fn place_below(anchor: AnchorRect, label_width: f64, viewport_width: f64) -> (f64, f64) {
    let centred = anchor.left + anchor.width / 2.0 - label_width / 2.0;
    let max_left = (viewport_width - label_width - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    let left = centred.clamp(VIEWPORT_MARGIN, max_left);
    (left, anchor.bottom + ANCHOR_GAP)
}

fn tooltip_anchor(event: &web_sys::Event) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(&format!("[{}]", TOOLTIP_ATTR))
        .ok()
        .flatten()
}

fn hide(label: &NodeRef) {
    if let Some(label) = label.cast::<HtmlElement>() {
        label.set_class_name("tooltip");
    }
}

fn show(label: &NodeRef, anchor: &Element) {
    let Some(label) = label.cast::<HtmlElement>() else {
        return;
    };
    let text = anchor.get_attribute(TOOLTIP_ATTR).unwrap_or_default();
    label.set_text_content(Some(&text));
    label.set_class_name("tooltip visible");

    let rect = anchor.get_bounding_client_rect();
    let viewport_width = document()
        .document_element()
        .map(|e| e.client_width() as f64)
        .unwrap_or(0.0);
    let (left, top) = place_below(
        AnchorRect {
            left: rect.left(),
            bottom: rect.bottom(),
            width: rect.width(),
        },
        label.offset_width() as f64,
        viewport_width,
    );

    let style = label.style();
    let _ = style.set_property("left", &format!("{}px", left));
    let _ = style.set_property("top", &format!("{}px", top));
}

/// One shared floating label for every element carrying `data-tooltip`.
#[function_component(TooltipLayer)]
pub fn tooltip_layer() -> Html {
    let label_ref = use_node_ref();

    {
        let label_ref = label_ref.clone();
        use_effect_with((), move |_| {
            let over_label = label_ref.clone();
            let over = EventListener::new(&document(), "mouseover", move |event| {
                if let Some(anchor) = tooltip_anchor(event) {
                    show(&over_label, &anchor);
                }
            });

            let out_label = label_ref.clone();
            let out = EventListener::new(&document(), "mouseout", move |event| {
                let Some(anchor) = tooltip_anchor(event) else {
                    return;
                };
                // Moving between children of the same anchor is not a leave.
                let related = event
                    .dyn_ref::<MouseEvent>()
                    .and_then(|e| e.related_target())
                    .and_then(|t| t.dyn_into::<Node>().ok());
                if !anchor.contains(related.as_ref()) {
                    hide(&out_label);
                }
            });

            let down_label = label_ref.clone();
            let down = EventListener::new(&document(), "pointerdown", move |_| {
                hide(&down_label);
            });

            move || {
                drop(over);
                drop(out);
                drop(down);
            }
        });
    }

    html! {
        <div ref={label_ref} class="tooltip" role="tooltip" aria-hidden="true"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(left: f64, width: f64) -> AnchorRect {
        AnchorRect {
            left,
            bottom: 40.0,
            width,
        }
    }

    #[test]
    fn test_centred_below_anchor() {
        let (left, top) = place_below(anchor(100.0, 40.0), 60.0, 1000.0);
        assert_eq!(left, 90.0);
        assert_eq!(top, 48.0);
    }

    #[test]
    fn test_clamped_at_left_edge() {
        let (left, _) = place_below(anchor(0.0, 10.0), 120.0, 1000.0);
        assert_eq!(left, VIEWPORT_MARGIN);
    }

    #[test]
    fn test_clamped_at_right_edge() {
        let (left, _) = place_below(anchor(980.0, 20.0), 120.0, 1000.0);
        assert_eq!(left, 1000.0 - 120.0 - VIEWPORT_MARGIN);
    }

    #[test]
    fn test_label_wider_than_viewport() {
        let (left, _) = place_below(anchor(50.0, 20.0), 400.0, 300.0);
        assert_eq!(left, VIEWPORT_MARGIN);
    }
}
