// src/components/action_sheet.rs
use crate::catalog::ProjectRecord;
use crate::gesture::{SwipeOutcome, SwipeTracker};
use crate::preferences::{mark_swipe_hint_seen, swipe_hint_seen};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::utils::document;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlElement, KeyboardEvent, TouchEvent};
use yew::prelude::*;

/// How long the "Copied" acknowledgement stays up.
pub const COPY_ACK_MS: u32 = 1600;
/// Matches the sheet's CSS transform transition.
pub const SHEET_ANIMATION_MS: u32 = 220;

#[derive(Properties, PartialEq)]
pub struct ActionSheetProps {
    pub open: bool,
    pub record: Option<ProjectRecord>,
    pub share_url: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component(ActionSheet)]
pub fn action_sheet(props: &ActionSheetProps) -> Html {
    let copied = use_state(|| false);
    let revert_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let close_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // DRAG STATE
    let tracker = use_mut_ref(SwipeTracker::default);
    let drag_offset = use_state(|| None::<f64>);
    let closing = use_state(|| false);
    let show_hint = use_state(|| false);

    let sheet_body_ref = use_node_ref();

    // ------ FIRST-OPEN HINT ------
    {
        let show_hint = show_hint.clone();
        use_effect_with(props.open, move |open| {
            if *open && !swipe_hint_seen() {
                show_hint.set(true);
                mark_swipe_hint_seen();
            }
        });
    }

    // ------ ESCAPE TO CLOSE ------
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.open, move |open| {
            let listener = open.then(|| {
                EventListener::new(&document(), "keydown", move |event| {
                    let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if keyboard_event.key() == "Escape" {
                        on_close.emit(());
                    }
                })
            });

            || drop(listener)
        });
    }

    // ------ COPY LINK ------
    let on_copy = {
        let copied = copied.clone();
        let revert_timer = revert_timer.clone();
        let share_url = props.share_url.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(url) = share_url.clone() else {
                return;
            };
            let Some(win) = web_sys::window() else {
                return;
            };
            revert_timer.borrow_mut().take();

            let promise = win.navigator().clipboard().write_text(&url);
            let copied = copied.clone();
            let revert_timer = revert_timer.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        copied.set(true);
                        let copied = copied.clone();
                        *revert_timer.borrow_mut() =
                            Some(Timeout::new(COPY_ACK_MS, move || copied.set(false)));
                    }
                    Err(e) => log::warn!("Clipboard write failed: {:?}", e),
                }
            });
        })
    };

    // ------ DRAG START ------
    let ontouchstart = {
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        let sheet_body_ref = sheet_body_ref.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.touches().item(0) else {
                return;
            };
            let scroll_top = sheet_body_ref
                .cast::<HtmlElement>()
                .map(|el| el.scroll_top() as f64)
                .unwrap_or(0.0);
            if tracker
                .borrow_mut()
                .begin(touch.client_y() as f64, js_sys::Date::now(), scroll_top)
            {
                drag_offset.set(Some(0.0));
            }
        })
    };

    // ------ DRAG MOVE ------
    let ontouchmove = {
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.touches().item(0) else {
                return;
            };
            if let Some(offset) = tracker.borrow().move_to(touch.client_y() as f64) {
                drag_offset.set(Some(offset));
            }
        })
    };

    // ------ DRAG END ------
    let ontouchend = {
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        let closing = closing.clone();
        let close_timer = close_timer.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.changed_touches().item(0) else {
                tracker.borrow_mut().cancel();
                drag_offset.set(None);
                return;
            };
            let outcome = tracker
                .borrow_mut()
                .end(touch.client_y() as f64, js_sys::Date::now());
            drag_offset.set(None);

            if outcome == Some(SwipeOutcome::Dismiss) {
                closing.set(true);
                let closing = closing.clone();
                let on_close = on_close.clone();
                *close_timer.borrow_mut() = Some(Timeout::new(SHEET_ANIMATION_MS, move || {
                    closing.set(false);
                    on_close.emit(());
                }));
            }
        })
    };

    let ontouchcancel = {
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        Callback::from(move |_: TouchEvent| {
            tracker.borrow_mut().cancel();
            drag_offset.set(None);
        })
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let sheet_style = if *closing {
        format!(
            "transform: translateY(100%); transition: transform {}ms ease-in;",
            SHEET_ANIMATION_MS
        )
    } else if let Some(offset) = *drag_offset {
        format!("transform: translateY({}px); transition: none;", offset)
    } else {
        String::new()
    };

    let (title, description) = match &props.record {
        Some(record) => (record.title.clone(), record.description.clone()),
        None => ("Project".to_string(), String::new()),
    };

    html! {
        <div class={classes!("action-modal", props.open.then_some("open"))} aria-hidden={(!props.open).to_string()}>
            <div class="action-backdrop" onclick={on_backdrop}></div>
            <div
                class="action-sheet"
                role="dialog"
                style={sheet_style}
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
                {ontouchcancel}
            >
                <div class="sheet-handle"></div>
                <div class="sheet-body" ref={sheet_body_ref}>
                    <h2>{title}</h2>
                    if !description.is_empty() {
                        <p class="sheet-description">{description}</p>
                    }
                    <button
                        class={classes!("copy-link", (*copied).then_some("copied"))}
                        onclick={on_copy}
                        disabled={props.share_url.is_none()}
                    >
                        { if *copied { "Copied" } else { "Copy link" } }
                    </button>
                    if *show_hint {
                        <p class="sheet-hint">{"Swipe down to close"}</p>
                    }
                </div>
            </div>
        </div>
    }
}
