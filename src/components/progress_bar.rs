// src/components/progress_bar.rs
use crate::progress::{Progress, ProgressPhase};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub progress: Progress,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let progress = props.progress;
    if !progress.is_visible() {
        return html! {};
    }

    let class = match progress.phase() {
        ProgressPhase::Complete => "progress complete",
        _ => "progress",
    };

    html! {
        <div class={class}>
            <div
                class="progress-bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={progress.percent().to_string()}
                style={format!("width: {:.1}%;", progress.value())}
            ></div>
            <span class="loader-label">{format!("Loading… {}%", progress.percent())}</span>
        </div>
    }
}
