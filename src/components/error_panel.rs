// src/components/error_panel.rs
use crate::error::ViewerError;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub error: Option<ViewerError>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let message = match &props.error {
        Some(ViewerError::ProjectNotFound(_)) | Some(ViewerError::MissingProject) => {
            "This project could not be found."
        }
        Some(ViewerError::FrameLoadFailure(_)) => "This project failed to load.",
        _ => "Something went wrong while opening this project.",
    };

    html! {
        <div class="error-panel" role="alert">
            <h2>{"Unable to show project"}</h2>
            <p>{message}</p>
            <a class="error-back" href="../">{"Back to the gallery"}</a>
        </div>
    }
}
