// src/loader.rs
use crate::error::ViewerError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Requested { src: String },
    Loaded { src: String },
    Failed(ViewerError),
}

/// Side effects the view has to carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetSource(String),
    StartProgress,
    FinishProgress,
    CancelProgress,
    ShowError,
}

/// Frame loading state machine.
///
/// `Idle -> Requested -> (Loaded | Failed)`. Only one load is live at a time:
/// a new request supersedes the previous one, and a frame `load` event only
/// counts while a source assignment is outstanding. Once failed, everything
/// is ignored until `reset`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLoader {
    state: LoadState,
    // Set when a source is assigned, cleared by the load it was waiting for.
    // Keeps the initial about:blank load from counting.
    awaiting_real_load: bool,
}

impl Default for FrameLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoader {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            awaiting_real_load: false,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, LoadState::Failed(_))
    }

    /// Current frame source, if one has been assigned and not torn down.
    pub fn src(&self) -> Option<&str> {
        match &self.state {
            LoadState::Requested { src } | LoadState::Loaded { src } => Some(src),
            _ => None,
        }
    }

    pub fn request(&mut self, src: String) -> Vec<Effect> {
        if self.is_failed() {
            log::warn!("Ignoring request for {} after failure", src);
            return Vec::new();
        }

        log::info!("Loading project frame: {}", src);
        self.awaiting_real_load = true;
        self.state = LoadState::Requested { src: src.clone() };
        vec![Effect::SetSource(src), Effect::StartProgress]
    }

    pub fn frame_loaded(&mut self) -> Vec<Effect> {
        let src = match &self.state {
            LoadState::Requested { src } if self.awaiting_real_load => src.clone(),
            _ => {
                log::debug!("Ignoring stray frame load event in {:?}", self.state);
                return Vec::new();
            }
        };

        self.awaiting_real_load = false;
        self.state = LoadState::Loaded { src };
        vec![Effect::FinishProgress]
    }

    pub fn fail(&mut self, error: ViewerError) -> Vec<Effect> {
        if let LoadState::Failed(first) = &self.state {
            log::warn!("Already failed with {}; ignoring {}", first, error);
            return Vec::new();
        }

        log::error!("Viewer failed: {}", error);
        self.awaiting_real_load = false;
        self.state = LoadState::Failed(error);
        vec![Effect::CancelProgress, Effect::ShowError]
    }

    /// Start over, as on a fresh navigation.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Visible state of the error panel and the project frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPresenter {
    pub error_visible: bool,
    pub frame_mounted: bool,
}

impl Default for ErrorPresenter {
    fn default() -> Self {
        Self {
            error_visible: false,
            frame_mounted: true,
        }
    }
}

impl ErrorPresenter {
    /// Reveal the error panel and drop the frame. Safe to call repeatedly;
    /// returns whether anything changed.
    pub fn show(&mut self) -> bool {
        let changed = !self.error_visible || self.frame_mounted;
        self.error_visible = true;
        self.frame_mounted = false;
        changed
    }
}
