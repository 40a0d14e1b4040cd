// src/components/viewer.rs
use crate::catalog::Resolved;
use crate::components::error_panel::ErrorPanel;
use crate::components::progress_bar::ProgressBar;
use crate::error::ViewerError;
use crate::loader::{Effect, ErrorPresenter, FrameLoader, LoadState};
use crate::progress::{Progress, FINISH_HOLD_MS, TICK_MS};
use gloo::timers::callback::{Interval, Timeout};
use web_sys::Event;
use yew::prelude::*;

/// Outcome of turning the page's query into a frame source.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Pending,
    Ready(Resolved),
    Failed(ViewerError),
}

#[derive(Properties, PartialEq)]
pub struct ViewerProps {
    pub resolution: Resolution,
}

pub enum ViewerMsg {
    FrameLoaded,
    FrameFailed(String),
    Tick,
    HideProgress,
}

pub struct Viewer {
    loader: FrameLoader,
    presenter: ErrorPresenter,
    progress: Progress,
    // Dropping either handle cancels the underlying timer.
    ticker: Option<Interval>,
    hold: Option<Timeout>,
}

impl Component for Viewer {
    type Message = ViewerMsg;
    type Properties = ViewerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut viewer = Self {
            loader: FrameLoader::new(),
            presenter: ErrorPresenter::default(),
            progress: Progress::default(),
            ticker: None,
            hold: None,
        };
        viewer.apply(ctx, &ctx.props().resolution);
        viewer
    }

    fn changed(&mut self, ctx: &Context<Self>, old: &Self::Properties) -> bool {
        if ctx.props().resolution == old.resolution {
            return false;
        }
        self.apply(ctx, &ctx.props().resolution);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ViewerMsg::FrameLoaded => {
                let effects = self.loader.frame_loaded();
                let changed = !effects.is_empty();
                self.run(ctx, effects);
                changed
            }
            ViewerMsg::FrameFailed(reason) => {
                let effects = self.loader.fail(ViewerError::FrameLoadFailure(reason));
                let changed = !effects.is_empty();
                self.run(ctx, effects);
                changed
            }
            ViewerMsg::Tick => {
                self.progress.tick();
                true
            }
            ViewerMsg::HideProgress => {
                self.hold = None;
                self.progress.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.presenter.error_visible {
            let error = match self.loader.state() {
                LoadState::Failed(e) => Some(e.clone()),
                _ => None,
            };
            return html! { <ErrorPanel {error} /> };
        }

        let frame = match (self.presenter.frame_mounted, self.loader.src()) {
            (true, Some(src)) => {
                let onload = ctx.link().callback(|_: Event| ViewerMsg::FrameLoaded);
                let onerror = ctx
                    .link()
                    .callback(|e: Event| ViewerMsg::FrameFailed(e.type_()));
                html! {
                    <iframe
                        class="project-frame"
                        src={src.to_string()}
                        title="Project"
                        {onload}
                        {onerror}
                    />
                }
            }
            _ => html! {},
        };

        html! {
            <div class="viewer">
                <ProgressBar progress={self.progress} />
                { frame }
            </div>
        }
    }
}

impl Viewer {
    fn apply(&mut self, ctx: &Context<Self>, resolution: &Resolution) {
        let effects = match resolution {
            // A fresh request: drop whatever the previous one left behind.
            Resolution::Pending => {
                self.loader.reset();
                self.presenter = ErrorPresenter::default();
                vec![Effect::CancelProgress]
            }
            Resolution::Ready(resolved) => self.loader.request(resolved.src.clone()),
            Resolution::Failed(error) => self.loader.fail(error.clone()),
        };
        self.run(ctx, effects);
    }

    fn run(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                // The frame renders straight from the loader's state.
                Effect::SetSource(_) => {}
                Effect::StartProgress => self.start_progress(ctx),
                Effect::FinishProgress => self.finish_progress(ctx),
                Effect::CancelProgress => {
                    self.ticker = None;
                    self.hold = None;
                    self.progress.reset();
                }
                Effect::ShowError => {
                    self.presenter.show();
                }
            }
        }
    }

    fn start_progress(&mut self, ctx: &Context<Self>) {
        self.ticker = None;
        self.hold = None;
        self.progress.start();

        let link = ctx.link().clone();
        self.ticker = Some(Interval::new(TICK_MS, move || {
            link.send_message(ViewerMsg::Tick);
        }));
    }

    fn finish_progress(&mut self, ctx: &Context<Self>) {
        self.ticker = None;
        self.progress.finish();

        let link = ctx.link().clone();
        self.hold = Some(Timeout::new(FINISH_HOLD_MS, move || {
            link.send_message(ViewerMsg::HideProgress);
        }));
    }
}
