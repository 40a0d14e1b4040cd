// src/main.rs
mod catalog;
mod components;
mod config;
mod error;
mod gesture;
mod intent;
mod loader;
mod preferences;
mod progress;

use catalog::{load_catalog, Catalog, ProjectRecord};
use components::action_sheet::ActionSheet;
use components::tooltip::TooltipLayer;
use components::viewer::{Resolution, Viewer};
use config::ViewerConfig;
use error::ViewerError;
use intent::{deep_link_query, enforce_fullscreen, ProjectSelector, ViewerIntent};
use yew::prelude::*;

pub enum AppMsg {
    CatalogLoaded(Catalog),
    CatalogLoadFailed(ViewerError),
    ToggleSheet,
    CloseSheet,
}

pub struct App {
    config: ViewerConfig,
    selector: Option<ProjectSelector>,
    redirecting: bool,
    resolution: Resolution,
    record: Option<ProjectRecord>,
    sheet_open: bool,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ViewerConfig::default();
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let intent = ViewerIntent::from_query(&query);

        let mut app = Self {
            config,
            selector: None,
            redirecting: false,
            resolution: Resolution::Pending,
            record: None,
            sheet_open: false,
        };

        if enforce_fullscreen(&intent) {
            app.redirecting = true;
            return app;
        }

        match intent.selector() {
            Ok(selector) => {
                app.selector = Some(selector);
                let url = app.config.catalog_url();
                ctx.link().send_future(async move {
                    match load_catalog(&url).await {
                        Ok(catalog) => AppMsg::CatalogLoaded(catalog),
                        Err(e) => AppMsg::CatalogLoadFailed(e),
                    }
                });
            }
            Err(e) => {
                log::warn!("Rejected viewer request: {}", e);
                app.resolution = Resolution::Failed(e);
            }
        }

        app
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::CatalogLoaded(catalog) => {
                let Some(selector) = &self.selector else {
                    return false;
                };
                match catalog.resolve(selector, &self.config) {
                    Ok(resolved) => {
                        self.record = resolved.record.clone();
                        if let Some(record) = &self.record {
                            gloo_utils::document().set_title(&record.title);
                        }
                        self.resolution = Resolution::Ready(resolved);
                    }
                    Err(e) => self.resolution = Resolution::Failed(e),
                }
                true
            }
            AppMsg::CatalogLoadFailed(error) => {
                self.resolution = Resolution::Failed(error);
                true
            }
            AppMsg::ToggleSheet => {
                self.sheet_open = !self.sheet_open;
                true
            }
            AppMsg::CloseSheet => {
                let changed = self.sheet_open;
                self.sheet_open = false;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.redirecting {
            return html! {};
        }

        let on_toggle = ctx.link().callback(|_: MouseEvent| AppMsg::ToggleSheet);
        let on_close = ctx.link().callback(|_: ()| AppMsg::CloseSheet);
        let show_actions = matches!(self.resolution, Resolution::Ready(_));

        html! {
            <div class="viewer-shell">
                <Viewer resolution={self.resolution.clone()} />

                if show_actions {
                    <button
                        class="sheet-toggle"
                        onclick={on_toggle}
                        aria-label="Project actions"
                        data-tooltip="Share & info"
                    >
                        {"⋯"}
                    </button>
                }

                <ActionSheet
                    open={self.sheet_open}
                    record={self.record.clone()}
                    share_url={self.share_url()}
                    {on_close}
                />
                <TooltipLayer />
            </div>
        }
    }
}

impl App {
    /// Absolute fullscreen link to the current project.
    fn share_url(&self) -> Option<String> {
        let selector = self.selector.as_ref()?;
        let location = web_sys::window()?.location();
        let origin = location.origin().ok()?;
        let pathname = location.pathname().ok()?;
        Some(format!(
            "{}{}?{}",
            origin,
            pathname,
            deep_link_query(selector)
        ))
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
