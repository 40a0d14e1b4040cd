// src/intent.rs
//
// Query-string handling: what the page was asked to show, and whether it is
// allowed to show it here or must bounce to the wrapping gallery first.

use crate::error::ViewerError;
use regex::Regex;
use std::sync::LazyLock;
use url::form_urlencoded;

pub const RENDER_MODE_PARAM: &str = "render-mode";
pub const PROJECT_ID_PARAM: &str = "project-id";
pub const PROJECT_NAME_PARAM: &str = "project-name";
pub const FULLSCREEN: &str = "fullscreen";

/// Relative location of the gallery page that wraps the viewer.
const PARENT_PATH: &str = "../";

static PROJECT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("static pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    Fullscreen,
    Other(String),
}

impl RenderMode {
    fn parse(value: &str) -> Self {
        if value == FULLSCREEN {
            RenderMode::Fullscreen
        } else {
            RenderMode::Other(value.to_string())
        }
    }
}

/// A validated reference to a single project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSelector {
    Id(u32),
    Name(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerIntent {
    pub render_mode: Option<RenderMode>,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
}

impl ViewerIntent {
    /// Parse a query string (with or without the leading `?`).
    ///
    /// Never fails: unknown keys are ignored, missing or blank values come
    /// back as `None`, and for repeated keys the first occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut intent = ViewerIntent::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                RENDER_MODE_PARAM if intent.render_mode.is_none() => {
                    intent.render_mode = Some(RenderMode::parse(value));
                }
                PROJECT_ID_PARAM if intent.project_id.is_none() => {
                    intent.project_id = Some(value.to_string());
                }
                PROJECT_NAME_PARAM if intent.project_name.is_none() => {
                    intent.project_name = Some(value.to_string());
                }
                _ => {}
            }
        }

        intent
    }

    pub fn is_fullscreen(&self) -> bool {
        matches!(self.render_mode, Some(RenderMode::Fullscreen))
    }

    /// Where to send the browser when the page was opened outside fullscreen
    /// mode. Only the project reference survives the trip.
    pub fn redirect_target(&self) -> Option<String> {
        if self.is_fullscreen() {
            return None;
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(id) = &self.project_id {
            query.append_pair(PROJECT_ID_PARAM, id);
        } else if let Some(name) = &self.project_name {
            query.append_pair(PROJECT_NAME_PARAM, name);
        }
        query.append_pair(RENDER_MODE_PARAM, FULLSCREEN);

        Some(format!("{}?{}", PARENT_PATH, query.finish()))
    }

    /// Pick the one reference that drives resolution. The id wins when both
    /// are present.
    pub fn selector(&self) -> Result<ProjectSelector, ViewerError> {
        if let Some(raw) = &self.project_id {
            return parse_project_id(raw).map(ProjectSelector::Id);
        }
        if let Some(name) = &self.project_name {
            return validate_project_name(name).map(|n| ProjectSelector::Name(n.to_string()));
        }
        Err(ViewerError::MissingProject)
    }
}

pub fn parse_project_id(raw: &str) -> Result<u32, ViewerError> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ViewerError::InvalidProjectId(raw.to_string())),
    }
}

/// Names end up as a path segment, so anything outside the allow-list is
/// rejected before a path is ever built from it.
pub fn validate_project_name(name: &str) -> Result<&str, ViewerError> {
    if PROJECT_NAME_RE.is_match(name) {
        Ok(name)
    } else {
        Err(ViewerError::InvalidProjectName(name.to_string()))
    }
}

/// Query string of the canonical fullscreen deep link for a project.
pub fn deep_link_query(selector: &ProjectSelector) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    match selector {
        ProjectSelector::Id(id) => query.append_pair(PROJECT_ID_PARAM, &id.to_string()),
        ProjectSelector::Name(name) => query.append_pair(PROJECT_NAME_PARAM, name),
    };
    query.append_pair(RENDER_MODE_PARAM, FULLSCREEN);
    query.finish()
}

/// Replace the current history entry with the fullscreen address, if needed.
/// Returns `true` when the browser is navigating away and nothing else
/// should be rendered.
pub fn enforce_fullscreen(intent: &ViewerIntent) -> bool {
    let Some(target) = intent.redirect_target() else {
        return false;
    };

    log::info!("Not in fullscreen mode, redirecting to {}", target);
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.location().replace(&target) {
                log::error!("Redirect to {} failed: {:?}", target, e);
            }
        }
        None => log::error!("No window available for redirect"),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let intent =
            ViewerIntent::from_query("?render-mode=fullscreen&project-id=3&project-name=tide");
        assert!(intent.is_fullscreen());
        assert_eq!(intent.project_id.as_deref(), Some("3"));
        assert_eq!(intent.project_name.as_deref(), Some("tide"));
    }

    #[test]
    fn test_parse_empty_query() {
        assert_eq!(ViewerIntent::from_query(""), ViewerIntent::default());
        assert_eq!(ViewerIntent::from_query("?"), ViewerIntent::default());
    }

    #[test]
    fn test_project_name_is_trimmed() {
        let intent = ViewerIntent::from_query("project-name=%20%20tide-pool%20");
        assert_eq!(intent.project_name.as_deref(), Some("tide-pool"));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let intent = ViewerIntent::from_query("project-id=&project-name=+++");
        assert_eq!(intent.project_id, None);
        assert_eq!(intent.project_name, None);
    }

    #[test]
    fn test_render_mode_must_be_literal_fullscreen() {
        let intent = ViewerIntent::from_query("render-mode=FULLSCREEN");
        assert!(!intent.is_fullscreen());
        assert_eq!(
            intent.render_mode,
            Some(RenderMode::Other("FULLSCREEN".to_string()))
        );
    }

    #[test]
    fn test_redirect_without_render_mode() {
        let intent = ViewerIntent::from_query("project-id=3");
        assert_eq!(
            intent.redirect_target().as_deref(),
            Some("../?project-id=3&render-mode=fullscreen")
        );
    }

    #[test]
    fn test_redirect_with_other_render_mode_drops_extra_params() {
        let intent = ViewerIntent::from_query("render-mode=embedded&project-id=3&theme=dark");
        assert_eq!(
            intent.redirect_target().as_deref(),
            Some("../?project-id=3&render-mode=fullscreen")
        );
    }

    #[test]
    fn test_redirect_keeps_name_when_no_id() {
        let intent = ViewerIntent::from_query("project-name=tide");
        assert_eq!(
            intent.redirect_target().as_deref(),
            Some("../?project-name=tide&render-mode=fullscreen")
        );
    }

    #[test]
    fn test_no_redirect_in_fullscreen() {
        let intent = ViewerIntent::from_query("project-id=3&render-mode=fullscreen");
        assert_eq!(intent.redirect_target(), None);
    }

    #[test]
    fn test_id_takes_precedence() {
        let intent = ViewerIntent::from_query("project-id=7&project-name=tide");
        assert_eq!(intent.selector(), Ok(ProjectSelector::Id(7)));
    }

    #[test]
    fn test_invalid_ids() {
        for raw in ["0", "-2", "abc", "3.5", "99999999999"] {
            let intent = ViewerIntent::from_query(&format!("project-id={}", raw));
            assert!(
                matches!(intent.selector(), Err(ViewerError::InvalidProjectId(_))),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_invalid_id_does_not_fall_back_to_name() {
        let intent = ViewerIntent::from_query("project-id=zero&project-name=tide");
        assert!(matches!(
            intent.selector(),
            Err(ViewerError::InvalidProjectId(_))
        ));
    }

    #[test]
    fn test_name_allow_list() {
        assert!(validate_project_name("tide_pool-2").is_ok());
        for bad in ["../etc", "a/b", "tide.html", "tide pool", "%2e%2e", "ñ"] {
            assert_eq!(
                validate_project_name(bad),
                Err(ViewerError::InvalidProjectName(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_traversal_name_rejected_after_decoding() {
        let intent = ViewerIntent::from_query("project-name=..%2F..%2Fsecret");
        assert_eq!(
            intent.selector(),
            Err(ViewerError::InvalidProjectName("../../secret".to_string()))
        );
    }

    #[test]
    fn test_deep_link_query() {
        assert_eq!(
            deep_link_query(&ProjectSelector::Id(3)),
            "project-id=3&render-mode=fullscreen"
        );
        assert_eq!(
            deep_link_query(&ProjectSelector::Name("tide".to_string())),
            "project-name=tide&render-mode=fullscreen"
        );
    }

    #[test]
    fn test_missing_project() {
        let intent = ViewerIntent::from_query("render-mode=fullscreen");
        assert_eq!(intent.selector(), Err(ViewerError::MissingProject));
    }
}
