// src/config.rs
use web_sys::window;

/// Deployment-level settings for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Where the project catalog is fetched from, relative to the viewer page.
    pub catalog_path: String,
    /// Prefix prepended to every resolved project path when it is framed.
    pub frame_base: String,
    /// Directory holding name-addressed projects, relative to `frame_base`.
    pub works_dir: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            catalog_path: "public/catalog.json".to_string(),
            frame_base: "../".to_string(),
            works_dir: "works".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Get the base URL for the application: the directory the viewer page
    /// is served from, so it works wherever the gallery puts it.
    pub fn base_url(&self) -> String {
        let pathname = window().and_then(|w| w.location().pathname().ok());
        base_for_pathname(pathname.as_deref())
    }

    /// Build a resource URL with the correct base path
    pub fn resource_url(&self, path: &str) -> String {
        join_base(&self.base_url(), path)
    }

    pub fn catalog_url(&self) -> String {
        self.resource_url(&self.catalog_path)
    }
}

/// Directory part of a page path, without the trailing slash.
/// `/viewer/` and `/viewer/index.html` both give `/viewer`.
fn base_for_pathname(pathname: Option<&str>) -> String {
    match pathname.and_then(|path| path.rsplit_once('/')) {
        Some((dir, _)) => dir.to_string(),
        None => String::new(),
    }
}

fn join_base(base: &str, path: &str) -> String {
    let clean_path = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{}", clean_path)
    } else {
        format!("{}/{}", base, clean_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_detection() {
        assert_eq!(base_for_pathname(Some("/viewer/")), "/viewer");
        assert_eq!(base_for_pathname(Some("/viewer/index.html")), "/viewer");
        assert_eq!(base_for_pathname(Some("/site/portfolio/viewer/")), "/site/portfolio/viewer");
        assert_eq!(base_for_pathname(Some("/")), "");
        assert_eq!(base_for_pathname(Some("/index.html")), "");
        assert_eq!(base_for_pathname(None), "");
    }

    #[test]
    fn test_catalog_next_to_viewer_page() {
        let config = ViewerConfig::default();
        let base = base_for_pathname(Some("/viewer/"));
        assert_eq!(
            join_base(&base, &config.catalog_path),
            "/viewer/public/catalog.json"
        );
    }

    #[test]
    fn test_resource_url_formatting() {
        assert_eq!(join_base("", "/public/catalog.json"), "/public/catalog.json");
        assert_eq!(join_base("", "public/catalog.json"), "/public/catalog.json");
        assert_eq!(
            join_base("/viewer", "public/catalog.json"),
            "/viewer/public/catalog.json"
        );
    }
}
