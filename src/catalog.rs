// src/catalog.rs
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::intent::ProjectSelector;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub path: String,
}

impl ProjectRecord {
    /// Last non-empty segment of the record's path, e.g. `tide` for
    /// `works/tide/index.html` minus the file name.
    pub fn slug(&self) -> Option<&str> {
        let trimmed = self.path.trim_end_matches('/');
        let dir = match trimmed.rsplit_once('/') {
            Some((dir, last)) if last.contains('.') => dir,
            _ => trimmed,
        };
        dir.rsplit('/').find(|s| !s.is_empty())
    }
}

/// A project ready to be framed.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub src: String,
    pub record: Option<ProjectRecord>,
}

/// The static list of viewable projects. Small enough that lookups are a
/// plain scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    /// Accepts either `{"projects": [...]}` or a bare array of records.
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Wrapped(Catalog),
            Bare(Vec<ProjectRecord>),
        }

        let catalog = match serde_json::from_str::<Shape>(json) {
            Ok(Shape::Wrapped(catalog)) => catalog,
            Ok(Shape::Bare(projects)) => Catalog::new(projects),
            Err(e) => return Err(ViewerError::CatalogLoadFailure(e.to_string())),
        };

        if let Some(bad) = catalog.projects.iter().find(|p| p.id == 0) {
            return Err(ViewerError::CatalogLoadFailure(format!(
                "project {:?} has id 0",
                bad.title
            )));
        }

        Ok(catalog)
    }

    pub fn find(&self, id: u32) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.slug() == Some(name))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Turn a validated selector into a frame source.
    ///
    /// Ids go through the catalog and use the record's own path. Names were
    /// already checked against the allow-list and map to the works directory.
    pub fn resolve(
        &self,
        selector: &ProjectSelector,
        config: &ViewerConfig,
    ) -> Result<Resolved, ViewerError> {
        match selector {
            ProjectSelector::Id(id) => {
                let record = self.find(*id).ok_or(ViewerError::ProjectNotFound(*id))?;
                Ok(Resolved {
                    src: format!(
                        "{}{}",
                        config.frame_base,
                        record.path.trim_start_matches('/')
                    ),
                    record: Some(record.clone()),
                })
            }
            ProjectSelector::Name(name) => Ok(Resolved {
                src: format!("{}{}/{}/", config.frame_base, config.works_dir, name),
                record: self.find_by_name(name).cloned(),
            }),
        }
    }
}

/// Fetch and parse the catalog. Every way this can go wrong is reported as a
/// `CatalogLoadFailure`.
pub async fn load_catalog(url: &str) -> Result<Catalog, ViewerError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| ViewerError::CatalogLoadFailure(format!("{:?}", e)))?;

    if !resp.ok() {
        return Err(ViewerError::CatalogLoadFailure(format!(
            "{} returned HTTP {}",
            url,
            resp.status()
        )));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| ViewerError::CatalogLoadFailure(format!("{:?}", e)))?;

    let catalog = Catalog::from_json(&body)?;
    log::info!("Loaded catalog with {} projects", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, path: &str) -> ProjectRecord {
        ProjectRecord {
            id,
            title: format!("Project {}", id),
            description: String::new(),
            path: path.to_string(),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            record(1, "works/tide/"),
            record(3, "works/lantern/index.html"),
            record(12, "/works/orbit"),
        ])
    }

    #[test]
    fn test_find() {
        let catalog = sample();
        assert_eq!(catalog.find(3).map(|p| p.id), Some(3));
        assert!(catalog.find(2).is_none());
    }

    #[test]
    fn test_resolve_id_uses_record_path() {
        let config = ViewerConfig::default();
        let catalog = sample();
        for (id, expected) in [
            (1, "../works/tide/"),
            (3, "../works/lantern/index.html"),
            (12, "../works/orbit"),
        ] {
            let resolved = catalog.resolve(&ProjectSelector::Id(id), &config).unwrap();
            assert_eq!(resolved.src, expected);
            assert_eq!(resolved.record.map(|r| r.id), Some(id));
        }
    }

    #[test]
    fn test_resolve_unknown_id() {
        let config = ViewerConfig::default();
        assert_eq!(
            sample().resolve(&ProjectSelector::Id(4), &config),
            Err(ViewerError::ProjectNotFound(4))
        );
    }

    #[test]
    fn test_resolve_name() {
        let config = ViewerConfig::default();
        let resolved = sample()
            .resolve(&ProjectSelector::Name("lantern".to_string()), &config)
            .unwrap();
        assert_eq!(resolved.src, "../works/lantern/");
        assert_eq!(resolved.record.map(|r| r.id), Some(3));

        let unlisted = sample()
            .resolve(&ProjectSelector::Name("drafts".to_string()), &config)
            .unwrap();
        assert_eq!(unlisted.src, "../works/drafts/");
        assert!(unlisted.record.is_none());
    }

    #[test]
    fn test_slug() {
        assert_eq!(record(1, "works/tide/").slug(), Some("tide"));
        assert_eq!(record(1, "works/tide/index.html").slug(), Some("tide"));
        assert_eq!(record(1, "orbit").slug(), Some("orbit"));
        assert_eq!(record(1, "").slug(), None);
    }

    #[test]
    fn test_from_json_shapes() {
        let wrapped = r#"{"projects":[{"id":1,"title":"Tide","description":"d","path":"works/tide/"}]}"#;
        let bare = r#"[{"id":1,"title":"Tide","path":"works/tide/"}]"#;
        assert_eq!(Catalog::from_json(wrapped).unwrap().len(), 1);
        let catalog = Catalog::from_json(bare).unwrap();
        assert_eq!(catalog.projects[0].description, "");
    }

    #[test]
    fn test_from_json_failures() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(ViewerError::CatalogLoadFailure(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"id":0,"title":"Zero","path":"x/"}]"#),
            Err(ViewerError::CatalogLoadFailure(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"id":-1,"title":"Neg","path":"x/"}]"#),
            Err(ViewerError::CatalogLoadFailure(_))
        ));
    }
}
