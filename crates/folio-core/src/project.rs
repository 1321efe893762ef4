//! Project catalog.
//!
//! An ordered, immutable list of side projects shown on the projects page.
//! Order is display order. Fields are opaque strings: image paths are never
//! resolved and links are never rewritten.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// One entry in the project catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Short display title.
    pub title: String,

    /// Free-text description.
    pub description: String,

    /// Reference to a static asset, e.g. `/static/images/cover.png`.
    #[serde(alias = "img_src", alias = "imgSrc")]
    pub image_path: String,

    /// Internal route or external absolute URL.
    #[serde(alias = "href")]
    pub link: String,
}

/// Where a project link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// A route handled by the site itself.
    Internal,
    /// An absolute URL opened outside the site.
    External,
}

impl ProjectRecord {
    /// Create a new record.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_path: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_path: image_path.into(),
            link: link.into(),
        }
    }

    /// Classify the link without touching it.
    #[must_use]
    pub fn link_kind(&self) -> LinkKind {
        if self.link.starts_with("http") {
            LinkKind::External
        } else {
            LinkKind::Internal
        }
    }

    /// Authoring problems with the link that do not stop a build.
    ///
    /// Internal routes with an empty path segment (`/blog//post`) are
    /// reported here and still emitted as written.
    #[must_use]
    pub fn link_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        // A leading `//` is a protocol-relative URL, not an empty segment.
        let path = self.link.strip_prefix("//").unwrap_or(&self.link);
        if self.link_kind() == LinkKind::Internal && path.contains("//") {
            warnings.push(format!(
                "project \"{}\" links to \"{}\", which contains a doubled `/` separator",
                self.title, self.link
            ));
        }
        warnings
    }

    /// First empty required field, if any.
    fn empty_field(&self) -> Option<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("image_path", &self.image_path),
            ("link", &self.link),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// On-disk catalog layout: a top-level `projects` list.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// The full ordered list of projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// Wrap an ordered list of records.
    #[must_use]
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            ProjectRecord::new(
                "Gearbox Design",
                "Designed a 5-speed manual transmission for a Mechanical Design class in a team of 6.",
                "/static/images/gearbox-render.png",
                "/blog/gearbox-design",
            ),
            ProjectRecord::new(
                "Aim Duel",
                "HTML Canvas game made using JavaScript, Express, socket.io, and Webpack",
                "/static/images/aimduel-mainmenu.png",
                "/blog/browser-game",
            ),
        ])
    }

    /// Load a catalog file (`.toml`, `.yaml` or `.yml`) and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::catalog_file(path, "file not found"));
        }

        let content = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let file: CatalogFile = match ext {
            "toml" => toml::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            other => {
                return Err(CoreError::catalog_file(
                    path,
                    format!("unsupported catalog format `{other}`"),
                ));
            }
        };

        let catalog = Self::new(file.projects);
        catalog.validate()?;

        tracing::debug!(path = %path.display(), count = catalog.len(), "loaded project catalog");
        Ok(catalog)
    }

    /// Check that every record has all fields filled in.
    pub fn validate(&self) -> Result<()> {
        for (index, record) in self.records.iter().enumerate() {
            if let Some(field) = record.empty_field() {
                return Err(CoreError::catalog(index, field));
            }
        }
        Ok(())
    }

    /// Link warnings for all records, in catalog order.
    #[must_use]
    pub fn link_warnings(&self) -> Vec<String> {
        self.records.iter().flat_map(ProjectRecord::link_warnings).collect()
    }

    /// Records in display order.
    #[must_use]
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Iterate records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProjectCatalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_records_are_complete() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 2);
        for record in &catalog {
            assert!(!record.title.is_empty());
            assert!(!record.description.is_empty());
            assert!(!record.image_path.is_empty());
            assert!(!record.link.is_empty());
        }
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_builtin_order() {
        let titles: Vec<_> = ProjectCatalog::builtin()
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(titles, vec!["Gearbox Design", "Aim Duel"]);
    }

    #[test]
    fn test_link_kind() {
        let external = ProjectRecord::new("A", "d", "/a.png", "https://github.com/x/y");
        let internal = ProjectRecord::new("B", "d", "/b.png", "/blog/b");
        assert_eq!(external.link_kind(), LinkKind::External);
        assert_eq!(internal.link_kind(), LinkKind::Internal);
    }

    #[test]
    fn test_doubled_separator_is_warned_not_fixed() {
        let record = ProjectRecord::new(
            "Sorting Visualizer",
            "d",
            "/s.png",
            "/blog//sorting-visualizer",
        );
        let warnings = record.link_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("/blog//sorting-visualizer"));
        assert_eq!(record.link, "/blog//sorting-visualizer");
    }

    #[test]
    fn test_external_scheme_separator_is_not_warned() {
        let record = ProjectRecord::new("A", "d", "/a.png", "https://example.com/a");
        assert!(record.link_warnings().is_empty());
    }

    #[test]
    fn test_protocol_relative_link_is_not_warned() {
        let record = ProjectRecord::new("A", "d", "/a.png", "//cdn.example.com/x");
        assert!(record.link_warnings().is_empty());

        let record = ProjectRecord::new("B", "d", "/b.png", "//cdn.example.com//x");
        assert_eq!(record.link_warnings().len(), 1);
    }

    #[test]
    fn test_validate_reports_first_empty_field() {
        let catalog = ProjectCatalog::new(vec![
            ProjectRecord::new("A", "d", "/a.png", "/a"),
            ProjectRecord::new("B", "d", "", "/b"),
        ]);
        match catalog.validate() {
            Err(CoreError::Catalog { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "image_path");
            }
            other => panic!("expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn test_image_path_change_is_isolated() {
        let original = ProjectCatalog::builtin();
        let mut records = original.records().to_vec();
        records[0].image_path = "/static/images/other.png".to_string();
        let changed = ProjectCatalog::new(records);

        let (a, b) = (&original.records()[0], &changed.records()[0]);
        assert_eq!(a.title, b.title);
        assert_eq!(a.description, b.description);
        assert_eq!(a.link, b.link);
        assert_eq!(original.records()[1], changed.records()[1]);
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("projects.toml");
        std::fs::write(
            &path,
            r#"
[[projects]]
title = "B"
description = "second"
image_path = "/b.png"
link = "https://example.com/b"

[[projects]]
title = "A"
description = "first"
img_src = "/a.png"
href = "/blog/a"
"#,
        )
        .expect("write");

        let catalog = ProjectCatalog::load(&path).expect("load catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].title, "B");
        assert_eq!(catalog.records()[1].image_path, "/a.png");
        assert_eq!(catalog.records()[1].link, "/blog/a");
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("projects.yml");
        std::fs::write(
            &path,
            r#"
projects:
  - title: Gearbox Design
    description: Designed a transmission.
    imgSrc: /static/images/gearbox-render.png
    href: /blog/gearbox-design
"#,
        )
        .expect("write");

        let catalog = ProjectCatalog::load(&path).expect("load catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.records()[0].image_path,
            "/static/images/gearbox-render.png"
        );
    }

    #[test]
    fn test_load_rejects_empty_field() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("projects.toml");
        std::fs::write(
            &path,
            r#"
[[projects]]
title = ""
description = "d"
image_path = "/a.png"
link = "/a"
"#,
        )
        .expect("write");

        let err = ProjectCatalog::load(&path).unwrap_err();
        assert!(err.to_string().contains("empty `title`"));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("projects.json");
        std::fs::write(&path, "{}").expect("write");

        let err = ProjectCatalog::load(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported catalog format"));
    }
}
