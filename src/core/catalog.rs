//! # Subject Catalog
//!
//! The subjects shown on the dashboard and the content items inside them.
//!
//! ```text
//! Catalog
//! └── subjects: Vec<Rc<Subject>>
//!     ├── name, description, icon
//!     └── content: Vec<LearningContent>
//!         └── id, title, kind, progress (Cell<f32>)
//! ```
//!
//! The catalog is fixed for the session. Subjects are shared by `Rc` so the
//! navigator and the renderer point at the same object instead of copies.
//! Progress is the only thing that changes, and only the data provider
//! changes it (through `LearningContent::set_progress`).

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

use crate::core::kind::ContentKind;

#[derive(Debug, Deserialize, Serialize)]
pub struct LearningContent {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    progress: Cell<f32>,
}

impl LearningContent {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ContentKind, progress: f32) -> Self {
        let content = Self {
            id: id.into(),
            title: title.into(),
            kind,
            progress: Cell::new(0.0),
        };
        content.set_progress(progress);
        content
    }

    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// Record new progress. Clamped to [0, 1]; NaN counts as no progress.
    pub fn set_progress(&self, progress: f32) {
        let clamped = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.progress.set(clamped);
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Opaque icon reference, resolved by whoever draws it.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub content: Vec<LearningContent>,
}

impl Subject {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        content: Vec<LearningContent>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            content,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O error ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog parse error ({}): {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default)]
pub struct Catalog {
    subjects: Vec<Rc<Subject>>,
}

impl Catalog {
    pub fn new(subjects: Vec<Subject>) -> Self {
        let mut seen = HashSet::new();
        for subject in &subjects {
            if !seen.insert(subject.name.as_str()) {
                warn!("Duplicate subject name in catalog: {}", subject.name);
            }
            for content in &subject.content {
                // Re-apply through the setter so file values get clamped too
                content.set_progress(content.progress());
            }
        }
        Self {
            subjects: subjects.into_iter().map(Rc::new).collect(),
        }
    }

    pub fn subjects(&self) -> &[Rc<Subject>] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Subject>> {
        self.subjects.get(index)
    }

    /// Membership by identity: the same `Rc`, not an equal-looking copy.
    pub fn contains(&self, subject: &Rc<Subject>) -> bool {
        self.subjects.iter().any(|s| Rc::ptr_eq(s, subject))
    }

    pub fn find(&self, name: &str) -> Option<&Rc<Subject>> {
        self.subjects.iter().find(|s| s.name == name)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let subjects: Vec<Subject> = serde_json::from_str(json)?;
        Ok(Self::new(subjects))
    }

    /// The catalog shipped with the app, used when no file is configured.
    pub fn builtin() -> Self {
        use ContentKind::{Reading, Simulation, Video};

        Self::new(vec![
            Subject::new(
                "Physics",
                "Motion, forces, energy and waves",
                "atom",
                vec![
                    LearningContent::new("1", "Newton's Laws of Motion", Simulation, 0.6),
                    LearningContent::new("2", "Work, Energy and Power", Reading, 0.3),
                    LearningContent::new("3", "Sound and Light Waves", Video, 0.0),
                ],
            ),
            Subject::new(
                "Chemistry",
                "Atoms, bonds and reactions",
                "flask",
                vec![
                    LearningContent::new("4", "The Periodic Table", Reading, 0.8),
                    LearningContent::new("5", "Balancing Equations", Simulation, 0.4),
                    LearningContent::new("6", "Acids and Bases", Video, 0.1),
                ],
            ),
            Subject::new(
                "Biology",
                "Cells, genetics and ecosystems",
                "dna",
                vec![
                    LearningContent::new("7", "Inside the Cell", Video, 0.5),
                    LearningContent::new("8", "Mendelian Genetics", Reading, 0.2),
                ],
            ),
            Subject::new(
                "Mathematics",
                "Algebra, geometry and calculus",
                "sigma",
                vec![
                    LearningContent::new("9", "Linear Equations", Reading, 1.0),
                    LearningContent::new("10", "Graphing Functions", Simulation, 0.7),
                    LearningContent::new("11", "Limits and Derivatives", Video, 0.0),
                ],
            ),
        ])
    }
}

/// Load a catalog from a JSON file: an array of subjects.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Loaded catalog from {} ({} subjects)",
        path.display(),
        catalog.len()
    );
    Ok(catalog)
}
