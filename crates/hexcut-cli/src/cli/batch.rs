//! Batch files: a named list of board and piece jobs in YAML.
//!
//! Each job is a full set of render options; fields left out take the
//! plain display defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use hexcut::compose::RenderOptions;
use hexcut::{ConfigError, OutputTarget, PlacementTable, RenderedFiles, render_board, render_pieces};

/// A complete batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Board,
    Pieces,
}

/// One output: what to draw and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub kind: JobKind,

    /// Skipped when false
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(flatten)]
    pub options: RenderOptions,
}

fn default_enabled() -> bool {
    true
}

impl Job {
    pub fn new(kind: JobKind, options: RenderOptions) -> Self {
        Self { kind, enabled: true, options }
    }

    pub fn run(&self, target: &OutputTarget) -> hexcut::Result<RenderedFiles> {
        match self.kind {
            JobKind::Board => render_board(&self.options, target),
            JobKind::Pieces => render_pieces(&self.options, &PlacementTable::standard(), target),
        }
    }
}

impl Batch {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Check every enabled job before running any of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.enabled_jobs().try_for_each(|job| job.options.validate())
    }

    pub fn enabled_jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter().filter(|job| job.enabled)
    }

    pub fn run(&self, target: &OutputTarget) -> hexcut::Result<Vec<RenderedFiles>> {
        self.validate()?;
        let skipped = self.jobs.len() - self.enabled_jobs().count();
        if skipped > 0 {
            warn!(skipped, "disabled jobs skipped");
        }
        self.enabled_jobs().map(|job| job.run(target)).collect()
    }
}

pub fn cmd_batch(path: &Path, target: &OutputTarget) -> hexcut::Result<()> {
    info!(path = %path.display(), "loading batch");
    let batch = Batch::load(path)?;
    info!(name = %batch.name, jobs = batch.jobs.len(), "batch loaded");

    let files = batch.run(target)?;
    info!(written = files.len(), dir = %target.dir.display(), "batch done");
    Ok(())
}

pub fn print_example() {
    println!(
        r##"# Example hexcut batch
name: "Workshop set"
description: "Display board, laser board and the cube sheets"

jobs:
  - kind: board
    labels: all

  - kind: board
    labels: sparse
    decoration: true
    texture: concentrated
    seed: 7
    mark_count: 300

  - kind: board
    mode: fabrication-engrave
    decoration: true
    gradient: false
    ornament: rings
    rings:
      count: 4
      min: 0.3
      max: 0.9

  - kind: pieces
    colors:
      support: "#C8A27C"

  - kind: pieces
    mode: fabrication-cut

  - kind: pieces
    mode: fabrication-negative
    large: true
    enabled: false
"##
    );
}
