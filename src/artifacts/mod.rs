//! Sidebar and artifact state for the consuming UI.
//!
//! The store holds a flat list of generated files, the artifact history,
//! and a single "current" artifact. Display state follows a latest-wins
//! policy: a newly added artifact replaces the current one outright, it is
//! never merged. The UI reads this state; nothing here renders.

use tracing::debug;

use crate::models::{Artifact, CodeFile};

/// Which pane of the sidebar is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarView {
    #[default]
    Code,
    Preview,
}

/// Holds the current set of generated files and artifacts.
#[derive(Debug, Default)]
pub struct SidebarStore {
    files: Vec<CodeFile>,
    artifacts: Vec<Artifact>,
    current: Option<Artifact>,
    is_open: bool,
    view: SidebarView,
}

impl SidebarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge files into the list, skipping any whose filename already
    /// exists (first write wins). A non-empty add always reveals the
    /// sidebar.
    pub fn add_files(&mut self, new_files: Vec<CodeFile>) {
        if new_files.is_empty() {
            return;
        }

        for file in new_files {
            if self.files.iter().any(|f| f.filename == file.filename) {
                debug!(filename = %file.filename, "skipping duplicate file");
                continue;
            }
            self.files.push(file);
        }

        self.is_open = true;
    }

    /// Replace the file list and current artifact with exactly this set,
    /// packaged as a fresh artifact. Latest wins; the superseded artifact
    /// stays in history only.
    pub fn add_titled_files(
        &mut self,
        files: Vec<CodeFile>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        let artifact = Artifact::new(title, description, files);
        self.add_artifact(artifact);
    }

    /// Install an artifact as current: its files become the file list, it
    /// is appended to the history, and the sidebar opens.
    pub fn add_artifact(&mut self, artifact: Artifact) {
        debug!(id = %artifact.id, title = %artifact.title, "installing artifact");
        self.files = artifact.files.clone();
        self.current = Some(artifact.clone());
        self.artifacts.push(artifact);
        self.is_open = true;
    }

    /// Install an artifact and force the preview pane.
    pub fn preview_artifact(&mut self, artifact: Artifact) {
        self.add_artifact(artifact);
        self.view = SidebarView::Preview;
    }

    /// Drop the file list (and the now-fileless current artifact) and
    /// close the sidebar. Artifact history is untouched.
    pub fn clear_files(&mut self) {
        self.files.clear();
        self.current = None;
        self.is_open = false;
    }

    /// Drop everything and close the sidebar.
    pub fn clear_artifacts(&mut self) {
        self.files.clear();
        self.artifacts.clear();
        self.current = None;
        self.is_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn open_sidebar(&mut self) {
        self.is_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.is_open = false;
    }

    pub fn set_view(&mut self, view: SidebarView) {
        self.view = view;
    }

    pub fn files(&self) -> &[CodeFile] {
        &self.files
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn current_artifact(&self) -> Option<&Artifact> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn view(&self) -> SidebarView {
        self.view
    }
}
