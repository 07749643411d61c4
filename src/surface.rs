use std::collections::{BTreeMap, BTreeSet};

/// Replacement content for one named region of the page.
///
/// Applying an update replaces the container's entire content; nothing
/// is ever appended, so re-rendering the same state is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceUpdate {
    pub container: &'static str,
    pub markup: String,
}

/// Visual tone of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
    Info,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "alert-success",
            Tone::Danger => "alert-danger",
            Tone::Info => "alert-info",
        }
    }
}

/// A file handed to the user through the download boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub name: String,
    pub mime: String,
    pub contents: String,
}

/// Everything the controllers need from the page they drive.
///
/// The controllers never touch a real DOM; they emit container updates,
/// overlay panels, confirmation prompts, toasts, and file downloads
/// through this trait.
pub trait DisplaySurface {
    /// Replace a container's content.
    fn apply(&mut self, update: SurfaceUpdate);

    /// Open an overlay panel (detail view, rejection form) with the given content.
    fn show_overlay(&mut self, name: &str, markup: String);

    /// Close an overlay panel.
    fn hide_overlay(&mut self, name: &str);

    /// Blocking yes/no prompt. `false` means the user declined.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Transient toast message.
    fn notify(&mut self, message: &str, tone: Tone);

    /// Hand a generated file to the user.
    fn save_file(&mut self, name: &str, mime: &str, contents: &str) -> std::io::Result<()>;
}

/// In-memory surface that records everything applied to it.
///
/// Confirmation prompts are answered with a preset response, so scripted
/// sessions and tests can exercise both the confirmed and declined paths.
pub struct MemorySurface {
    containers: BTreeMap<String, String>,
    overlays: BTreeMap<String, String>,
    open_overlays: BTreeSet<String>,
    confirm_answer: bool,
    pub prompts: Vec<String>,
    pub toasts: Vec<(String, Tone)>,
    pub downloads: Vec<SavedFile>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        MemorySurface {
            containers: BTreeMap::new(),
            overlays: BTreeMap::new(),
            open_overlays: BTreeSet::new(),
            confirm_answer: true,
            prompts: Vec::new(),
            toasts: Vec::new(),
            downloads: Vec::new(),
        }
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose confirmation prompts all get the given answer.
    pub fn answering(confirm_answer: bool) -> Self {
        MemorySurface { confirm_answer, ..Self::default() }
    }

    /// Current content of a container, empty if never rendered.
    pub fn container(&self, name: &str) -> &str {
        self.containers.get(name).map(String::as_str).unwrap_or("")
    }

    /// Last content shown in an overlay, empty if never opened.
    pub fn overlay(&self, name: &str) -> &str {
        self.overlays.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn is_overlay_open(&self, name: &str) -> bool {
        self.open_overlays.contains(name)
    }

    /// Names of containers that have received content, in sorted order.
    pub fn container_names(&self) -> Vec<&str> {
        self.containers.keys().map(String::as_str).collect()
    }
}

impl DisplaySurface for MemorySurface {
    fn apply(&mut self, update: SurfaceUpdate) {
        self.containers.insert(update.container.to_string(), update.markup);
    }

    fn show_overlay(&mut self, name: &str, markup: String) {
        self.overlays.insert(name.to_string(), markup);
        self.open_overlays.insert(name.to_string());
    }

    fn hide_overlay(&mut self, name: &str) {
        self.open_overlays.remove(name);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirm_answer
    }

    fn notify(&mut self, message: &str, tone: Tone) {
        self.toasts.push((message.to_string(), tone));
    }

    fn save_file(&mut self, name: &str, mime: &str, contents: &str) -> std::io::Result<()> {
        self.downloads.push(SavedFile {
            name: name.to_string(),
            mime: mime.to_string(),
            contents: contents.to_string(),
        });
        Ok(())
    }
}
