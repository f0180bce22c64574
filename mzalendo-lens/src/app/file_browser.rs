//! File browser overlay for attaching a bill scan

use std::path::{Path, PathBuf};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::upload::is_supported_path;

/// Browser state. Lists directories and supported documents only.
#[derive(Debug, Clone)]
pub struct FileBrowser {
    pub visible: bool,
    pub current_dir: PathBuf,
    pub items: Vec<PathBuf>,
    pub selected: usize,
    pub search: String,
}

/// What selecting an entry did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserPick {
    EnteredDir(PathBuf),
    File(PathBuf),
}

impl FileBrowser {
    pub fn new(current_dir: PathBuf) -> Self {
        Self {
            visible: false,
            current_dir,
            items: Vec::new(),
            selected: 0,
            search: String::new(),
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.search.clear();
        self.load_items();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.items.clear();
        self.selected = 0;
        self.search.clear();
    }

    pub fn load_items(&mut self) {
        let mut items = Vec::new();

        if let Ok(entries) = std::fs::read_dir(&self.current_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if is_hidden(&path) {
                    continue;
                }
                if path.is_dir() || is_supported_path(&path) {
                    items.push(path);
                }
            }
        }

        // Directories first, then files
        items.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.file_name().cmp(&b.file_name()),
        });

        if let Some(parent) = self.current_dir.parent() {
            items.insert(0, parent.to_path_buf());
        }

        self.items = items;
        self.selected = 0;
    }

    /// Indices into `items` matching the search, best match first
    pub fn filtered(&self) -> Vec<usize> {
        if self.search.is_empty() {
            return (0..self.items.len()).collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(idx, path)| {
                let name = path.file_name()?.to_str()?;
                matcher.fuzzy_match(name, &self.search).map(|score| (score, idx))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, idx)| idx).collect()
    }

    pub fn next(&mut self) {
        if self.selected < self.filtered().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.selected = 0;
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.selected = 0;
    }

    /// Whether `path` is the parent entry shown as `..`
    pub fn is_parent_entry(&self, path: &Path) -> bool {
        self.current_dir.parent() == Some(path)
    }

    /// Enter the highlighted directory, or hand back the highlighted file
    pub fn select(&mut self) -> Option<BrowserPick> {
        let idx = *self.filtered().get(self.selected)?;
        let path = self.items.get(idx)?.clone();

        if path.is_dir() {
            self.current_dir = path.clone();
            self.search.clear();
            self.load_items();
            Some(BrowserPick::EnteredDir(path))
        } else {
            self.close();
            Some(BrowserPick::File(path))
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
