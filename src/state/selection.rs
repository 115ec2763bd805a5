// src/state/selection.rs
//! The file selection store: an ordered list of CSV files picked or dropped
//! by the user. File content is never read here; only the name and a cached
//! size for display.

use std::path::PathBuf;

pub const CSV_ONLY_MESSAGE: &str = "Please select CSV files only.";

/// A file queued for analysis, with its size cached at add time.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: Option<u64>,
}

impl SelectedFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let size = std::fs::metadata(&path).ok().map(|m| m.len());
        Self { name, path, size }
    }

    /// Case-sensitive, matching what the service accepts.
    pub fn is_csv(&self) -> bool {
        self.name.ends_with(".csv")
    }
}

/// Ordered selection, insertion order preserved, duplicates allowed.
#[derive(Debug, Default)]
pub struct SelectionStore {
    files: Vec<SelectedFile>,
}

impl SelectionStore {
    /// Append the `.csv`-named entries of `incoming`, preserving their
    /// relative order. Returns how many were accepted; zero means the whole
    /// batch was filtered out and the store is unchanged.
    pub fn add_paths(&mut self, incoming: Vec<PathBuf>) -> usize {
        let accepted: Vec<SelectedFile> = incoming
            .into_iter()
            .map(SelectedFile::new)
            .filter(SelectedFile::is_csv)
            .collect();
        let added = accepted.len();
        self.files.extend(accepted);
        added
    }

    /// Remove one entry; out-of-range is a no-op (immediate mode can deliver
    /// a click for a row removed in the same frame).
    pub fn remove_file(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn stored_names(store: &SelectionStore) -> Vec<&str> {
        store.files().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn add_paths_keeps_csv_entries_in_order() {
        let mut store = SelectionStore::default();
        let added = store.add_paths(paths(&["collar.csv", "readme.txt", "survey.csv"]));
        assert_eq!(added, 2);
        assert_eq!(stored_names(&store), vec!["collar.csv", "survey.csv"]);
    }

    #[test]
    fn add_paths_rejects_batch_without_csv() {
        let mut store = SelectionStore::default();
        store.add_paths(paths(&["collar.csv"]));
        let added = store.add_paths(paths(&["notes.txt", "photo.png"]));
        assert_eq!(added, 0);
        assert_eq!(stored_names(&store), vec!["collar.csv"]);
    }

    #[test]
    fn csv_match_is_case_sensitive() {
        let mut store = SelectionStore::default();
        let added = store.add_paths(paths(&["COLLAR.CSV", "collar.Csv"]));
        assert_eq!(added, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn duplicates_by_name_are_kept() {
        let mut store = SelectionStore::default();
        store.add_paths(paths(&["collar.csv"]));
        store.add_paths(paths(&["collar.csv"]));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_file_preserves_order_of_rest() {
        let mut store = SelectionStore::default();
        store.add_paths(paths(&["a.csv", "b.csv", "c.csv"]));
        store.remove_file(1);
        assert_eq!(stored_names(&store), vec!["a.csv", "c.csv"]);

        // out of range is a no-op
        store.remove_file(5);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = SelectionStore::default();
        store.add_paths(paths(&["a.csv", "b.csv"]));
        store.clear();
        assert!(store.is_empty());
    }
}
