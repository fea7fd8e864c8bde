//! Label table mapping class indices to category names.
//!
//! Label files hold one label per line. Blank lines are skipped, which is why
//! SSD label files use placeholder entries such as `???` for unused class ids.
//! Kept lines are stored verbatim; surrounding whitespace is trimmed only when
//! a dominant label is picked.

use crate::util::{DetAnnounceError, DetAnnounceResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable, ordered label vocabulary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    /// Creates a table from labels in class index order.
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Parses a table from label file contents.
    pub fn from_text(text: &str) -> Self {
        let labels = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect();
        Self { labels }
    }

    /// Parses a table from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> DetAnnounceResult<Self> {
        let mut labels = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|err| DetAnnounceError::LabelIo {
                reason: err.to_string(),
            })?;
            if !line.trim().is_empty() {
                labels.push(line);
            }
        }
        Ok(Self { labels })
    }

    /// Loads a table from a label file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> DetAnnounceResult<Self> {
        let file = File::open(path.as_ref()).map_err(|err| DetAnnounceError::LabelIo {
            reason: format!("{}: {err}", path.as_ref().display()),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns the label at `index` if it exists.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of labels in the table.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true when the table holds no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::LabelTable;

    #[test]
    fn from_text_skips_blank_lines_and_keeps_padding() {
        let table = LabelTable::from_text("person\n\n  bicycle \n???\n   \ncar\n");
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(1), Some("  bicycle "));
        assert_eq!(table.get(2), Some("???"));
        assert_eq!(table.get(4), None);
    }

    #[test]
    fn from_reader_matches_from_text() {
        let text = "cat\r\ndog\r\n\r\nbird";
        let from_reader = LabelTable::from_reader(text.as_bytes()).unwrap();
        assert_eq!(from_reader, LabelTable::from_text(text));
        assert_eq!(from_reader.iter().collect::<Vec<_>>(), vec!["cat", "dog", "bird"]);
    }
}
