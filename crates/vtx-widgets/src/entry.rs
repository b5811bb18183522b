#![forbid(unsafe_code)]

//! The unified list item record.
//!
//! Every list-rendering widget consumes the same plain value type, whether
//! the items are menu labels or filesystem entries.

/// One selectable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// The text shown in the list.
    pub display_name: String,
    /// Whether the entry names a directory.
    pub is_directory: bool,
    /// Lowercased file extension, if the entry names a file with one.
    pub extension: Option<String>,
}

impl ListEntry {
    /// A plain label entry (menus, fixed choices).
    #[must_use]
    pub fn label(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            is_directory: false,
            extension: None,
        }
    }

    /// A directory entry.
    #[must_use]
    pub fn directory(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            is_directory: true,
            extension: None,
        }
    }

    /// A file entry; the extension is derived from the name.
    #[must_use]
    pub fn file(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let extension = display_name
            .rsplit_once('.')
            .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
            .map(|(_, ext)| ext.to_ascii_lowercase());
        Self {
            display_name,
            is_directory: false,
            extension,
        }
    }

    /// Check the entry's extension against a candidate (case-insensitive).
    #[must_use]
    pub fn has_extension(&self, ext: &str) -> bool {
        self.extension
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case(ext))
    }
}
