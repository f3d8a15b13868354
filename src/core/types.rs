use std::fmt;
use std::path::PathBuf;

/// One CSV record as an ordered mapping from column name to cell value.
///
/// Columns keep header declaration order. A repeated header name keeps the
/// position of its first occurrence and the value of its last one. Cells past
/// the end of the header are stored under an empty column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Build a row by pairing each header with the cell at the same index.
    ///
    /// Missing trailing cells are omitted rather than stored as empty.
    pub fn from_cells<H, C>(headers: H, cells: C) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut row = Row::default();
        let mut headers = headers.into_iter();

        for value in cells {
            match headers.next() {
                Some(column) => row.insert(column.as_ref(), value.into()),
                None => row.cells.push((String::new(), value.into())),
            }
        }

        row
    }

    fn insert(&mut self, column: &str, value: String) {
        match self.cells.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column.to_string(), value)),
        }
    }

    /// Iterate `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Outcome of downloading a single URL.
///
/// Exactly one of `bytes_written` and `description` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub url: String,
    pub path: PathBuf,
    pub bytes_written: Option<u64>,
    pub description: Option<String>,
}

impl DownloadResult {
    /// Create a DownloadResult for a body fully written to `path`.
    pub fn success(url: String, path: PathBuf, bytes_written: u64) -> Self {
        Self {
            url,
            path,
            bytes_written: Some(bytes_written),
            description: None,
        }
    }

    /// Create a DownloadResult for a failed retrieval.
    pub fn error(url: String, path: PathBuf, description: String) -> Self {
        Self {
            url,
            path,
            bytes_written: None,
            description: Some(description),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.bytes_written.is_some()
    }

    pub fn is_not_ok(&self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for DownloadResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.bytes_written, &self.description) {
            (Some(bytes), _) => write!(
                f,
                "{} -> {} ({} bytes)",
                &self.url,
                self.path.display(),
                bytes
            ),
            (None, Some(desc)) => write!(f, "{} - {}", &self.url, desc),
            (None, None) => write!(f, "{} - unknown", &self.url),
        }
    }
}
