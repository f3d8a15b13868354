use csv::{ByteRecord, Reader, ReaderBuilder};
use log::debug;

use crate::core::error::{Result, SeedFetchError};
use crate::core::types::Row;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Decode UTF-8, dropping any invalid byte sequences instead of failing.
pub fn decode_utf8_lossy_skip(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Streams a CSV file with a header row as [`Row`]s.
///
/// Records may be shorter or longer than the header. Text is decoded per
/// field with [`decode_utf8_lossy_skip`], so bad bytes never abort the read.
pub struct RowReader<R: Read> {
    reader: Reader<R>,
    headers: Vec<String>,
    record: ByteRecord,
}

impl RowReader<File> {
    /// Open a CSV file for reading.
    ///
    /// A missing file maps to [`SeedFetchError::FileNotFound`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SeedFetchError::FileNotFound(path.display().to_string()),
            _ => SeedFetchError::Io(err),
        })?;

        debug!("Reading CSV rows from {}", path.display());
        Self::from_reader(file)
    }
}

impl<R: Read> RowReader<R> {
    pub fn from_reader(rdr: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let headers = reader
            .byte_headers()?
            .iter()
            .map(decode_utf8_lossy_skip)
            .collect();

        Ok(Self {
            reader,
            headers,
            record: ByteRecord::new(),
        })
    }

    /// Column names in declaration order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.record) {
            Ok(true) => Some(Ok(Row::from_cells(
                &self.headers,
                self.record.iter().map(decode_utf8_lossy_skip),
            ))),
            Ok(false) => None,
            Err(err) => Some(Err(SeedFetchError::Csv(err))),
        }
    }
}

/// Parse in-memory CSV text into rows.
pub fn parse_rows(text: &str) -> Result<Vec<Row>> {
    RowReader::from_reader(text.as_bytes())?.collect()
}

/// Read every row of the CSV file at `path`.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    RowReader::from_path(path)?.collect()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn pairs(row: &Row) -> Vec<(&str, &str)> {
        row.iter().collect()
    }

    #[test]
    fn test_decode_utf8_lossy_skip__valid_input_unchanged() {
        assert_eq!(decode_utf8_lossy_skip("héllo, wörld".as_bytes()), "héllo, wörld");
    }

    #[test]
    fn test_decode_utf8_lossy_skip__drops_invalid_bytes() {
        let bytes = b"http://x.test/a\xffb.pdf";
        assert_eq!(decode_utf8_lossy_skip(bytes), "http://x.test/ab.pdf");
    }

    #[test]
    fn test_decode_utf8_lossy_skip__truncated_sequence() {
        // First two bytes of a three byte sequence followed by ASCII
        let bytes = b"a\xe2\x82b";
        assert_eq!(decode_utf8_lossy_skip(bytes), "ab");
    }

    #[test]
    fn test_parse_rows__dict_style() -> TestResult {
        let rows = parse_rows("name,link\nfoo,http://x.test/a.pdf\nbar,\n")?;

        assert_eq!(rows.len(), 2);
        assert_eq!(
            pairs(&rows[0]),
            vec![("name", "foo"), ("link", "http://x.test/a.pdf")]
        );
        assert_eq!(pairs(&rows[1]), vec![("name", "bar"), ("link", "")]);
        Ok(())
    }

    #[test]
    fn test_parse_rows__quoted_cell_with_commas_and_newlines() -> TestResult {
        let rows = parse_rows(
            "name,link\nfoo,\"see http://x.test/a.pdf, also\nhttp://x.test/b.pdf\"\n",
        )?;

        assert_eq!(rows.len(), 1);
        assert_eq!(
            pairs(&rows[0]),
            vec![
                ("name", "foo"),
                ("link", "see http://x.test/a.pdf, also\nhttp://x.test/b.pdf")
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_rows__ragged_records() -> TestResult {
        let rows = parse_rows("a,b\n1\n1,2,http://x.test/extra\n")?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(
            pairs(&rows[1]),
            vec![("a", "1"), ("b", "2"), ("", "http://x.test/extra")]
        );
        Ok(())
    }

    #[test]
    fn test_parse_rows__header_only() -> TestResult {
        let rows = parse_rows("name,link\n")?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_rows__empty_input() -> TestResult {
        let rows = parse_rows("")?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[test]
    fn test_row_reader__headers() -> TestResult {
        let reader = RowReader::from_reader("name,link,notes\n".as_bytes())?;
        assert_eq!(reader.headers(), &["name", "link", "notes"]);
        Ok(())
    }

    #[test]
    fn test_read_rows__from_file_with_invalid_utf8() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"name,link\nfoo\xff,http://x.test/\xfea.pdf\n")?;

        let rows = read_rows(file.path())?;

        assert_eq!(rows.len(), 1);
        assert_eq!(
            pairs(&rows[0]),
            vec![("name", "foo"), ("link", "http://x.test/a.pdf")]
        );
        Ok(())
    }

    #[test]
    fn test_read_rows__when_non_existing_file() {
        let result = read_rows("non_existing_file.csv");

        match result {
            Err(SeedFetchError::FileNotFound(path)) => assert_eq!(path, "non_existing_file.csv"),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }
}
