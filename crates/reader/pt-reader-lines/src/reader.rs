//! Chunked line reader implementation.

use pt_error::{PtError, ReaderError, Result};
use pt_types::RecordFormat;
use std::fs::File;
use std::io::{self, Read};
use std::iter::FusedIterator;
use std::path::Path;
use tracing::{debug, trace};

/// Default read chunk size (64 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Configuration for the line reader.
#[derive(Debug, Clone)]
pub struct LineReaderConfig {
    /// Record format, which selects the record separator
    pub format: RecordFormat,

    /// Number of bytes requested per read
    pub buffer_size: usize,
}

impl LineReaderConfig {
    /// Create a new configuration with the default buffer size.
    pub fn new(format: RecordFormat) -> Self {
        Self {
            format,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set the buffer size.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

/// A single logical line and its zero-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    /// Zero-based line ordinal; 0 is the header
    pub index: u64,

    /// Line content without the record separator
    pub text: String,
}

impl RecordLine {
    /// Returns true for the first line of the file.
    pub fn is_header(&self) -> bool {
        self.index == 0
    }
}

/// Streaming line reader over a delimited text file.
///
/// Reads `buffer_size` bytes at a time and yields complete logical lines in
/// file order. A line cut by a chunk boundary is held back and completed by
/// the next read before it is yielded. Splitting happens on raw bytes and each
/// line is decoded only once it is complete, so multi-byte UTF-8 sequences
/// (and a `\r\n` separator) cut by a chunk boundary come out intact. Invalid
/// UTF-8 is replaced with U+FFFD.
///
/// The iterator is finite and not restartable. Breaking out of a loop over it
/// is the early-stop signal; dropping the reader closes the file. A read
/// failure is yielded once as an error, after which the iterator ends.
pub struct LineReader<R = File> {
    source: R,
    label: String,
    separator: &'static [u8],
    chunk: Vec<u8>,

    /// Bytes read but not yet yielded as lines, starting at `consumed`
    pending: Vec<u8>,
    consumed: usize,

    /// Offset in `pending` where the next separator search starts
    scan_from: usize,

    next_index: u64,
    bytes_read: u64,
    eof: bool,
    done: bool,
}

impl LineReader<File> {
    /// Opens a local file for line-by-line reading.
    pub fn open(path: impl AsRef<Path>, config: &LineReaderConfig) -> Result<Self> {
        let path = path.as_ref();

        if config.buffer_size == 0 {
            return Err(PtError::Config(
                "buffer size must be at least 1 byte".to_string(),
            ));
        }

        debug!(
            path = %path.display(),
            format = %config.format,
            buffer_size = config.buffer_size,
            "Opening delimited file"
        );

        let file = File::open(path).map_err(|e| ReaderError::from_io(path, &e))?;

        Ok(Self::from_reader(file, path.display().to_string(), config))
    }
}

impl<R: Read> LineReader<R> {
    /// Wraps any byte source. `label` identifies the source in errors and logs.
    pub fn from_reader(source: R, label: impl Into<String>, config: &LineReaderConfig) -> Self {
        Self {
            source,
            label: label.into(),
            separator: config.format.record_separator(),
            chunk: vec![0; config.buffer_size.max(1)],
            pending: Vec::new(),
            consumed: 0,
            scan_from: 0,
            next_index: 0,
            bytes_read: 0,
            eof: false,
            done: false,
        }
    }

    /// Total bytes read from the source so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Number of lines yielded so far.
    pub fn lines_read(&self) -> u64 {
        self.next_index
    }

    /// Source label (the file path for [`LineReader::open`]).
    pub fn label(&self) -> &str {
        &self.label
    }

    fn find_separator(&self) -> Option<usize> {
        let separator = self.separator;
        self.pending[self.scan_from..]
            .windows(separator.len())
            .position(|window| window == separator)
            .map(|offset| self.scan_from + offset)
    }

    fn take_line(&mut self, end: usize, next_start: usize) -> RecordLine {
        let text = String::from_utf8_lossy(&self.pending[self.consumed..end]).into_owned();
        self.consumed = next_start;
        self.scan_from = next_start;

        let index = self.next_index;
        self.next_index += 1;

        RecordLine { index, text }
    }

    /// Compacts the pending buffer and appends the next chunk.
    fn fill(&mut self) -> io::Result<usize> {
        if self.consumed > 0 {
            self.pending.drain(..self.consumed);
            self.scan_from -= self.consumed;
            self.consumed = 0;
        }

        loop {
            match self.source.read(&mut self.chunk) {
                Ok(n) => {
                    self.pending.extend_from_slice(&self.chunk[..n]);
                    self.bytes_read += n as u64;
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<RecordLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(end) = self.find_separator() {
                let next_start = end + self.separator.len();
                return Some(Ok(self.take_line(end, next_start)));
            }

            // The tail may hold the first bytes of a separator; rescan them after the next read.
            self.scan_from = self
                .pending
                .len()
                .saturating_sub(self.separator.len() - 1)
                .max(self.consumed);

            if self.eof {
                self.done = true;

                if self.consumed < self.pending.len() {
                    let end = self.pending.len();
                    return Some(Ok(self.take_line(end, end)));
                }

                trace!(
                    source = %self.label,
                    lines = self.next_index,
                    bytes = self.bytes_read,
                    "Reached end of file"
                );
                return None;
            }

            match self.fill() {
                Ok(0) => self.eof = true,
                Ok(_) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(ReaderError::Io(format!(
                        "Failed to read '{}': {}",
                        self.label, e
                    ))
                    .into()));
                }
            }
        }
    }
}

impl<R: Read> FusedIterator for LineReader<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    fn read_all(content: &[u8], format: RecordFormat, buffer_size: usize) -> Vec<RecordLine> {
        let config = LineReaderConfig::new(format).with_buffer_size(buffer_size);
        LineReader::from_reader(Cursor::new(content.to_vec()), "memory", &config)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    fn texts(lines: &[RecordLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Whole-content split, dropping the empty remainder after a trailing separator.
    fn split_whole(content: &str, separator: &str) -> Vec<String> {
        let mut parts: Vec<String> = content.split(separator).map(String::from).collect();
        if parts.last().map(|s| s.is_empty()).unwrap_or(false) {
            parts.pop();
        }
        parts
    }

    struct FailingReader {
        data: Cursor<Vec<u8>>,
        fail_after: u64,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.position() >= self.fail_after {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_read_local_csv() {
        let file =
            create_test_file(b"MB_CODE_2016,POA_CODE_2016\n10000010000,2611\n10000021000,2600\n");
        let config = LineReaderConfig::new(RecordFormat::Csv);

        let lines: Vec<RecordLine> = LineReader::open(file.path(), &config)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            texts(&lines),
            vec![
                "MB_CODE_2016,POA_CODE_2016",
                "10000010000,2611",
                "10000021000,2600"
            ]
        );
        assert!(lines[0].is_header());
        assert_eq!(
            lines.iter().map(|l| l.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        assert!(read_all(b"", RecordFormat::Csv, 16).is_empty());
        assert!(read_all(b"", RecordFormat::Psv, 16).is_empty());
    }

    #[test]
    fn test_missing_trailing_separator() {
        let lines = read_all(b"header\nlast", RecordFormat::Csv, 4);
        assert_eq!(texts(&lines), vec!["header", "last"]);
        assert_eq!(lines[1].index, 1);
    }

    #[test]
    fn test_interior_empty_lines_are_kept() {
        let lines = read_all(b"a\n\nb\n", RecordFormat::Csv, 3);
        assert_eq!(texts(&lines), vec!["a", "", "b"]);
    }

    #[test]
    fn test_chunked_matches_whole_file_split() {
        let mut content = String::from("LOCALITY_PID|LOCALITY_NAME|STATE_PID\r\n");
        for i in 0..200 {
            content.push_str(&format!("loc{:04}|Locality number {}|{}\r\n", i, i, i % 9));
        }
        content.push_str("loc9999|No trailing separator|1");

        let expected = split_whole(&content, "\r\n");

        for buffer_size in [1, 2, 3, 5, 7, 16, 31, 64, 1000, DEFAULT_BUFFER_SIZE] {
            let lines = read_all(content.as_bytes(), RecordFormat::Psv, buffer_size);
            assert_eq!(
                texts(&lines),
                expected.iter().map(String::as_str).collect::<Vec<_>>(),
                "buffer_size = {}",
                buffer_size
            );
            assert_eq!(lines.len(), 202);
        }
    }

    #[test]
    fn test_crlf_split_across_chunk_boundary() {
        // With a 4-byte buffer the first chunk ends on '\r' and the next starts with '\n'.
        let lines = read_all(b"abc\r\ndef\r\n", RecordFormat::Psv, 4);
        assert_eq!(texts(&lines), vec!["abc", "def"]);
    }

    #[test]
    fn test_lone_newline_in_psv_is_content() {
        let lines = read_all(b"a\nb\r\nc", RecordFormat::Psv, 2);
        assert_eq!(texts(&lines), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_multibyte_character_across_chunk_boundary() {
        // 'é' is two bytes; a 4-byte buffer cuts it between "Caf" + 0xC3 and 0xA9.
        let content = "Café\nMāori Hill\n";
        for buffer_size in 1..=8 {
            let lines = read_all(content.as_bytes(), RecordFormat::Csv, buffer_size);
            assert_eq!(
                texts(&lines),
                vec!["Café", "Māori Hill"],
                "buffer_size = {}",
                buffer_size
            );
        }
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let lines = read_all(b"ok\n\xff\xfe\n", RecordFormat::Csv, 2);
        assert_eq!(lines[0].text, "ok");
        assert_eq!(lines[1].text, "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_early_stop() {
        let content = b"h\n1\n2\n3\n4\n";
        let config = LineReaderConfig::new(RecordFormat::Csv).with_buffer_size(2);
        let mut reader = LineReader::from_reader(Cursor::new(content.to_vec()), "memory", &config);

        let mut seen = Vec::new();
        for line in reader.by_ref() {
            let line = line.unwrap();
            if line.index == 2 {
                break;
            }
            seen.push(line.text);
        }

        assert_eq!(seen, vec!["h", "1"]);
        assert_eq!(reader.lines_read(), 3);
        assert!(reader.bytes_read() < content.len() as u64);
    }

    #[test]
    fn test_line_count_is_data_lines_plus_header() {
        let mut content = String::from("MB_CODE_2016,SSC_CODE_2016,SSC_NAME_2016,STE_CODE_2016\n");
        for i in 0..57 {
            content.push_str(&format!("{},{},Suburb {},1\n", i, i, i));
        }
        let lines = read_all(content.as_bytes(), RecordFormat::Csv, 13);
        assert_eq!(lines.len(), 58);
        assert_eq!(lines.last().unwrap().index, 57);
    }

    #[test]
    fn test_bytes_read_counts_whole_file() {
        let content = b"a,b\n1,2\n3,4";
        let config = LineReaderConfig::new(RecordFormat::Csv).with_buffer_size(5);
        let mut reader = LineReader::from_reader(Cursor::new(content.to_vec()), "memory", &config);
        while reader.next().is_some() {}
        assert_eq!(reader.bytes_read(), content.len() as u64);
        assert_eq!(reader.lines_read(), 3);
    }

    #[test]
    fn test_read_error_is_yielded_once() {
        let source = FailingReader {
            data: Cursor::new(b"h\n1\n2\n3\n".to_vec()),
            fail_after: 4,
        };
        let config = LineReaderConfig::new(RecordFormat::Csv).with_buffer_size(4);
        let mut reader = LineReader::from_reader(source, "failing", &config);

        assert_eq!(reader.next().unwrap().unwrap().text, "h");
        assert_eq!(reader.next().unwrap().unwrap().text, "1");
        match reader.next() {
            Some(Err(PtError::Reader(ReaderError::Io(msg)))) => assert!(msg.contains("failing")),
            other => panic!("Expected Io error, got: {:?}", other),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_file_not_found() {
        let config = LineReaderConfig::new(RecordFormat::Csv);
        let result = LineReader::open("/nonexistent/POA_2016_AUST.csv", &config);

        match result {
            Err(PtError::Reader(ReaderError::NotFound(path))) => {
                assert!(path.contains("POA_2016_AUST.csv"))
            }
            Err(e) => panic!("Expected NotFound error, got: {:?}", e),
            Ok(_) => panic!("Expected NotFound error, got a reader"),
        }
    }

    #[test]
    fn test_zero_buffer_size_rejected() {
        let file = create_test_file(b"a\n");
        let config = LineReaderConfig::new(RecordFormat::Csv).with_buffer_size(0);
        assert!(matches!(
            LineReader::open(file.path(), &config),
            Err(PtError::Config(_))
        ));
    }
}
