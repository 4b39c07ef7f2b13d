//! Input abstraction for data tables

use crate::error::{EngineError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where the data table comes from
pub enum Input {
    /// Table text
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to decode as UTF-8
    Bytes(Vec<u8>),
    /// Reader stream (stdin, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from table text
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole table as text
    pub fn to_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path)
                .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}"))),
            Input::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                Ok(String::from_utf8(buffer)?)
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_input() {
        let input = Input::from_text("0023 20E3 ; unqualified");
        assert_eq!(input.to_text().unwrap(), "0023 20E3 ; unqualified");
    }

    #[test]
    fn test_file_input() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "# comment\n").unwrap();

        let input = Input::from_file(file.path());
        assert_eq!(input.to_text().unwrap(), "# comment\n");
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/emoji-test.txt")
            .to_text()
            .unwrap_err();
        assert!(matches!(err, EngineError::IoError(_)));
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let err = Input::from_bytes(vec![0xFF, 0xFE]).to_text().unwrap_err();
        assert!(matches!(err, EngineError::EncodingError(_)));
    }

    #[test]
    fn test_reader_input() {
        let input = Input::from_reader(Cursor::new(b"1F600 ; fully-qualified".to_vec()));
        assert_eq!(input.to_text().unwrap(), "1F600 ; fully-qualified");
    }

    #[test]
    fn test_reader_errors() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("connection reset"))
            }
        }

        let err = Input::from_reader(Broken).to_text().unwrap_err();
        assert_eq!(err.to_string(), "I/O error: connection reset");

        let err = Input::from_reader(Cursor::new(vec![0xC3])).to_text().unwrap_err();
        assert!(matches!(err, EngineError::EncodingError(_)));
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("abc"));
        assert_eq!(debug, "Text(\"<3 bytes>\")");
    }
}
