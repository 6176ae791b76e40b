//! Pre-flight checks on input files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum input file size (500 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Opens a file, mapping a missing file to [`IngestError::FileNotFound`].
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| io_error(path, e))
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects files that start with a UTF-16 byte-order mark.
///
/// A UTF-8 BOM is accepted and stripped when the header row is read.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open_input(path)?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| io_error(path, e))?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

pub(crate) fn io_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let err = check_file_size(Path::new("/definitely/not/here.csv"), 10).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn size_limit() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"BP_Number,Name1,Name2\n").unwrap();
        assert!(check_file_size(file.path(), 1024).is_ok());
        assert!(matches!(
            check_file_size(file.path(), 4),
            Err(IngestError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn utf16_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'B', 0]).unwrap();
        assert!(matches!(
            validate_encoding(file.path()),
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn utf8_bom_is_accepted() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFBP_Number").unwrap();
        assert!(validate_encoding(file.path()).is_ok());
    }
}
