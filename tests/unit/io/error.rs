//! Tests for error construction and reporting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::fs;

    use gradtile::AlgorithmError;
    use gradtile::io::error::ensure_directory;
    use tempfile::TempDir;

    // Tests bare I/O errors convert into file system errors
    // Verified by mapping them to a different variant
    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AlgorithmError::from(io);
        assert!(matches!(err, AlgorithmError::FileSystem { .. }));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("gone"));
    }

    // Tests nested directories are created
    // Verified by creating only the leaf
    #[test]
    fn test_ensure_directory_creates_parents() {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("temp dir: {e}"));
        let nested = dir.path().join("a").join("b");
        assert!(ensure_directory(&nested).is_ok());
        assert!(nested.is_dir());
        assert!(ensure_directory(&nested).is_ok());
    }

    // Tests a directory cannot be created under a file
    // Verified by discarding the operation name
    #[test]
    fn test_ensure_directory_reports_operation() {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("temp dir: {e}"));
        let file = dir.path().join("plain");
        assert!(fs::write(&file, b"x").is_ok());

        match ensure_directory(&file.join("sub")) {
            Err(AlgorithmError::FileSystem { operation, .. }) => {
                assert_eq!(operation, "create directory");
            }
            other => panic!("expected a file system error, got {other:?}"),
        }
    }

    // Tests the empty layout message
    // Verified by reusing the parameter message
    #[test]
    fn test_empty_layout_message() {
        let err = AlgorithmError::EmptyLayout;
        assert_eq!(err.to_string(), "Layout contains no tiles");
        assert!(err.source().is_none());
    }
}
