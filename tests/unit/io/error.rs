//! Tests for error display formatting, conversions, and source chaining

#[cfg(test)]
mod tests {
    use camoforge::CamoError;
    use camoforge::io::error::{invalid_parameter, invalid_source_data, io_error};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests parameter errors name the parameter, value, and reason
    // Verified by dropping the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("width", &0, &"canvas dimensions must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'width' = '0': canvas dimensions must be positive"
        );
    }

    // Tests source data errors carry their reason
    // Verified by swapping the reason for a fixed string
    #[test]
    fn test_invalid_source_data_display() {
        let err = invalid_source_data(&"sample set is empty");
        assert_eq!(err.to_string(), "Invalid source data: sample set is empty");
    }

    // Tests palette range errors report both the index and palette size
    // Verified by omitting the palette length
    #[test]
    fn test_palette_index_display() {
        let err = CamoError::PaletteIndexOutOfRange {
            index: 7,
            palette_len: 4,
        };
        assert_eq!(
            err.to_string(),
            "Palette index 7 out of range for palette of 4 colors"
        );
    }

    // Tests file system errors expose the failing operation and source error
    // Verified by breaking the source chain
    #[test]
    fn test_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CamoError::FileSystem {
            path: PathBuf::from("out/woodland.png"),
            operation: "create directory",
            source: io_err,
        };

        assert!(err.source().is_some());
        assert!(err.to_string().contains("create directory"));
        assert!(err.to_string().contains("out/woodland.png"));
    }

    // Tests parameter errors have no underlying source
    // Verified by attaching a spurious source
    #[test]
    fn test_parameter_errors_have_no_source() {
        let err = invalid_parameter("k", &0, &"at least one cluster is required");
        assert!(err.source().is_none());
    }

    // Tests std io errors convert into file system errors
    // Verified by mapping to a different variant
    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CamoError = io_err.into();
        assert!(matches!(err, CamoError::FileSystem { .. }));
    }

    // Tests the path helper reports through the parameter variant
    // Verified by changing the helper's parameter name
    #[test]
    fn test_path_helper_message() {
        let err = io_error("Target must be an image file or directory");
        assert!(matches!(err, CamoError::InvalidParameter { parameter: "path", .. }));
        assert!(err.to_string().contains("Target must be"));
    }
}
