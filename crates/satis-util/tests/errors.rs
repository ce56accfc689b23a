use std::path::PathBuf;

use miette::Diagnostic;
use satis_util::errors::SatisError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = SatisError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_file_not_found_display() {
    let err = SatisError::FileNotFound {
        path: PathBuf::from("composer.lock"),
    };
    assert_eq!(err.to_string(), "File not found: composer.lock");
}

#[test]
fn test_parse_error_display() {
    let err = SatisError::Parse {
        path: PathBuf::from("satis.json"),
        message: "expected value at line 1 column 1".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to parse satis.json: expected value at line 1 column 1"
    );
}

#[test]
fn test_generic_error_display() {
    let err = SatisError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: SatisError = io_err.into();
    assert!(matches!(err, SatisError::Io(_)));
}

#[test]
fn test_converts_into_miette_report() {
    let report: miette::Report = SatisError::FileNotFound {
        path: PathBuf::from("missing.json"),
    }
    .into();
    assert!(report.to_string().contains("missing.json"));
}

#[test]
fn test_parse_error_help_covers_shape_errors() {
    let err = SatisError::Parse {
        path: PathBuf::from("composer.lock"),
        message: "missing field `version`".to_string(),
    };
    let help = err.help().unwrap().to_string();
    assert!(help.contains("valid JSON"), "got: {help}");
    assert!(help.contains("expected types"), "got: {help}");
}
