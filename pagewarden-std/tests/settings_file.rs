use pagewarden_std::{
    config::Settings,
    pagewarden_core::{ConfigError, ConfigProvider, resolve_domain},
};
use std::io::Write;

#[test]
fn test_load_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[not_found]
pageNotFound_handling_statheader = "HTTP/1.1 404 Not Found"

[domains._DEFAULT]
pageNotFound_handling = "USER_FUNCTION:render404"
pageNotAuthorized_Url = "/login"
"#
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.not_found.status_header, "HTTP/1.1 404 Not Found");
    assert_eq!(
        resolve_domain(&settings.domains, "unknown.example.org").page_not_authorized_url,
        "/login"
    );
    assert!(settings.domains.lookup("unknown.example.org").is_none());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = Settings::from_file(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
