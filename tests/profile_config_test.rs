use ean_scan::config::toml_config::ScanProfile;
use ean_scan::utils::validation::Validate;
use ean_scan::{CliConfig, ReplaySource, ScanEngine, Symbology};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_profile(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_profile_loads_from_file() {
    let file = write_profile(
        r#"
[profile]
name = "warehouse"
description = "receiving dock scanner"

[decoder]
readers = ["ean13"]
frequency = 10

[input]
mode = "lines"
"#,
    );

    let profile = ScanProfile::from_file(file.path()).unwrap();
    profile.validate().unwrap();

    assert_eq!(profile.profile.name, "warehouse");
    assert_eq!(profile.readers(), &[Symbology::Ean13]);
    assert!(!profile.wedge_mode());
}

#[test]
fn test_missing_profile_file_is_an_io_error() {
    let result = ScanProfile::from_file("/nonexistent/scan-profile.toml");
    assert!(result.is_err());
}

#[test]
fn test_invalid_mode_fails_validation() {
    let file = write_profile(
        r#"
[profile]
name = "p"

[decoder]
readers = ["ean8"]

[input]
mode = "camera"
"#,
    );

    let profile = ScanProfile::from_file(file.path()).unwrap();
    assert!(profile.validate().is_err());
}

#[tokio::test]
async fn test_cli_config_with_profile_drives_the_engine() {
    let file = write_profile(
        r#"
[profile]
name = "ean13-only"

[decoder]
readers = ["ean13"]
"#,
    );

    let config = CliConfig {
        codes: vec![],
        profile: Some(file.path().to_str().unwrap().to_string()),
        readers: vec![],
        wedge: false,
        json: false,
        verbose: false,
    };
    let options = config.resolve().unwrap();
    assert_eq!(options.symbologies, vec![Symbology::Ean13]);

    // The profile restricts the engine to EAN-13.
    let source = ReplaySource::new(vec![
        "96385074".to_string(),
        "4006381333931".to_string(),
    ]);
    let mut engine = ScanEngine::from_config(source, &options);
    let report = engine.run().await.unwrap().unwrap();

    assert_eq!(report.code, "4006381333931");
    assert_eq!(report.rejected, 1);
}
