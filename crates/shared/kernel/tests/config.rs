use safar_kernel::config::{ConfigError, ConfigLoader};
use safar_kernel::domain::config::IntakeConfig;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn no_env() -> HashMap<String, String> {
    HashMap::new()
}

#[test]
fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("intake.toml");
    fs::write(
        &path,
        r#"
locale = "ru"

[submission]
endpoint = "http://127.0.0.1:8080/exec"
feedback_ttl_secs = 2
"#,
    )?;

    let cfg: IntakeConfig = ConfigLoader::new().file(&path).env_source(no_env()).load()?;
    assert_eq!(cfg.locale, "ru");
    assert_eq!(cfg.submission.endpoint, "http://127.0.0.1:8080/exec");
    assert_eq!(cfg.submission.feedback_ttl_secs, 2);
    assert_eq!(cfg.submission.phone_prefix, "+998");
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("intake.toml");
    fs::write(&path, "[submission]\nverify_status = false\n")?;

    let env = HashMap::from([
        ("SAFAR__SUBMISSION__VERIFY_STATUS".to_owned(), "true".to_owned()),
        ("SAFAR__DIRECTORY__TIMEOUT_SECS".to_owned(), "3".to_owned()),
    ]);

    let cfg: IntakeConfig = ConfigLoader::new().file(&path).env_source(env).load()?;
    assert!(cfg.submission.verify_status);
    assert_eq!(cfg.directory.timeout_secs, 3);
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let result: Result<IntakeConfig, ConfigError> =
        ConfigLoader::new().file(dir.path().join("absent.toml")).env_source(no_env()).load();

    let err = result.expect_err("missing required file");
    assert_eq!(err.context_message(), Some("Failed to build config"));
    Ok(())
}

#[test]
fn optional_missing_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cfg: IntakeConfig = ConfigLoader::new()
        .file(dir.path().join("absent.toml"))
        .required(false)
        .env_source(no_env())
        .load()?;

    assert_eq!(cfg.locale, "en");
    assert_eq!(cfg.submission.feedback_ttl_secs, 6);
    Ok(())
}
