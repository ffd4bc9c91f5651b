use safar_logger::{FileOutput, LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_output_creates_prefixed_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("safar-file-logging")
        .console(None)
        .file(FileOutput::daily(&log_dir))
        .level(LevelFilter::INFO)
        .init()?;

    assert!(logger.writes_files());
    tracing::info!(country = "Uzbekistan", "lead submitted");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let name = log_file.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    assert!(name.starts_with("safar-file-logging"), "unexpected log file name {name}");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("lead submitted"));

    Ok(())
}
