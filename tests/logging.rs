use cellplot::logging::file_subscriber;
use std::fs;

#[test]
fn events_are_written_to_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cellplot.log");
    fs::write(&path, "stale contents\n").unwrap();

    let subscriber = file_subscriber(&path).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("rendered 3 cells");
    });

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("rendered 3 cells"));
    assert!(!contents.contains("stale contents"));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("cellplot.log");
    assert!(file_subscriber(&path).is_err());
}
