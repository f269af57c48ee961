use taskboard_core::{logging_status, BoardConfig, EntityStore, NewLink, SqliteKeyValueStore};

// Logging is process-global; this file holds the only test that starts it.
#[test]
fn board_config_initializes_logging_and_opens_storage() {
    let root = tempfile::tempdir().unwrap();
    let config = BoardConfig::new(root.path().join("board")).with_log_level("warning");

    config.init_logging().unwrap();
    config.init_logging().unwrap();

    let (level, log_dir) = logging_status().unwrap();
    assert_eq!(level, "warn");
    assert_eq!(log_dir, config.log_dir());
    assert!(config.log_dir().is_dir());

    let rejected = config
        .clone()
        .with_log_level("trace")
        .init_logging()
        .unwrap_err();
    assert!(rejected.contains("refusing to switch"));

    let conn = config.open_db().unwrap();
    let mut store = EntityStore::open(SqliteKeyValueStore::new(&conn));
    store.create_link(NewLink::new("Docs", "https://docs.rs"));
    assert_eq!(store.links().len(), 1);
}
