use preset_launcher::presets::{add_preset, list_names, PresetStore, Presets, StoreError, PRESETS_FILE};
use tempfile::tempdir;

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let store = PresetStore::new(dir.path().join(PRESETS_FILE));
    assert!(matches!(store.load(), Err(StoreError::NotFound(_))));
}

#[test]
fn non_object_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PRESETS_FILE);
    std::fs::write(&path, r#""not an object""#).unwrap();
    let store = PresetStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
}

#[test]
fn wrong_value_shape_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PRESETS_FILE);
    std::fs::write(&path, r#"{"games": "steam://run/100"}"#).unwrap();
    assert!(matches!(
        PresetStore::new(&path).load(),
        Err(StoreError::Parse { .. })
    ));
    std::fs::write(&path, r#"{"games": [1, 2]}"#).unwrap();
    assert!(matches!(
        PresetStore::new(&path).load(),
        Err(StoreError::Parse { .. })
    ));
}

#[test]
fn save_of_loaded_store_keeps_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PRESETS_FILE);
    let original = r#"{"zeta": ["z1", "z2"], "alpha": ["steam://run/100", "C:\\x\\y.exe --flag"]}"#;
    std::fs::write(&path, original).unwrap();
    let store = PresetStore::new(&path);

    let loaded = store.load().unwrap();
    store.save(&loaded).unwrap();

    let before: serde_json::Value = serde_json::from_str(original).unwrap();
    let after: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(before, after);
    // file order survives the round trip
    let keys: Vec<_> = store.load().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[test]
fn save_is_indented() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PRESETS_FILE);
    let store = PresetStore::new(&path);
    let mut presets = Presets::new();
    add_preset(&mut presets, "work", "code, slack").unwrap();
    store.save(&presets).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n  \"work\": [\n"));
    assert_eq!(store.load().unwrap(), presets);
}

#[test]
fn save_to_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let store = PresetStore::new(dir.path().join("nope").join(PRESETS_FILE));
    let err = store.save(&Presets::new()).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn failed_load_leaves_previous_mapping() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PRESETS_FILE);
    std::fs::write(&path, r#"{"a": ["x"]}"#).unwrap();
    let store = PresetStore::new(&path);
    let mut presets = store.load().unwrap();

    std::fs::write(&path, "{ broken").unwrap();
    if let Ok(fresh) = store.load() {
        presets = fresh;
    }
    assert_eq!(list_names(&presets), vec!["a"]);
}
