use super::*;

#[test]
fn default_uses_builtin_values() {
    let cfg = BackendConfig::default();
    assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(cfg.project_id, DEFAULT_PROJECT_ID);
    assert_eq!(cfg.storage_bucket_id, DEFAULT_STORAGE_BUCKET_ID);
}

#[test]
fn from_values_trims_and_strips_trailing_slash() {
    let cfg = BackendConfig::from_values(
        Some(" https://api.example.test/v1/ "),
        Some("proj"),
        None,
        None,
        None,
        None,
        None,
    );
    assert_eq!(cfg.endpoint, "https://api.example.test/v1");
    assert_eq!(cfg.project_id, "proj");
    assert_eq!(cfg.database_id, DEFAULT_DATABASE_ID);
}

#[test]
fn from_values_treats_blank_as_missing() {
    let cfg = BackendConfig::from_values(None, Some("   "), None, None, None, None, None);
    assert_eq!(cfg.project_id, DEFAULT_PROJECT_ID);
}

#[test]
fn collection_id_maps_each_collection() {
    let cfg = BackendConfig::from_values(None, None, None, Some("u"), Some("p"), Some("s"), None);
    assert_eq!(cfg.collection_id(Collection::Users), "u");
    assert_eq!(cfg.collection_id(Collection::Posts), "p");
    assert_eq!(cfg.collection_id(Collection::Saves), "s");
}
