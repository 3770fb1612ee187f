use super::*; // Import items from the parent module (plugin.rs)
use branchline_core::EventDispatchEngine;
use serde_json::json;

#[test]
fn validate_meta_accepts_known_fields() {
    let meta = json!({ "disableLogging": false, "name": "MyCodeEditor", "extra": [1, 2] });
    let parsed = validate_meta(Some(&meta)).unwrap();
    assert_eq!(parsed.disable_logging, Some(false));
    assert_eq!(parsed.name.as_deref(), Some("MyCodeEditor"));
    assert_eq!(parsed.label, None);
}

#[test]
fn validate_meta_accepts_empty_object() {
    assert_eq!(validate_meta(Some(&json!({}))).unwrap(), SamplePluginMeta::default());
}

#[test]
fn validate_meta_rejects_wrong_types() {
    let meta = json!({ "disableLogging": "yes" });
    assert!(matches!(validate_meta(Some(&meta)), Err(SamplePluginError::InvalidMeta(_))));

    let meta = json!({ "reason": 42 });
    assert!(validate_meta(Some(&meta)).is_err());
}

#[test]
fn validate_meta_rejects_non_objects() {
    for meta in [json!(null), json!([true]), json!("name"), json!(7)] {
        assert!(validate_meta(Some(&meta)).is_err(), "{} should be rejected", meta);
    }
    assert!(validate_meta(None).is_err());
}

#[test]
fn on_start_fails_on_invalid_meta() {
    let ctx = Context::new().with_meta(json!({ "label": false }));
    let err = on_start(ctx).unwrap_err();
    assert!(err.to_string().starts_with("Invalid meta data for SamplePlugin"));

    let ctx = Context::new().with_meta(json!({ "label": "ok" }));
    assert!(on_start(ctx).is_ok());
}

#[test]
fn descriptors() {
    let sample = SamplePlugin.descriptor();
    assert_eq!(sample.name(), SAMPLE_PLUGIN_NAME);
    assert_eq!(sample.handler_count(), 3);

    let log = LogPlugin.descriptor();
    assert_eq!(log.name(), LOG_PLUGIN_NAME);
    assert_eq!(log.declared_count(), 0);
}

#[tokio::test]
async fn editor_lifecycle_runs_all_handlers() {
    let mut engine = EventDispatchEngine::new();
    engine.register(&SamplePlugin.descriptor());
    engine.register(&LogPlugin.descriptor());

    let start = engine.emit("user.onStart", json!({ "disableLogging": false, "name": "MyCodeEditor" }));
    let save = engine.emit("user.onSave", json!({ "name": "Document1", "label": "Initial Save" }));
    let shutdown = engine.emit("user.onShutdown", json!({ "reason": "Editor closed" }));

    assert_eq!(start.join().await, 1);
    assert_eq!(save.join().await, 1);
    assert_eq!(shutdown.join().await, 1);

    // An invalid onStart payload is absorbed by the engine
    assert_eq!(engine.emit("user.onStart", json!("not an object")).join().await, 1);
}
