#![cfg(test)]

use std::fs;

use serde_json::json;
use tempfile::tempdir;

use super::common::InvocationLog;
use crate::config::EngineConfig;
use crate::engine::EventDispatchEngine;
use crate::plugin_system::descriptor::PluginDescriptor;
use crate::event::path::EventName;

#[tokio::test]
async fn test_engine_from_json_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("branchline.json");
    fs::write(
        &path,
        r#"{ "namespace": "ide", "baseline": { "editorName": "Scratchpad", "readOnly": true } }"#,
    )
    .unwrap();

    let config = EngineConfig::load(&path).unwrap();
    let mut engine = EventDispatchEngine::from_config(&config).unwrap();

    let log = InvocationLog::new();
    let on_format = EventName::new("onFormat").unwrap();
    engine.register(&PluginDescriptor::new("Formatter").on(on_format.clone(), log.handler("Formatter", "onFormat")));

    assert_eq!(engine.emit("user.onFormat", json!({})).scheduled(), 0);
    engine.emit_event(&on_format, json!({ "lines": 3 })).join().await;

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    let ctx = &entries[0].context;
    assert_eq!(ctx.get_str("editorName"), Some("Scratchpad"));
    assert_eq!(ctx.get("readOnly"), Some(&json!(true)));
    assert_eq!(ctx.meta(), Some(&json!({ "lines": 3 })));
}

#[test]
fn test_config_with_invalid_namespace_fails_engine_construction() {
    let config = EngineConfig {
        namespace: "user.nested".to_string(),
        ..EngineConfig::default()
    };
    assert!(EventDispatchEngine::from_config(&config).is_err());
}
