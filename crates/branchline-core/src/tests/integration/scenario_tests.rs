#![cfg(test)]

use serde_json::json;

use super::common::InvocationLog;
use crate::engine::{EventDispatchEngine, SharedEngine};
use crate::event::types::LifecycleEvent;
use crate::plugin_system::descriptor::PluginDescriptor;

#[tokio::test]
async fn test_two_plugin_lifecycle() {
    let log = InvocationLog::new();
    let mut engine = EventDispatchEngine::new();

    let a = PluginDescriptor::new("A").on(LifecycleEvent::OnStart, log.handler("A", "onStart"));
    let b = PluginDescriptor::new("B")
        .on(LifecycleEvent::OnStart, log.handler("B", "onStart"))
        .on(LifecycleEvent::OnSave, log.handler("B", "onSave"));
    engine.register(&a);
    engine.register(&b);

    let handle = engine.emit("user.onStart", json!({ "x": 1 }));
    assert_eq!(handle.scheduled(), 2);
    handle.join().await;

    assert_eq!(log.plugins_for("onStart"), vec!["A", "B"]);
    for entry in log.entries() {
        assert_eq!(entry.context.meta(), Some(&json!({ "x": 1 })));
        assert_eq!(entry.context.get_str("editorName"), Some("MyCodeEditor"));
    }

    assert!(engine.unregister("B"));
    let remaining: Vec<&str> = engine
        .index()
        .handlers_at(&"user.onStart".parse().unwrap())
        .iter()
        .map(|record| record.owner_id())
        .collect();
    assert_eq!(remaining, vec!["A"]);
    assert_eq!(engine.handler_count_for("user.onSave"), 0);

    let handle = engine.emit("user.onSave", json!({}));
    assert_eq!(handle.scheduled(), 0);
    handle.join().await;
    assert!(log.plugins_for("onSave").is_empty());
    assert_eq!(log.len(), 2);
}

#[tokio::test]
async fn test_editor_session_through_shared_engine() {
    let log = InvocationLog::new();
    let shared = SharedEngine::new();

    let mut sample = PluginDescriptor::new("SamplePlugin");
    for event in LifecycleEvent::ALL {
        sample = sample.on(event, log.handler("SamplePlugin", event.name()));
    }
    shared.register(&sample).await;
    shared.register(&PluginDescriptor::new("LogPlugin")).await;
    assert_eq!(shared.registered_plugins().await, vec!["LogPlugin", "SamplePlugin"]);

    let payloads = [
        (LifecycleEvent::OnStart, json!({ "disableLogging": false, "name": "MyCodeEditor" })),
        (LifecycleEvent::OnSave, json!({ "name": "Document1", "label": "Initial Save" })),
        (LifecycleEvent::OnShutdown, json!({ "reason": "Editor closed" })),
    ];
    let mut handles = Vec::new();
    for (event, payload) in payloads.iter().cloned() {
        handles.push(shared.emit_event(&event.into(), payload).await);
    }
    for handle in handles {
        assert_eq!(handle.join().await, 1);
    }

    assert_eq!(log.len(), 3);
    for (event, payload) in payloads {
        let entry = log
            .entries()
            .into_iter()
            .find(|entry| entry.event == event.name())
            .expect("every lifecycle event should reach SamplePlugin");
        assert_eq!(entry.context.meta(), Some(&payload));
    }
}
