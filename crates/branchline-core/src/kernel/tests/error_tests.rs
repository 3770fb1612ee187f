#![cfg(test)]

use crate::config::error::ConfigError;
use crate::event::error::EventSystemError;
use crate::kernel::error::Error;
use crate::plugin_system::error::PluginSystemError;

#[test]
fn test_subsystem_errors_convert_into_kernel_error() {
    let event_err: Error = EventSystemError::InvalidEventPath {
        path: "user..onStart".to_string(),
        reason: "empty segment".to_string(),
    }
    .into();
    assert!(matches!(event_err, Error::EventSystem(_)));
    assert_eq!(
        event_err.to_string(),
        "Event system error: Invalid event path 'user..onStart': empty segment"
    );

    let plugin_err: Error = PluginSystemError::UnknownUnregister {
        plugin_id: "Ghost".to_string(),
    }
    .into();
    assert!(matches!(plugin_err, Error::PluginSystem(_)));
    assert!(plugin_err.to_string().contains("Ghost"));

    let config_err: Error = ConfigError::UnsupportedFormat {
        path: "engine.ini".into(),
    }
    .into();
    assert!(matches!(config_err, Error::Config(_)));
}

#[test]
fn test_string_conversions() {
    let from_str: Error = "boom".into();
    assert_eq!(from_str.to_string(), "Error: boom");

    let from_string: Error = String::from("bang").into();
    assert!(matches!(from_string, Error::Other(ref msg) if msg == "bang"));
}
