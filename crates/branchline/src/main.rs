mod cli; // Declare the cli module

use std::process::ExitCode;

use branchline_core::config::EngineConfig;
use branchline_core::kernel::constants::{APP_NAME, APP_VERSION};
use branchline_core::{EventDispatchEngine, EventName, LifecycleEvent};
use clap::Parser;
use log::{error, info};
use serde_json::{Value, json};

use cli::{CliArgs, Commands};
use core_logging::LoggingPlugin;
use sample_plugin::{LogPlugin, SamplePlugin};

fn build_engine(args: &CliArgs) -> branchline_core::Result<EventDispatchEngine> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(namespace) = &args.namespace {
        config.namespace = namespace.clone();
    }
    let mut engine = EventDispatchEngine::from_config(&config)?;

    engine.register(&LoggingPlugin.descriptor());
    engine.register(&SamplePlugin.descriptor());
    engine.register(&LogPlugin.descriptor());
    Ok(engine)
}

async fn run_demo(engine: &EventDispatchEngine) {
    let namespace = engine.namespace();
    let session: [(LifecycleEvent, Value); 3] = [
        (LifecycleEvent::OnStart, json!({ "disableLogging": false, "name": "MyCodeEditor" })),
        (LifecycleEvent::OnSave, json!({ "name": "Document1", "label": "Initial Save" })),
        (LifecycleEvent::OnShutdown, json!({ "reason": "Editor closed" })),
    ];

    let mut handles = Vec::new();
    for (event, payload) in session {
        let path = format!("{}.{}", namespace, event);
        let handle = engine.emit(&path, payload);
        println!("Emitted {} to {} handler(s)", path, handle.scheduled());
        handles.push(handle);
    }
    for handle in handles {
        let path = handle.event_path().to_string();
        let finished = handle.join().await;
        info!("{} handler(s) finished for {}", finished, path);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    println!("{} v{}: plugin event dispatch", APP_NAME, APP_VERSION);

    // Parse command-line arguments
    let args = CliArgs::parse();

    // Handle simple ping command
    if args.ping {
        println!("pong");
        return ExitCode::SUCCESS;
    }

    if let Err(e) = core_logging::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let mut engine = match build_engine(&args) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Failed to build engine: {}", e);
            eprintln!("Failed to initialize engine: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Registered plugins: {}", engine.registered_plugins().join(", "));

    match args.command {
        Some(Commands::Plugins) => {
            for event in LifecycleEvent::ALL {
                let path = engine.event_path(&event.into()).to_string();
                println!("  - {}: {} handler(s)", path, engine.handler_count_for(&path));
            }
        }
        Some(Commands::Emit { event, payload }) => {
            let event = match EventName::new(event) {
                Ok(event) => event,
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::from(2);
                }
            };
            let payload: Value = match serde_json::from_str(&payload) {
                Ok(payload) => payload,
                Err(e) => {
                    eprintln!("Invalid --payload JSON: {}", e);
                    return ExitCode::from(2);
                }
            };
            let handle = engine.emit_event(&event, payload);
            println!("Emitted {} to {} handler(s)", handle.event_path(), handle.scheduled());
            handle.join().await;
        }
        Some(Commands::Demo) | None => {
            run_demo(&engine).await;
        }
    }

    println!("Shutting down...");
    for plugin in engine.registered_plugins() {
        engine.unregister(&plugin);
    }
    ExitCode::SUCCESS
}
