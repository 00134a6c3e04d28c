/// Native adapters - implementations for native Rust (non-WASM).

pub mod clock;
pub mod console_logger;
pub mod mock_notifier;
pub mod notifier;
pub mod runtime;
pub mod scripted_source;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use mock_notifier::MockNotifier;
pub use notifier::Notifier;
pub use scripted_source::ScriptedSnapshotSource;
