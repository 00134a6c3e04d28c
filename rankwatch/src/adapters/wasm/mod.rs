/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console_logger;
pub mod error_conversions;
pub mod http_source;
pub mod notifier;
pub mod runtime;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use http_source::HttpSnapshotSource;
pub use notifier::Notifier;
