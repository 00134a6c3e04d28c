/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// This module contains all the port traits that define contracts between the domain layer
/// and the infrastructure adapters: where snapshots come from, who is watching, how alerts
/// reach the user, plus the logging and timing primitives every layer relies on.

pub mod clock;
pub mod logger;
pub mod notifier;
pub mod session;
pub mod snapshot_source;

pub use clock::ClockPort;
pub use logger::LoggerPort;
pub use notifier::NotifierPort;
pub use session::SessionPort;
pub use snapshot_source::SnapshotSourcePort;
