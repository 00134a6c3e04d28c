pub mod converters;
pub mod watch;
