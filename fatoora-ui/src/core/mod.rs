//! Core infrastructure: configuration, notifications, status polling

pub mod config;
pub mod notify;
pub mod status;

pub use config::UiConfig;
pub use notify::{NotificationCenter, NotificationSink};
pub use status::{PageHost, StatusApi, StatusPoller};
