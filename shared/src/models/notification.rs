//! Transient notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Notification severity, controls visual styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Style class for this severity
    ///
    /// The mapping is total: all four severities resolve to distinct classes.
    pub fn style_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Error => "alert-danger",
            Severity::Warning => "alert-warning",
            Severity::Info => "alert-info",
        }
    }

    /// Parse a severity name, falling back to `Info` on anything unknown
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Notification identity, used to key dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub Uuid);

impl NotificationId {
    pub fn new() -> Self {
        NotificationId(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transient user-visible message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    /// Sticky notifications are never auto-expired
    #[serde(default)]
    pub sticky: bool,
}

impl Notification {
    /// Create a new notification with a fresh id
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
            sticky: false,
        }
    }

    /// Mark this notification as non-expiring
    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_classes_are_distinct() {
        let classes = [
            Severity::Success.style_class(),
            Severity::Error.style_class(),
            Severity::Warning.style_class(),
            Severity::Info.style_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_severity_falls_back_to_info() {
        assert_eq!(Severity::from_name("fatal"), Severity::Info);
        assert_eq!(Severity::from_name(""), Severity::Info);
        assert_eq!(Severity::from_name("SUCCESS"), Severity::Info);
        assert_eq!(Severity::from_name("fatal").style_class(), "alert-info");
    }

    #[test]
    fn test_known_severity_names() {
        assert_eq!(Severity::from_name("success"), Severity::Success);
        assert_eq!(Severity::from_name("error"), Severity::Error);
        assert_eq!(Severity::from_name("warning"), Severity::Warning);
        assert_eq!(Severity::from_name("info"), Severity::Info);
    }

    #[test]
    fn test_notification_ids_are_unique() {
        let a = Notification::new("a", Severity::Info);
        let b = Notification::new("a", Severity::Info);
        assert_ne!(a.id, b.id);
        assert!(!a.sticky);
        assert!(a.sticky().sticky);
    }
}
