//! Local notification facade
//!
//! This module provides:
//! - Typed notification descriptors and query/selection types
//! - Defaults configuration with whitelist-only overrides
//! - Wire conversion (defaults merge, property normalization)
//! - The `LocalNotificationClient` forwarding every operation to the native
//!   bridge as a single call

pub mod client;
pub mod convert;
pub mod defaults;
pub mod types;

pub use client::LocalNotificationClient;
pub use defaults::{DefaultsPatch, NotificationDefaults};
pub use types::{
    IdList, Notification, NotificationAction, NotificationQuery, RepeatInterval, ScheduleOptions,
    ScheduleOutcome,
};

/// Wire name of the native plugin every bridge call addresses
pub const PLUGIN_NAME: &str = "LocalNotification";
