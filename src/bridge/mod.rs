//! The native-bridge seam
//!
//! Everything this crate does ultimately funnels into one opaque asynchronous
//! call against the native notification subsystem. `NativeBridge` is that
//! single capability; platform glue (a JNI shim, an FFI layer, a message
//! channel into a webview host) implements it and owns delivery, persistence,
//! and trigger computation.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors surfaced by the native bridge
///
/// Native failures are forwarded verbatim; this layer performs no retries and
/// attaches no interpretation of its own.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("native bridge reported failure: {0}")]
    Native(String),

    #[error("unexpected response shape from action '{action}': {detail}")]
    UnexpectedResponse { action: &'static str, detail: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Wire actions understood by the native notification plugin
///
/// The set and spelling of these names is the compatibility contract with the
/// native side; `name()` yields the exact string put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeAction {
    /// Check the current permission state
    Check,
    /// Request notification permission from the user
    Request,
    /// Schedule a batch of notifications
    Schedule,
    /// Clear specific triggered notifications
    Clear,
    /// Clear all triggered notifications
    ClearAll,
    /// Cancel specific scheduled notifications
    Cancel,
    /// Cancel all scheduled notifications
    CancelAll,
    /// Is a notification present (scheduled or triggered)?
    IsPresent,
    /// Is a notification still pending?
    IsScheduled,
    /// Has a notification already fired?
    IsTriggered,
    /// All known notification ids
    Ids,
    /// Ids of pending notifications
    ScheduledIds,
    /// Ids of fired notifications
    TriggeredIds,
    /// Fetch a single notification by id
    Notification,
    /// Fetch notifications, all or by id list
    Notifications,
    /// Fetch a single pending notification by id
    ScheduledNotification,
    /// Fetch pending notifications, all or by id list
    ScheduledNotifications,
    /// Fetch a single fired notification by id
    TriggeredNotification,
    /// Fetch fired notifications, all or by id list
    TriggeredNotifications,
    /// Register an action group (category) with the native side
    RegisterCategory,
}

impl BridgeAction {
    /// The exact action name sent over the bridge
    pub fn name(&self) -> &'static str {
        match self {
            BridgeAction::Check => "check",
            BridgeAction::Request => "request",
            BridgeAction::Schedule => "schedule",
            BridgeAction::Clear => "clear",
            BridgeAction::ClearAll => "clearAll",
            BridgeAction::Cancel => "cancel",
            BridgeAction::CancelAll => "cancelAll",
            BridgeAction::IsPresent => "isPresent",
            BridgeAction::IsScheduled => "isScheduled",
            BridgeAction::IsTriggered => "isTriggered",
            BridgeAction::Ids => "ids",
            BridgeAction::ScheduledIds => "scheduledIds",
            BridgeAction::TriggeredIds => "triggeredIds",
            BridgeAction::Notification => "notification",
            BridgeAction::Notifications => "notifications",
            BridgeAction::ScheduledNotification => "scheduledNotification",
            BridgeAction::ScheduledNotifications => "scheduledNotifications",
            BridgeAction::TriggeredNotification => "triggeredNotification",
            BridgeAction::TriggeredNotifications => "triggeredNotifications",
            BridgeAction::RegisterCategory => "registerCategory",
        }
    }
}

impl std::fmt::Display for BridgeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The single capability consumed from the native collaborator
///
/// One call, one asynchronous result. No ordering guarantee holds between two
/// outstanding invocations, and a call cannot be aborted once issued.
#[async_trait]
pub trait NativeBridge: Send + Sync {
    /// Invoke `action` on the named native plugin with the given payload.
    async fn invoke(
        &self,
        plugin: &str,
        action: BridgeAction,
        payload: Value,
    ) -> BridgeResult<Value>;
}
