use std::sync::{Arc, RwLock};

use serde_json::{json, Value};
use tracing::debug;

use crate::bridge::{BridgeAction, BridgeError, BridgeResult, NativeBridge};
use crate::events::{EventRegistry, Listener};
use crate::notifications::convert::{merge_defaults, normalize_ids, to_wire};
use crate::notifications::defaults::{DefaultsPatch, NotificationDefaults};
use crate::notifications::types::{
    IdList, Notification, NotificationAction, NotificationQuery, ScheduleOptions, ScheduleOutcome,
};
use crate::notifications::PLUGIN_NAME;
use crate::platform::Platform;

/// Client facade for the native local-notification plugin
///
/// Normalizes caller input (defaults merge, scalar-vs-list coercion, wire
/// conversion) and forwards each operation as exactly one bridge call. Owns
/// the process-wide defaults and the event listener registry; everything else
/// lives on the native side.
pub struct LocalNotificationClient<B: NativeBridge> {
    bridge: Arc<B>,
    platform: Platform,
    defaults: RwLock<NotificationDefaults>,
    events: EventRegistry,
}

impl<B: NativeBridge> LocalNotificationClient<B> {
    /// Create a client over the given bridge and host platform
    pub fn new(bridge: Arc<B>, platform: Platform) -> Self {
        Self {
            bridge,
            platform,
            defaults: RwLock::new(NotificationDefaults::default()),
            events: EventRegistry::new(),
        }
    }

    /// Replace the initial defaults wholesale
    pub fn with_defaults(mut self, defaults: NotificationDefaults) -> Self {
        self.defaults = RwLock::new(defaults);
        self
    }

    async fn invoke(&self, action: BridgeAction, payload: Value) -> BridgeResult<Value> {
        self.bridge.invoke(PLUGIN_NAME, action, payload).await
    }

    // ---- permissions ----

    /// Check whether the app may show notifications
    ///
    /// On platforms without a runtime permission prompt this resolves to
    /// `true` without touching the bridge.
    pub async fn has_permission(&self) -> BridgeResult<bool> {
        if !self.platform.requires_permission_prompt() {
            debug!("Platform {} needs no permission prompt", self.platform.name());
            return Ok(true);
        }

        let result = self.invoke(BridgeAction::Check, Value::Null).await?;
        expect_bool(BridgeAction::Check, result)
    }

    /// Ask the user for notification permission
    ///
    /// Same short-circuit as [`has_permission`](Self::has_permission) on
    /// platforms without a prompt.
    pub async fn request_permission(&self) -> BridgeResult<bool> {
        if !self.platform.requires_permission_prompt() {
            debug!("Platform {} needs no permission prompt", self.platform.name());
            return Ok(true);
        }

        let result = self.invoke(BridgeAction::Request, Value::Null).await?;
        expect_bool(BridgeAction::Request, result)
    }

    // ---- scheduling ----

    /// Schedule a batch of notifications
    ///
    /// Unless `options.skip_permission` is set, permission is requested first;
    /// denial completes the call with [`ScheduleOutcome::PermissionDenied`]
    /// and issues no `schedule` bridge call at all. Otherwise every descriptor
    /// has the defaults merged in and is wire-converted, and the whole batch
    /// goes out as one bridge call.
    pub async fn schedule(
        &self,
        notifications: impl IntoIterator<Item = Notification>,
        options: ScheduleOptions,
    ) -> BridgeResult<ScheduleOutcome> {
        let granted = if options.skip_permission {
            true
        } else {
            self.request_permission().await?
        };

        if !granted {
            debug!("Notification permission denied, schedule call dropped");
            return Ok(ScheduleOutcome::PermissionDenied);
        }

        let defaults = self.defaults.read().unwrap().clone();
        let mut batch = Vec::new();
        for mut notification in notifications {
            merge_defaults(&mut notification, &defaults);
            batch.push(to_wire(&notification)?);
        }

        debug!("Scheduling {} notification(s)", batch.len());
        let result = self.invoke(BridgeAction::Schedule, Value::Array(batch)).await?;
        Ok(ScheduleOutcome::Dispatched(result))
    }

    /// Schedule a single notification
    pub async fn schedule_one(
        &self,
        notification: Notification,
        options: ScheduleOptions,
    ) -> BridgeResult<ScheduleOutcome> {
        self.schedule([notification], options).await
    }

    // ---- clearing and canceling ----

    /// Clear the given triggered notifications
    pub async fn clear(&self, ids: impl Into<IdList>) -> BridgeResult<Value> {
        self.invoke(BridgeAction::Clear, normalize_ids(ids.into()))
            .await
    }

    /// Clear all triggered notifications
    pub async fn clear_all(&self) -> BridgeResult<Value> {
        self.invoke(BridgeAction::ClearAll, Value::Null).await
    }

    /// Cancel the given scheduled notifications
    pub async fn cancel(&self, ids: impl Into<IdList>) -> BridgeResult<Value> {
        self.invoke(BridgeAction::Cancel, normalize_ids(ids.into()))
            .await
    }

    /// Cancel all scheduled notifications
    pub async fn cancel_all(&self) -> BridgeResult<Value> {
        self.invoke(BridgeAction::CancelAll, Value::Null).await
    }

    // ---- queries ----

    /// Is a notification present, scheduled or triggered?
    pub async fn is_present(&self, id: i32) -> BridgeResult<bool> {
        let result = self.invoke(BridgeAction::IsPresent, json!(id)).await?;
        expect_bool(BridgeAction::IsPresent, result)
    }

    /// Is a notification still pending?
    pub async fn is_scheduled(&self, id: i32) -> BridgeResult<bool> {
        let result = self.invoke(BridgeAction::IsScheduled, json!(id)).await?;
        expect_bool(BridgeAction::IsScheduled, result)
    }

    /// Has a notification already fired?
    pub async fn is_triggered(&self, id: i32) -> BridgeResult<bool> {
        let result = self.invoke(BridgeAction::IsTriggered, json!(id)).await?;
        expect_bool(BridgeAction::IsTriggered, result)
    }

    /// Ids of all known notifications
    pub async fn get_all_ids(&self) -> BridgeResult<Vec<i32>> {
        let result = self.invoke(BridgeAction::Ids, Value::Null).await?;
        expect_ids(BridgeAction::Ids, result)
    }

    /// Ids of all pending notifications
    pub async fn get_scheduled_ids(&self) -> BridgeResult<Vec<i32>> {
        let result = self.invoke(BridgeAction::ScheduledIds, Value::Null).await?;
        expect_ids(BridgeAction::ScheduledIds, result)
    }

    /// Ids of all fired notifications
    pub async fn get_triggered_ids(&self) -> BridgeResult<Vec<i32>> {
        let result = self.invoke(BridgeAction::TriggeredIds, Value::Null).await?;
        expect_ids(BridgeAction::TriggeredIds, result)
    }

    async fn query(
        &self,
        singular: BridgeAction,
        plural: BridgeAction,
        query: NotificationQuery,
    ) -> BridgeResult<Value> {
        match query {
            NotificationQuery::All => self.invoke(plural, Value::Null).await,
            NotificationQuery::One(id) => self.invoke(singular, json!(id)).await,
            NotificationQuery::Many(ids) => {
                self.invoke(plural, normalize_ids(IdList(ids))).await
            }
        }
    }

    /// Fetch notifications, all of them or a selection by id
    ///
    /// The bridge result is returned verbatim.
    pub async fn get(&self, query: impl Into<NotificationQuery>) -> BridgeResult<Value> {
        self.query(
            BridgeAction::Notification,
            BridgeAction::Notifications,
            query.into(),
        )
        .await
    }

    /// Fetch all known notifications
    pub async fn get_all(&self) -> BridgeResult<Value> {
        self.get(NotificationQuery::All).await
    }

    /// Fetch pending notifications, all of them or a selection by id
    pub async fn get_scheduled(&self, query: impl Into<NotificationQuery>) -> BridgeResult<Value> {
        self.query(
            BridgeAction::ScheduledNotification,
            BridgeAction::ScheduledNotifications,
            query.into(),
        )
        .await
    }

    /// Fetch all pending notifications
    pub async fn get_all_scheduled(&self) -> BridgeResult<Value> {
        self.get_scheduled(NotificationQuery::All).await
    }

    /// Fetch fired notifications, all of them or a selection by id
    pub async fn get_triggered(&self, query: impl Into<NotificationQuery>) -> BridgeResult<Value> {
        self.query(
            BridgeAction::TriggeredNotification,
            BridgeAction::TriggeredNotifications,
            query.into(),
        )
        .await
    }

    /// Fetch all fired notifications
    pub async fn get_all_triggered(&self) -> BridgeResult<Value> {
        self.get_triggered(NotificationQuery::All).await
    }

    // ---- action groups ----

    /// Register a named group of response actions with the native side
    pub async fn add_action_group(
        &self,
        id: &str,
        actions: &[NotificationAction],
    ) -> BridgeResult<Value> {
        let config = json!({
            "actionGroupId": id,
            "actions": actions,
        });
        self.invoke(BridgeAction::RegisterCategory, config).await
    }

    // ---- defaults ----

    /// Snapshot of the current defaults
    pub fn defaults(&self) -> NotificationDefaults {
        self.defaults.read().unwrap().clone()
    }

    /// Apply a whitelist-only override to the defaults
    pub fn update_defaults(&self, patch: DefaultsPatch) {
        self.defaults.write().unwrap().apply(patch);
    }

    // ---- events ----

    /// Register a listener for a notification lifecycle event
    pub fn on(&self, event: &str, listener: Listener) {
        self.events.on(event, listener);
    }

    /// Unregister a previously registered listener
    pub fn un(&self, event: &str, listener: &Listener) {
        self.events.un(event, listener);
    }

    /// Dispatch an event to registered listeners
    ///
    /// Called by the native glue when the bridge reports a lifecycle event.
    pub fn fire(&self, event: &str, payload: &Value) {
        self.events.emit(event, payload);
    }

    /// Number of listeners registered for an event
    pub fn listener_count(&self, event: &str) -> usize {
        self.events.listener_count(event)
    }
}

fn expect_bool(action: BridgeAction, value: Value) -> BridgeResult<bool> {
    value.as_bool().ok_or_else(|| BridgeError::UnexpectedResponse {
        action: action.name(),
        detail: format!("expected boolean, got {value}"),
    })
}

fn expect_ids(action: BridgeAction, value: Value) -> BridgeResult<Vec<i32>> {
    serde_json::from_value(value.clone()).map_err(|_| BridgeError::UnexpectedResponse {
        action: action.name(),
        detail: format!("expected id array, got {value}"),
    })
}
