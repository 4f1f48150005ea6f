use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Repeat intervals the native scheduler understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatInterval {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl RepeatInterval {
    /// The interval name as the native side expects it
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            RepeatInterval::Second => "second",
            RepeatInterval::Minute => "minute",
            RepeatInterval::Hour => "hour",
            RepeatInterval::Day => "day",
            RepeatInterval::Week => "week",
            RepeatInterval::Month => "month",
            RepeatInterval::Year => "year",
        }
    }
}

/// Descriptor for a single local notification
///
/// Identity is the integer `id`, unique within the device's pending/triggered
/// set. Fields left unset are filled from [`NotificationDefaults`] during
/// scheduling; once handed to the bridge the native side owns the lifecycle
/// (pending, triggered, cleared/canceled).
///
/// The field set is closed, so only these whitelisted properties ever cross
/// the bridge.
///
/// [`NotificationDefaults`]: crate::notifications::NotificationDefaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Trigger time; absent means "now"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<DateTime<Utc>>,

    /// Repeat interval, if the notification recurs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub every: Option<RepeatInterval>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<String>,

    /// Opaque application payload, stored and echoed back by the native side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Reference to a registered action group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_group_id: Option<String>,
}

impl Notification {
    /// Start a descriptor with the given id
    pub fn with_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

/// Ordered list of notification ids, normalized from scalar or sequence input
///
/// No uniqueness is enforced on this side of the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdList(pub Vec<i32>);

impl From<i32> for IdList {
    fn from(id: i32) -> Self {
        IdList(vec![id])
    }
}

impl From<Vec<i32>> for IdList {
    fn from(ids: Vec<i32>) -> Self {
        IdList(ids)
    }
}

impl From<&[i32]> for IdList {
    fn from(ids: &[i32]) -> Self {
        IdList(ids.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for IdList {
    fn from(ids: [i32; N]) -> Self {
        IdList(ids.to_vec())
    }
}

/// Selection for the notification query family
///
/// Chooses between the singular and plural wire actions explicitly, instead
/// of inspecting argument types at runtime: `One` issues the singular action
/// with a bare id payload, `Many` the plural action with an id array, `All`
/// the plural action with a null payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationQuery {
    All,
    One(i32),
    Many(Vec<i32>),
}

impl From<i32> for NotificationQuery {
    fn from(id: i32) -> Self {
        NotificationQuery::One(id)
    }
}

impl From<Vec<i32>> for NotificationQuery {
    fn from(ids: Vec<i32>) -> Self {
        NotificationQuery::Many(ids)
    }
}

impl From<&[i32]> for NotificationQuery {
    fn from(ids: &[i32]) -> Self {
        NotificationQuery::Many(ids.to_vec())
    }
}

/// Flags controlling how a schedule call runs
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleOptions {
    /// Skip the permission check and dispatch immediately
    pub skip_permission: bool,
}

/// Result of a schedule call
///
/// Permission denial completes the operation without error and without any
/// bridge call; it is an outcome, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    /// The batch went out; carries the bridge's verbatim result
    Dispatched(Value),
    /// Permission was denied, nothing was sent
    PermissionDenied,
}

/// One user-facing response action inside an action group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAction {
    pub id: String,
    pub title: String,
    /// Whether activating the action brings the app to the foreground
    #[serde(default)]
    pub foreground: bool,
}
