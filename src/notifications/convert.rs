//! Defaults merge and wire-shape conversion
//!
//! Descriptors cross the bridge as plain JSON objects in the shape the native
//! scheduler expects: trigger times as epoch seconds, the application `data`
//! payload pre-serialized to a string, repeat intervals as their wire names.
//! Fields that are unset after the defaults merge are omitted entirely.

use serde_json::{json, Map, Value};

use crate::notifications::defaults::NotificationDefaults;
use crate::notifications::types::{IdList, Notification};

/// Fill every unset field of a descriptor from the defaults
///
/// `id` and `at` have no default: an absent id becomes `0` at wire conversion
/// and an absent trigger time means "now", both decided by the native side.
pub fn merge_defaults(notification: &mut Notification, defaults: &NotificationDefaults) {
    if notification.title.is_none() {
        notification.title = Some(defaults.title.clone());
    }
    if notification.text.is_none() {
        notification.text = Some(defaults.text.clone());
    }
    if notification.badge.is_none() {
        notification.badge = Some(defaults.badge);
    }
    if notification.sound.is_none() {
        notification.sound = Some(defaults.sound.clone());
    }
    if notification.icon.is_none() {
        notification.icon = Some(defaults.icon.clone());
    }
    if notification.small_icon.is_none() {
        notification.small_icon = Some(defaults.small_icon.clone());
    }
    if notification.every.is_none() {
        notification.every = defaults.every;
    }
    if notification.data.is_none() {
        notification.data = defaults.data.clone();
    }
}

/// Convert a merged descriptor into its wire object
pub fn to_wire(notification: &Notification) -> Result<Value, serde_json::Error> {
    let mut wire = Map::new();

    wire.insert("id".to_string(), json!(notification.id.unwrap_or(0)));

    if let Some(title) = &notification.title {
        wire.insert("title".to_string(), json!(title));
    }
    if let Some(text) = &notification.text {
        wire.insert("text".to_string(), json!(text));
    }
    if let Some(at) = &notification.at {
        wire.insert("at".to_string(), json!(at.timestamp()));
    }
    if let Some(every) = &notification.every {
        wire.insert("every".to_string(), json!(every.as_wire_str()));
    }
    if let Some(badge) = notification.badge {
        wire.insert("badge".to_string(), json!(badge));
    }
    if let Some(sound) = &notification.sound {
        wire.insert("sound".to_string(), json!(sound));
    }
    if let Some(icon) = &notification.icon {
        wire.insert("icon".to_string(), json!(icon));
    }
    if let Some(small_icon) = &notification.small_icon {
        wire.insert("smallIcon".to_string(), json!(small_icon));
    }
    if let Some(data) = &notification.data {
        // The native side stores the payload opaquely, as a string.
        wire.insert("data".to_string(), json!(serde_json::to_string(data)?));
    }
    if let Some(group) = &notification.action_group_id {
        wire.insert("actionGroupId".to_string(), json!(group));
    }

    Ok(Value::Object(wire))
}

/// Coerce an id list into its wire payload
pub fn normalize_ids(ids: IdList) -> Value {
    json!(ids.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_merge_fills_only_missing_fields() {
        let defaults = NotificationDefaults {
            title: "Fallback".to_string(),
            badge: 3,
            ..NotificationDefaults::default()
        };

        let mut notification = Notification {
            id: Some(1),
            title: Some("Explicit".to_string()),
            ..Notification::default()
        };
        merge_defaults(&mut notification, &defaults);

        assert_eq!(notification.title.as_deref(), Some("Explicit"));
        assert_eq!(notification.badge, Some(3));
        assert_eq!(notification.sound.as_deref(), Some("res://platform_default"));
    }

    #[test]
    fn test_wire_shape_trigger_time_is_epoch_seconds() {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        let notification = Notification {
            id: Some(42),
            at: Some(at),
            ..Notification::default()
        };

        let wire = to_wire(&notification).unwrap();
        assert_eq!(wire["id"], json!(42));
        assert_eq!(wire["at"], json!(at.timestamp()));
    }

    #[test]
    fn test_wire_data_payload_is_stringified() {
        let notification = Notification {
            id: Some(1),
            data: Some(json!({"kind": "chat", "room": 12})),
            ..Notification::default()
        };

        let wire = to_wire(&notification).unwrap();
        let stored = wire["data"].as_str().unwrap();
        let round: Value = serde_json::from_str(stored).unwrap();
        assert_eq!(round, json!({"kind": "chat", "room": 12}));
    }

    #[test]
    fn test_wire_missing_id_defaults_to_zero() {
        let wire = to_wire(&Notification::default()).unwrap();
        assert_eq!(wire["id"], json!(0));
        assert!(wire.get("title").is_none());
        assert!(wire.get("at").is_none());
    }

    #[test]
    fn test_normalize_ids_keeps_order() {
        assert_eq!(normalize_ids(IdList::from(vec![3, 1, 2])), json!([3, 1, 2]));
        assert_eq!(normalize_ids(IdList::from(3)), json!([3]));
    }
}
