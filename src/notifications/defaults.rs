//! Process-wide fallback values for notification descriptors
//!
//! Every descriptor handed to `schedule` gets its unset fields filled from
//! these defaults before conversion. Overrides are whitelist-only: a patch can
//! only touch fields that exist in the defaults, and unknown keys in a parsed
//! patch are dropped silently.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::notifications::types::RepeatInterval;

/// Configuration for descriptor fallback values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationDefaults {
    pub title: String,
    pub text: String,
    pub badge: i32,
    pub sound: String,
    pub icon: String,
    pub small_icon: String,
    pub every: Option<RepeatInterval>,
    pub data: Option<Value>,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            title: String::new(),
            text: String::new(),
            badge: 0,
            sound: "res://platform_default".to_string(),
            icon: "res://icon".to_string(),
            small_icon: "res://ic_popup_reminder".to_string(),
            every: None,
            data: None,
        }
    }
}

/// Partial override of [`NotificationDefaults`]
///
/// Each field is optional; only the set ones are applied. Unknown keys cannot
/// be expressed here, and parsing ignores them, so an override can never
/// introduce a key the defaults do not already carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultsPatch {
    pub title: Option<String>,
    pub text: Option<String>,
    pub badge: Option<i32>,
    pub sound: Option<String>,
    pub icon: Option<String>,
    pub small_icon: Option<String>,
    pub every: Option<RepeatInterval>,
    pub data: Option<Value>,
}

impl DefaultsPatch {
    /// Parse a patch from a TOML document, dropping unknown keys
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Parse a patch from a JSON value, dropping unknown keys
    pub fn from_json(input: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(input)
    }
}

impl NotificationDefaults {
    /// Apply a patch, overwriting only the fields it sets
    pub fn apply(&mut self, patch: DefaultsPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(badge) = patch.badge {
            self.badge = badge;
        }
        if let Some(sound) = patch.sound {
            self.sound = sound;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(small_icon) = patch.small_icon {
            self.small_icon = small_icon;
        }
        if let Some(every) = patch.every {
            self.every = Some(every);
        }
        if let Some(data) = patch.data {
            self.data = Some(data);
        }
    }
}
