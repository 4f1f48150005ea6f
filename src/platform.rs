use serde::{Deserialize, Serialize};

/// The platform this process runs on, as reported by the host environment
///
/// Queried once at client construction; never re-derived. Its only job here is
/// deciding whether notification permissions are gated behind a runtime
/// prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Ios,
    Android,
    /// Any other host (browser shells, desktop test harnesses)
    Other(String),
}

impl Platform {
    /// Parse the platform name string the host environment reports
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "ios" => Platform::Ios,
            "android" => Platform::Android,
            _ => Platform::Other(name.to_string()),
        }
    }

    /// Whether the OS gates notification delivery behind a runtime prompt
    ///
    /// Where this is false, permission operations short-circuit to granted
    /// without ever touching the bridge.
    pub fn requires_permission_prompt(&self) -> bool {
        matches!(self, Platform::Ios)
    }

    /// Human-readable platform name
    pub fn name(&self) -> &str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Other(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parsing_is_case_insensitive() {
        assert_eq!(Platform::from_name("iOS"), Platform::Ios);
        assert_eq!(Platform::from_name("IOS"), Platform::Ios);
        assert_eq!(Platform::from_name("android"), Platform::Android);
        assert_eq!(
            Platform::from_name("browser"),
            Platform::Other("browser".to_string())
        );
    }

    #[test]
    fn test_only_ios_prompts_for_permission() {
        assert!(Platform::Ios.requires_permission_prompt());
        assert!(!Platform::Android.requires_permission_prompt());
        assert!(!Platform::Other("browser".into()).requires_permission_prompt());
    }
}
