pub mod bridge;
pub mod events;
pub mod notifications;
pub mod platform;

pub use bridge::{BridgeAction, BridgeError, BridgeResult, NativeBridge};
pub use events::EventRegistry;
pub use notifications::LocalNotificationClient;
pub use platform::Platform;
