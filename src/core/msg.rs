use serde::{Deserialize, Serialize};

pub mod system;
pub mod widget;

use system::SystemMsg;
use widget::WidgetMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Widget operations (delegated to WidgetState)
    Widget(WidgetMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(_) => false,
            Msg::Widget(msg) => msg.is_frequent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::System(SystemMsg::Resize(80, 24)).is_frequent());
        assert!(Msg::Widget(WidgetMsg::AnimationTick).is_frequent());
        assert!(!Msg::Widget(WidgetMsg::Next).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(Msg::Widget(WidgetMsg::Next), Msg::Widget(WidgetMsg::Previous));
    }

    #[test]
    fn test_msg_serialization() -> serde_json::Result<()> {
        let msg = Msg::Widget(WidgetMsg::HoverEnter("t1".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
