use crate::core::{
    cmd::Cmd,
    msg::{system::SystemMsg, widget::WidgetMsg, Msg},
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Widget messages (delegated to WidgetState)
        Msg::Widget(widget_msg) => {
            let announce = StatusLine::for_msg(&widget_msg);
            let mut commands = state.widget.update(widget_msg);
            if let Some(line) = announce {
                let message = line.render(&state);
                commands.extend(state.system.update(SystemMsg::UpdateStatusMessage(message)));
            }
            (state, commands)
        }
    }
}

/// Status line shown after user-visible configuration changes
enum StatusLine {
    Layout,
    Theme,
    Autoplay,
}

impl StatusLine {
    fn for_msg(msg: &WidgetMsg) -> Option<Self> {
        match msg {
            WidgetMsg::CycleLayout | WidgetMsg::SetLayout(_) => Some(Self::Layout),
            WidgetMsg::CycleTheme => Some(Self::Theme),
            WidgetMsg::ToggleAutoplay => Some(Self::Autoplay),
            _ => None,
        }
    }

    fn render(&self, state: &AppState) -> String {
        let widget = &state.widget.config;
        match self {
            Self::Layout => format!("Layout: {}", widget.widget_type),
            Self::Theme => format!("Theme: {}", widget.settings.theme),
            Self::Autoplay if widget.settings.autoplay => "Autoplay on".to_string(),
            Self::Autoplay => "Autoplay off".to_string(),
        }
    }
}
