use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{system::SystemMsg, widget::WidgetMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::widget::WidgetType,
    presentation::{
        config::keybindings::{normalize, Action},
        hit_map::{HitMap, HitTarget},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
///
/// `hits` is the hit map of the last rendered frame; pointer events are
/// resolved against it.
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState, hits: &HitMap) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state, hits),

        // Notifications
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // The tick drives the animation clock
        RawMsg::Tick => vec![Msg::Widget(WidgetMsg::AnimationTick)],
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if key.modifiers.is_empty() {
            return translate_digit(c, state);
        }
    }

    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![normalize(key)]) {
        return translate_action_to_msg(action);
    }

    vec![] // No matching keybinding found
}

/// Digits jump to a carousel dot or promote a featured alternate
fn translate_digit(c: char, state: &AppState) -> Vec<Msg> {
    let Some(position) = c.to_digit(10).map(|d| d as usize) else {
        return vec![];
    };
    let slot = position.saturating_sub(1);

    match state.widget.config.widget_type {
        WidgetType::Carousel => vec![Msg::Widget(WidgetMsg::GoTo(slot))],
        WidgetType::Featured => vec![Msg::Widget(WidgetMsg::PromoteAlternate(slot))],
        _ => vec![],
    }
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Previous => vec![Msg::Widget(WidgetMsg::Previous)],
        Action::Next => vec![Msg::Widget(WidgetMsg::Next)],
        Action::ToggleAutoplay => vec![Msg::Widget(WidgetMsg::ToggleAutoplay)],
        Action::CycleLayout => vec![Msg::Widget(WidgetMsg::CycleLayout)],
        Action::CycleTheme => vec![Msg::Widget(WidgetMsg::CycleTheme)],
        Action::CycleHover => vec![Msg::Widget(WidgetMsg::HoverCycle)],
        Action::ClearHover => vec![Msg::Widget(WidgetMsg::HoverClear)],
    }
}

/// Pointer movement drives bubble hover; left clicks activate controls
fn translate_mouse_event(mouse: MouseEvent, state: &AppState, hits: &HitMap) -> Vec<Msg> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            translate_pointer_move(mouse.column, mouse.row, state, hits)
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match hits.target_at(mouse.column, mouse.row) {
                Some(HitTarget::Previous) => vec![Msg::Widget(WidgetMsg::Previous)],
                Some(HitTarget::Next) => vec![Msg::Widget(WidgetMsg::Next)],
                Some(HitTarget::Dot(index)) => vec![Msg::Widget(WidgetMsg::GoTo(*index))],
                Some(HitTarget::Alternate(id)) => vec![Msg::Widget(WidgetMsg::Promote(id.clone()))],
                Some(HitTarget::Bubble(_)) | None => vec![],
            }
        }
        _ => vec![],
    }
}

fn translate_pointer_move(column: u16, row: u16, state: &AppState, hits: &HitMap) -> Vec<Msg> {
    if state.widget.config.widget_type != WidgetType::Floating {
        return vec![];
    }

    let under_pointer = hits.bubble_at(column, row);
    let hovered = state.widget.hovered_id.as_deref();
    if under_pointer == hovered {
        return vec![];
    }

    let mut msgs = vec![];
    if let Some(previous) = hovered {
        msgs.push(Msg::Widget(WidgetMsg::HoverLeave(previous.to_string())));
    }
    if let Some(entered) = under_pointer {
        msgs.push(Msg::Widget(WidgetMsg::HoverEnter(entered.to_string())));
    }
    msgs
}
