use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::*;

use plaudit::{
    core::{
        msg::{widget::WidgetMsg, Msg},
        state::AppState,
        update::update,
    },
    domain::{carousel::AUTOPLAY_PERIOD, widget::WidgetType},
    infrastructure::autoplay::AutoplayScheduler,
    integration::runtime::Runtime,
    presentation::hit_map::HitMap,
    test_helpers::{app_state, still_widget},
};

fn carousel(n: usize) -> AppState {
    app_state(still_widget(WidgetType::Carousel), n)
}

fn apply(state: AppState, msgs: impl IntoIterator<Item = WidgetMsg>) -> AppState {
    msgs.into_iter()
        .fold(state, |state, msg| update(Msg::Widget(msg), state).0)
}

/// Runtime with a scheduler wired to it, reconciled once
fn armed_runtime(state: AppState) -> (Runtime, AutoplayScheduler) {
    let runtime = Runtime::new(state);
    let mut scheduler = AutoplayScheduler::new(AUTOPLAY_PERIOD, runtime.get_sender());
    scheduler.reconcile(runtime.state().widget.autoplay_key());
    (runtime, scheduler)
}

async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
    tokio::task::yield_now().await;
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn test_next_n_times_is_identity(#[case] n: usize) {
    let state = apply(carousel(n), vec![WidgetMsg::Next; n]);
    assert_eq!(state.widget.current_index(), 0);
}

#[test]
fn test_previous_from_first_wraps_to_last() {
    let state = apply(carousel(4), [WidgetMsg::Previous]);
    assert_eq!(state.widget.current_index(), 3);
}

#[test]
fn test_dot_selects_slide() {
    let state = apply(carousel(4), [WidgetMsg::GoTo(2)]);
    assert_eq!(state.widget.current_index(), 2);

    let state = apply(state, [WidgetMsg::GoTo(9)]);
    assert_eq!(state.widget.current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_one_period_advances_by_one() {
    let (mut runtime, mut scheduler) = armed_runtime(carousel(3));
    assert!(scheduler.is_armed());

    advance(AUTOPLAY_PERIOD - Duration::from_millis(10)).await;
    runtime.process_all_messages(&HitMap::default());
    assert_eq!(runtime.state().widget.current_index(), 0);

    advance(Duration::from_millis(10)).await;
    runtime.process_all_messages(&HitMap::default());
    assert_eq!(runtime.state().widget.current_index(), 1);

    advance(AUTOPLAY_PERIOD * 2).await;
    runtime.process_all_messages(&HitMap::default());
    assert_eq!(runtime.state().widget.current_index(), 0);

    scheduler.stop();
}

#[tokio::test(start_paused = true)]
async fn test_no_advance_without_autoplay() {
    let mut state = carousel(3);
    state.widget.config.settings.autoplay = false;
    let (mut runtime, scheduler) = armed_runtime(state);

    assert!(!scheduler.is_armed());
    advance(AUTOPLAY_PERIOD * 3).await;
    runtime.process_all_messages(&HitMap::default());

    assert_eq!(runtime.state().widget.current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_single_slide_never_arms() {
    let (_, scheduler) = armed_runtime(carousel(1));
    assert!(!scheduler.is_armed());
}

#[tokio::test(start_paused = true)]
async fn test_tick_queued_before_toggle_is_dropped() {
    let (mut runtime, mut scheduler) = armed_runtime(carousel(3));

    // the tick is waiting in the channel when autoplay is switched off
    advance(AUTOPLAY_PERIOD).await;
    runtime.send_msg(Msg::Widget(WidgetMsg::ToggleAutoplay));
    runtime.process_all_messages(&HitMap::default());
    scheduler.reconcile(runtime.state().widget.autoplay_key());

    assert_eq!(runtime.state().widget.current_index(), 0);
    assert!(!scheduler.is_armed());

    advance(AUTOPLAY_PERIOD * 2).await;
    runtime.process_all_messages(&HitMap::default());
    assert_eq!(runtime.state().widget.current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_switching_away_from_carousel_disarms() {
    let (mut runtime, mut scheduler) = armed_runtime(carousel(3));

    runtime.send_msg(Msg::Widget(WidgetMsg::SetLayout(WidgetType::Wall)));
    runtime.process_all_messages(&HitMap::default());
    scheduler.reconcile(runtime.state().widget.autoplay_key());
    assert!(!scheduler.is_armed());

    runtime.send_msg(Msg::Widget(WidgetMsg::SetLayout(WidgetType::Carousel)));
    runtime.process_all_messages(&HitMap::default());
    scheduler.reconcile(runtime.state().widget.autoplay_key());
    assert!(scheduler.is_armed());
}
