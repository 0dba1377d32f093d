use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    domain::{carousel::AUTOPLAY_PERIOD, testimonial::Testimonial},
    infrastructure::{
        autoplay::AutoplayScheduler,
        config::Config,
        tui::{self, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::{components::Components, hit_map::HitMap},
};

/// Drives the Elm loop against a terminal: events in, update, commands out,
/// frame drawn.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    components: Components,
    // regions of the last drawn frame; pointer events resolve against them
    hits: HitMap,
    autoplay: AutoplayScheduler,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
}

impl AppRunner {
    pub fn new(
        config: Config,
        testimonials: Vec<Testimonial>,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
    ) -> Self {
        let mut runtime = Runtime::new(AppState::new_with_config(config, testimonials));
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx);
        runtime.add_render_request_sender(render_tx);
        let autoplay = AutoplayScheduler::new(AUTOPLAY_PERIOD, runtime.get_sender());

        Self {
            runtime,
            tui,
            components: Components::new(),
            hits: HitMap::default(),
            autoplay,
            tui_rx,
            render_rx,
        }
    }

    /// Replace the carousel auto-advance period
    pub fn autoplay_period(mut self, period: Duration) -> Self {
        self.autoplay = AutoplayScheduler::new(period, self.runtime.get_sender());
        self
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn is_autoplay_armed(&self) -> bool {
        self.autoplay.is_armed()
    }

    /// Run until the state asks to quit or the terminal stops producing
    /// events.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.autoplay
            .reconcile(self.runtime.state().widget.autoplay_key());
        self.render().await?;

        loop {
            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            let Some(event) = event else {
                log::info!("Terminal event stream closed");
                break;
            };
            self.handle_event(event);

            self.step().await?;

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.autoplay.stop();
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// One update cycle followed by host commands, timer upkeep and a frame
    pub async fn step(&mut self) -> Result<()> {
        for line in self.runtime.run_update_cycle(&self.hits) {
            log::trace!("{line}");
        }

        let mut resumed = false;
        while let Ok(command) = self.tui_rx.try_recv() {
            resumed |= self.run_tui_command(command).await?;
        }
        if resumed {
            self.runtime.send_raw_msg(RawMsg::Resume);
            self.runtime.run_update_cycle(&self.hits);
        }
        // every step draws a frame anyway
        while self.render_rx.try_recv().is_ok() {}

        self.autoplay
            .reconcile(self.runtime.state().widget.autoplay_key());
        self.render().await
    }

    /// Queue a raw event for the next [`AppRunner::step`]
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.runtime.send_raw_msg(raw_msg);
    }

    fn handle_event(&mut self, event: tui::Event) {
        let raw_msg = match event {
            tui::Event::Quit | tui::Event::Closed => RawMsg::Quit,
            tui::Event::Tick => RawMsg::Tick,
            tui::Event::Resize(width, height) => RawMsg::Resize(width, height),
            tui::Event::Key(key) => RawMsg::Key(key),
            tui::Event::Mouse(mouse) => RawMsg::Mouse(mouse),
            tui::Event::Error => RawMsg::Error("Failed to read terminal event".to_string()),
            tui::Event::Render
            | tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_) => return,
        };
        self.runtime.send_raw_msg(raw_msg);
    }

    /// Returns whether the terminal came back from a suspend
    async fn run_tui_command(&mut self, command: TuiCommand) -> Result<bool> {
        let mut tui = self.tui.lock().await;
        match command {
            TuiCommand::Resize { width, height } => {
                tui.resize(Rect::new(0, 0, width, height))?;
                Ok(false)
            }
            TuiCommand::Suspend => {
                tui.suspend()?;
                // execution continues here once the process is resumed
                tui.enter()?;
                Ok(true)
            }
        }
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &mut self.components;
        let mut hits = HitMap::default();
        {
            let mut tui = self.tui.lock().await;
            let mut draw = |f: &mut tui::Frame<'_>| {
                hits = components.render(f, state);
            };
            tui.draw(&mut draw)?;
        }
        self.hits = hits;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::widget::WidgetType,
        infrastructure::tui::test::TestTui,
        test_helpers::{still_widget, testimonials},
    };

    fn config(widget_type: WidgetType) -> Config {
        Config {
            widget: still_widget(widget_type),
            ..Config::defaults().unwrap_or_default()
        }
    }

    fn key(code: KeyCode) -> tui::Event {
        tui::Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_runs_until_events_run_out() -> Result<()> {
        let tui = Arc::new(Mutex::new(TestTui::with_events(
            80,
            24,
            [key(KeyCode::Right), key(KeyCode::Right)],
        )?));
        let mut runner = AppRunner::new(config(WidgetType::Carousel), testimonials(3), tui.clone());

        runner.run().await?;

        assert_eq!(runner.state().widget.current_index(), 2);
        let tui = tui.lock().await;
        assert!(!tui.is_entered());
        assert_eq!(tui.draw_count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_quit_key_stops_the_loop() -> Result<()> {
        let tui = Arc::new(Mutex::new(TestTui::with_events(
            80,
            24,
            [key(KeyCode::Char('q')), key(KeyCode::Right)],
        )?));
        let mut runner = AppRunner::new(config(WidgetType::Carousel), testimonials(3), tui.clone());

        runner.run().await?;

        assert!(runner.state().system.should_quit);
        assert_eq!(runner.state().widget.current_index(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_resumes_terminal() -> Result<()> {
        let suspend = tui::Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let tui = Arc::new(Mutex::new(TestTui::with_events(80, 24, [suspend])?));
        let mut runner = AppRunner::new(config(WidgetType::Single), testimonials(1), tui.clone());

        runner.run().await?;

        assert_eq!(tui.lock().await.suspend_count(), 1);
        assert!(!runner.state().system.should_suspend);
        Ok(())
    }

    #[tokio::test]
    async fn test_autoplay_follows_layout() -> Result<()> {
        let tui = Arc::new(Mutex::new(TestTui::new(80, 24)?));
        let mut runner = AppRunner::new(config(WidgetType::Carousel), testimonials(3), tui);

        runner.step().await?;
        assert!(runner.is_autoplay_armed());

        runner.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('t'),
            KeyModifiers::NONE,
        )));
        runner.step().await?;
        assert!(!runner.is_autoplay_armed());
        Ok(())
    }
}
