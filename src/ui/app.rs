//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::TransactionsApi;
use crate::consts::cli_consts::ui::{poll_interval, splash_duration};
use crate::dates::DateStyle;
use crate::events::{Event as WorkerEvent, EventType};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::EventSender;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Copy)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub date_style: DateStyle,
}

impl UIConfig {
    pub fn new(with_background_color: bool, date_style: DateStyle) -> Self {
        Self {
            with_background_color,
            date_style,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The transactions dashboard.
    Dashboard(Box<DashboardState>),
}

/// What the loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Client handed to the dashboard when it is mounted.
    api: Arc<dyn TransactionsApi>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives activity events from the loader.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Handed to the dashboard so its loads can report activity.
    event_sender: EventSender,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        api: Arc<dyn TransactionsApi>,
        event_sender: EventSender,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            api,
            current_screen: Screen::Splash,
            event_receiver,
            event_sender,
            ui_config,
        }
    }

    /// Leaves the splash screen and activates the dashboard, which starts its load.
    fn show_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.api.clone(),
            self.event_sender.clone(),
            self.start_time,
            self.ui_config,
        );
        state.add_event(WorkerEvent::view(
            "Dashboard activated".to_string(),
            EventType::Refresh,
        ));
        state.activate();
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Deactivates the dashboard, cancelling a load that has not finished.
    fn close(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.deactivate();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        // Handle exit events
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.close();
            return KeyAction::Quit;
        }

        match &mut self.current_screen {
            Screen::Splash => {
                // Any key press will skip the splash screen
                self.show_dashboard();
            }
            Screen::Dashboard(state) => match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    state.retry();
                }
                KeyCode::Up | KeyCode::Char('k') => state.move_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => state.move_selection(1),
                _ => {}
            },
        }
        KeyAction::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            // Add event to dashboard queue if it exists
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= splash_duration()
        {
            app.show_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) == KeyAction::Quit {
                    return Ok(());
                }
            }
        }

        // Let the loader task make progress on a current-thread runtime
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTransactionsApi;
    use crate::environment::Environment;
    use crate::test_support::{GatedApi, sample_response};
    use crate::ui::dashboard::LoadState;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(api: Arc<dyn TransactionsApi>) -> App {
        let (sender, receiver) = mpsc::channel(100);
        App::new(
            api,
            EventSender::new(sender),
            receiver,
            UIConfig::new(false, DateStyle::DAY_MONTH_YEAR),
        )
    }

    #[tokio::test]
    // Skipping the splash mounts the dashboard, which fetches exactly once.
    async fn test_splash_key_activates_dashboard() {
        let mut mock = MockTransactionsApi::new();
        mock.expect_environment().return_const(Environment::Local);
        mock.expect_get_transactions()
            .times(1)
            .returning(|| Ok(sample_response()));
        let mut app = app(Arc::new(mock));

        assert_eq!(app.handle_key(key(KeyCode::Enter)), KeyAction::Continue);
        let Screen::Dashboard(state) = &mut app.current_screen else {
            panic!("expected the dashboard");
        };
        assert!(state.is_active());

        for _ in 0..200 {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            state.update();
            if !matches!(state.load_state(), LoadState::Loading) {
                break;
            }
        }
        assert_eq!(state.load_state(), &LoadState::Loaded(sample_response()));
    }

    #[tokio::test]
    // Quitting while the request is pending cancels it.
    async fn test_quit_deactivates_dashboard() {
        let api = Arc::new(GatedApi::new());
        let mut app = app(api.clone());

        app.handle_key(key(KeyCode::Enter));
        while api.calls() == 0 {
            tokio::task::yield_now().await;
        }

        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        let Screen::Dashboard(state) = &app.current_screen else {
            panic!("expected the dashboard");
        };
        assert!(!state.is_active());

        api.open();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(api.completed(), 0);
    }

    #[tokio::test]
    async fn test_escape_on_splash_quits() {
        let mut mock = MockTransactionsApi::new();
        mock.expect_environment().return_const(Environment::Local);
        mock.expect_get_transactions().never();
        let mut app = app(Arc::new(mock));

        assert_eq!(app.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert!(matches!(app.current_screen, Screen::Splash));
    }
}
