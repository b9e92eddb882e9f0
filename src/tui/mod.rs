//! Terminal shell for Strictly Reversi.

mod app;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::Intent;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use strictly_reversi::{
    FileGameRepository, FlowContext, FlowError, GameFlow, Notification, QueueDispatcher,
    ReversiConfig, StateOutput, Work,
};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

type Flow = GameFlow<FileGameRepository>;

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: ReversiConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,strictly_reversi=debug")
            }),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(save_path = %config.save_path().display(), "Starting Strictly Reversi");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Event loop: draw, drain deferred work and notifications, then read keys.
///
/// Everything that touches the flow runs on this task. Delayed work is
/// parked on tokio timers and comes back through the work queue.
#[instrument(skip_all)]
async fn run_game<B: Backend>(terminal: &mut Terminal<B>, config: &ReversiConfig) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let (dispatcher, mut work) = QueueDispatcher::new();
    let (output, mut notifications) = StateOutput::channel();
    let context = FlowContext::new(Arc::new(dispatcher), output, config.thinking_delay());
    let mut flow = GameFlow::launch(FileGameRepository::new(config.save_path()), context);
    let mut app = App::new();
    let animation = config.animation();

    loop {
        drain(&mut flow, &mut app, &mut work, &mut notifications, animation);

        if app.tick(Instant::now()) {
            report(&mut app, flow.finish_one_cell_update(true));
            continue;
        }

        terminal.draw(|f| ui::draw(f, &app, flow.game()))?;

        if event::poll(Duration::from_millis(30))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(intent) = app.intent_for(key.code) {
                apply_intent(&mut flow, &mut app, intent);
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        sleep(Duration::from_millis(1)).await;
    }
}

/// Runs queued work and handles notifications until both queues are empty.
fn drain(
    flow: &mut Flow,
    app: &mut App,
    work: &mut mpsc::UnboundedReceiver<Work>,
    notifications: &mut mpsc::UnboundedReceiver<Notification>,
    animation: Duration,
) {
    loop {
        let mut progressed = false;

        while let Ok(item) = work.try_recv() {
            item();
            progressed = true;
        }
        while let Ok(notification) = notifications.try_recv() {
            handle_notification(flow, app, notification, animation);
            progressed = true;
        }

        if !progressed {
            return;
        }
    }
}

fn handle_notification(
    flow: &mut Flow,
    app: &mut App,
    notification: Notification,
    animation: Duration,
) {
    match notification {
        Notification::GameUpdated(game) => app.show_game(&game),
        Notification::DiskPlaced(placement) => {
            if !app.place(placement, animation) {
                report(app, flow.finish_one_cell_update(true));
            }
        }
        Notification::Thinking(thinking) => app.set_thinking(thinking),
        Notification::PassAlert => app.alert_pass(),
        Notification::MoveDecided(at) => report(app, flow.input_by_scripted(at)),
    }
}

#[instrument(skip(flow, app))]
fn apply_intent(flow: &mut Flow, app: &mut App, intent: Intent) {
    app.set_status("");

    let result = match intent {
        Intent::MoveCursor(_) | Intent::RequestReset | Intent::CancelReset | Intent::Quit => {
            Ok(())
        }
        Intent::Place => flow.input_by_user(app.cursor()),
        Intent::AcceptPass => flow.accept_pass(),
        Intent::ConfirmReset => flow.reset(),
        Intent::ToggleControl(side) => {
            let control = flow.game().player_control(side).toggled();
            flow.change_control(side, control)
        }
        Intent::SkipAnimation => {
            if app.skip_animation() {
                flow.finish_one_cell_update(false)
            } else {
                Ok(())
            }
        }
    };
    report(app, result);
}

fn report(app: &mut App, result: Result<(), FlowError>) {
    match result {
        Ok(()) => {}
        Err(FlowError::DiskPlacement(e)) => {
            debug!(error = %e, "Rejected placement");
            app.set_status("You cannot place there");
        }
        Err(e @ FlowError::InvalidAction { .. }) => {
            debug!(error = %e, "Ignoring event");
        }
        Err(FlowError::Save(e)) => {
            warn!(error = %e, "Save failed");
            app.set_status(format!("Could not save the game: {}", e.message));
        }
    }
}
