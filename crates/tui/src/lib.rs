//! Terminal console for Sentinel.
//!
//! Owns the ratatui event loop and wires together the background tasks:
//! - Synthetic metrics feed (rolling 24h window on a fixed cadence)
//! - AI log-analyst queries (spawned per question, replies via the event bus)

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use sentinel_analyst::LogAnalyst;
use sentinel_config::SentinelConfig;
use sentinel_core::{Message, Result, SentinelError};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::info;

pub mod app;
pub mod theme;
pub mod ui;

use app::App;

/// Start the console.  Blocks until the user quits.
pub fn run(config: SentinelConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();

    // Background tasks publish onto one application event channel.
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(16);

    let (feed, mut feed_rx) = {
        let _guard = runtime.enter();
        sentinel_metrics::spawn_feed(config.feed.interval_ms, config.feed.seed)
    };
    let forward_tx = msg_tx.clone();
    runtime.spawn(async move {
        while let Some(window) = feed_rx.recv().await {
            if forward_tx
                .send(Message::WindowAdvanced(window))
                .await
                .is_err()
            {
                break;
            }
        }
    });

    let analyst = Arc::new(LogAnalyst::from_config(&config.analyst));

    // The feed publishes its seeded window immediately; wait for it so the
    // charts never render empty.
    let Some(Message::WindowAdvanced(first)) = msg_rx.blocking_recv() else {
        return Err(SentinelError::Terminal(
            "metrics feed ended before the first window".to_string(),
        ));
    };
    let mut app = App::new(first);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let poll = Duration::from_millis(config.ui.poll_ms);
    let res = event_loop(
        &mut terminal,
        &mut app,
        &mut msg_rx,
        &msg_tx,
        &analyst,
        &handle,
        poll,
    );

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    feed.stop();

    res
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    analyst: &Arc<LogAnalyst>,
    handle: &Handle,
    poll: Duration,
) -> Result<()> {
    loop {
        // Fold in everything the background tasks produced since last frame.
        while let Ok(message) = msg_rx.try_recv() {
            app.on_message(message);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(query) = app.on_key(key) {
                        dispatch_query(query, app.log_context(), msg_tx, analyst, handle);
                    }
                }
            }
        }

        if app.should_quit {
            info!("console shutting down");
            return Ok(());
        }
    }
}

/// Run one analyst query off-thread; the reply comes back through the event
/// channel. The metrics cadence is unaffected while the call is outstanding.
fn dispatch_query(
    query: String,
    context: String,
    msg_tx: &mpsc::Sender<Message>,
    analyst: &Arc<LogAnalyst>,
    handle: &Handle,
) {
    let analyst = Arc::clone(analyst);
    let msg_tx = msg_tx.clone();
    handle.spawn(async move {
        let reply = analyst.analyze(&query, &context).await;
        let _ = msg_tx.send(Message::AnalystReply(reply)).await;
    });
}
