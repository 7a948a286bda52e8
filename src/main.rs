use std::ops::ControlFlow;
use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::watch;

use dockdeck::adapters::{mock::spawn_demo_events, ChannelRefresher, MockDaemon};
use dockdeck::app::Dashboard;
use dockdeck::cli::{parse_args, run_cli_command};
use dockdeck::config::DashboardConfig;
use dockdeck::input::{dispatch, Cursor, KeybindingConfig};
use dockdeck::logging;
use dockdeck::terminal::{setup_panic_hook, TerminalManager};
use dockdeck::ui::{render, ScreenModel};

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if run_cli_command(&command) {
        return Ok(());
    }

    let config = DashboardConfig::from_env();
    logging::init(&config)?;
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(config));
    if let Err(e) = &result {
        tracing::error!("dockdeck exited with error: {:?}", e);
    }
    result
}

async fn run(config: DashboardConfig) -> Result<()> {
    let daemon = Arc::new(MockDaemon::with_fixture());
    let (refresher, mut refresh_rx) = ChannelRefresher::new();
    let demo_interval = config.demo_event_interval;

    let dashboard = Dashboard::new(daemon.clone(), Arc::new(refresher), config).await?;
    let demo = spawn_demo_events(daemon, demo_interval);

    // Keep a consumer waiting on the outbox at all times; the latest message
    // becomes the status line.
    let mut outbox_rx = dashboard
        .output_channel()
        .ok_or_else(|| eyre!("Outbox receiver already taken"))?;
    let (status_tx, mut status_rx) = watch::channel::<Option<String>>(None);
    let status_task = tokio::spawn(async move {
        while let Some(message) = outbox_rx.recv().await {
            status_tx.send_replace(Some(message));
        }
    });

    let mut manager = TerminalManager::new()?;
    let result = event_loop(&dashboard, &mut manager, &mut refresh_rx, &mut status_rx).await;
    manager.restore();

    dashboard.close();
    if let Some(handled) = dashboard.join_event_pipeline().await {
        tracing::info!("Event pipeline handled {} events", handled);
    }
    demo.abort();
    let _ = status_task.await;

    result
}

async fn event_loop(
    dashboard: &Dashboard,
    manager: &mut TerminalManager,
    refresh_rx: &mut tokio::sync::mpsc::Receiver<()>,
    status_rx: &mut watch::Receiver<Option<String>>,
) -> Result<()> {
    let bindings = KeybindingConfig::default();
    let mut cursor = Cursor::new();
    let mut event_stream = EventStream::new();
    let mut status_open = true;

    loop {
        let status = status_rx.borrow_and_update().clone();
        let model = ScreenModel::collect(dashboard, status).await;
        cursor.set_rows(model.body.rows());
        manager.terminal().draw(|frame| render(frame, &model, &cursor))?;

        tokio::select! {
            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = bindings.command_for(&key, dashboard.view_mode()) {
                        let flow = dispatch(dashboard, command, &mut cursor).await;
                        if let ControlFlow::Break(()) = flow {
                            tracing::info!("Quit requested");
                            return Ok(());
                        }
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },

            Some(()) = refresh_rx.recv() => {}

            changed = status_rx.changed(), if status_open => {
                if changed.is_err() {
                    // Outbox closed; keep the last message on screen.
                    tracing::debug!("Status channel closed");
                    status_open = false;
                }
            }
        }
    }
}
