mod app;
mod directory;
mod ui;

use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::sync::mpsc;

use crate::app::CrewDesk;

#[tokio::main]
async fn main() {
    let log_file = File::create("crewdesk.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}

async fn run() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = event_loop(&mut stdout).await;

    execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

async fn event_loop(stdout: &mut impl Write) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = CrewDesk::new(tx);
    let mut events = EventStream::new();
    // Redraw cadence; toasts expire and tooltips move between input events.
    let mut ticker = tokio::time::interval(Duration::from_millis(100));

    loop {
        ui::draw(&app, stdout)?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    if app.handle_terminal(&event) {
                        break;
                    }
                }
                Some(Err(e)) => log::error!("terminal event error: {}", e),
                None => break,
            },
            Some(msg) = rx.recv() => app.handle_message(msg),
            _ = ticker.tick() => {}
        }
    }
    Ok(())
}
