use super::app::RoomApp;
use super::event::{Event, EventHandler};
use crate::cli_context::CliContext;
use crate::wheel_error;
use crate::logging::{log_debug, log_error, log_info, log_panic_info};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Frame cadence; fast enough for a smooth spin.
const TICK_RATE: Duration = Duration::from_millis(33);

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

pub async fn run_room_mode(context: &mut CliContext, slug: &str) -> Result<(), Box<dyn std::error::Error>> {
    log_info(&format!("Opening room {}", slug));

    let rooms = context.rooms()?;
    let room = rooms.open_room(slug).await?;
    let mut app = RoomApp::new(room, context.spin_settings()?);

    // Leave the alternate screen before the panic message is printed.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        log_panic_info(info);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode().map_err(|e| wheel_error!(TerminalError, "Cannot enter raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| wheel_error!(TerminalError, "Cannot open the alternate screen: {}", e))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let events = EventHandler::new(TICK_RATE);
    let result: Result<(), Box<dyn std::error::Error>> = loop {
        if let Err(e) = terminal.draw(|f| super::ui::draw(f, &app)) {
            log_error(&format!("Error drawing UI: {}", e));
            break Err(e.into());
        }

        match events.recv() {
            Ok(Event::Key(key_event)) => {
                log_debug(&format!("Key pressed: {:?}, Mode: {:?}", key_event.code, app.mode));
                app.handle_key(key_event);
            }
            Ok(Event::Tick) => app.tick(Instant::now()),
            Ok(Event::Resize) => {}
            Err(e) => break Err(e.into()),
        }

        app.apply_pending(&rooms).await;

        if app.should_quit {
            break Ok(());
        }
    };

    log_info("Leaving room");

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;
    let _ = std::panic::take_hook();

    result
}
