use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tagbook::cli::Command;
use tagbook::constants::INPUT_POLL_MS;
use tagbook::input::{handle_key, InputResult, UiState};
use tagbook::ui::draw_ui;
use tagbook::utils::{build_info, data_dir, logging};
use tagbook::App;
use tracing::info;

fn print_help() {
    println!("Tagbook - Boss Checklist and Weapon Tracker\n");
    println!("Usage: tagbook [command]\n");
    println!("Commands:");
    println!("  status     Show boss and weapon progress");
    println!("  bosses     List bosses and their status");
    println!("  weapons    List weapons matching the saved search options");
    println!("  reset      Reset all data to the defaults");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
}

fn print_status(app: &App) {
    let summary = app.summary();
    println!(
        "Bosses ({}/{} Defeated)",
        summary.bosses_defeated, summary.bosses_total
    );
    println!("  Next Boss: {}", summary.next_boss);
    println!(
        "Weapons ({}/{} Available)",
        summary.weapons_available, summary.weapons_total
    );
    println!("  Best Weapon Available: {}", summary.best_weapon);
}

fn run_command(command: Command) -> io::Result<()> {
    if !command.uses_data_dir() {
        if command == Command::Version {
            println!("{}", build_info::version_line());
        } else {
            print_help();
        }
        return Ok(());
    }

    let dir = data_dir()?;
    logging::init(&dir);
    let mut app = App::open(&dir);

    match command {
        Command::Status => print_status(&app),
        Command::Bosses => println!("{}", app.ledger.list_rendered()),
        Command::Weapons => println!("{}", app.catalog.render_query_results()),
        Command::Reset => {
            app.reset_to_defaults()?;
            println!("Data reset to default.");
        }
        Command::Version | Command::Help => {}
    }
    Ok(())
}

fn run_tui(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut ui = UiState::new();
    let result = loop {
        if let Err(e) = terminal.draw(|f| draw_ui(f, app, &ui)) {
            break Err(e);
        }

        match event::poll(Duration::from_millis(INPUT_POLL_MS)) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => break Err(e),
        }

        match event::read() {
            Ok(Event::Key(key)) => {
                if handle_key(key, app, &mut ui) == InputResult::Quit {
                    break Ok(());
                }
            }
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        let Some(command) = Command::parse(&args[1]) else {
            eprintln!("Unknown command: {}", args[1]);
            eprintln!("Run 'tagbook --help' for usage.");
            std::process::exit(1);
        };
        return run_command(command);
    }

    let dir = data_dir()?;
    logging::init(&dir);
    info!(data_dir = %dir.display(), "Starting tagbook");

    let mut app = App::open(&dir);
    run_tui(&mut app)?;

    info!("Exiting tagbook");
    Ok(())
}
