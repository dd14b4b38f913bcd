use crossterm::event::{
    self, Event, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::core::logging;
use flappy::input::{map_key, KEY_EVENT_FLAGS};
use flappy::{FrameClock, GameConfig, Session, SessionAction};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Options from the command line.
#[derive(Debug, Default)]
struct CliOptions {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

fn print_usage() {
    println!("Flappy - terminal side-scroller\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --config <path>  Load tuning from a JSON file");
    println!("  --seed <n>       Seed the pipe layout for a repeatable run");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!("\nControls: Space/Up to flap, R to replay, Q/Esc to quit");
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }
    Ok(options)
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(first) = args.first() {
        match first.as_str() {
            "--version" | "-v" => {
                println!("flappy {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {}
        }
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    let config = match GameConfig::load(options.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not load config: {}", e);
            std::process::exit(1);
        }
    };

    // Logging is best effort; the game runs without it
    match logging::init() {
        Ok(path) => info!(log = %path.display(), ?config, "starting"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let rng = match options.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    // Without this, held keys arrive as repeated presses
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(KEY_EVENT_FLAGS))?;
    }
    info!(enhanced, "keyboard event kinds");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, Session::new(config, rng));

    // Cleanup terminal, even when the loop failed
    let _ = terminal.show_cursor();
    if enhanced {
        let _ = terminal.backend_mut().execute(PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    if let Err(e) = result {
        warn!(error = %e, "exited with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("goodbye");
    Ok(())
}

/// Draw, poll input until the next frame is due, then step physics.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut session: Session<StdRng>,
) -> io::Result<()> {
    let mut clock = FrameClock::new(session.config().frame_duration());
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| flappy::ui::draw(frame, session.screen()))?;

        // Wait for input, but never past the next frame
        let mut timeout = clock.until_next_frame();
        while event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(input) = map_key(key_event) {
                    let was_playing = session.is_playing();
                    if session.handle_input(input) == SessionAction::Quit {
                        return Ok(());
                    }
                    // A fresh round starts on a fresh clock
                    if !was_playing && session.is_playing() {
                        clock.reset();
                        last_frame = Instant::now();
                    }
                }
            }
            timeout = Duration::ZERO;
        }

        let now = Instant::now();
        let frames = clock.tick(now - last_frame);
        last_frame = now;
        session.step(frames);
    }
}
