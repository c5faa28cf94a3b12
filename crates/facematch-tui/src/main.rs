mod app;
mod render;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use facematch_core::{normalize_level, PuzzleConfig, PuzzleState};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use theme::Theme;

/// Find the shape, color and expression hiding behind the question mark.
#[derive(Parser)]
#[command(name = "facematch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Level to start on (1-7; other values wrap around)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    level: i64,

    /// Seed for reproducible levels
    #[arg(short, long)]
    seed: Option<u64>,

    /// Color theme: dark, light or high_contrast
    #[arg(short, long, default_value = "dark")]
    theme: String,

    /// Seconds before a solved level moves on
    #[arg(long, default_value_t = 3.0)]
    delay: f64,

    /// Print the starting level as JSON and exit
    #[arg(long)]
    dump: bool,
}

impl Cli {
    fn config(&self) -> PuzzleConfig {
        // `--level` is 1-based; wrap before shifting so no value overflows
        let start_level = normalize_level(normalize_level(self.level) as i64 - 1);
        let mut config = PuzzleConfig {
            advance_delay_ms: (self.delay.max(0.0) * 1000.0) as u64,
            ..PuzzleConfig::default()
        }
        .with_start_level(start_level as i64);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let Some(theme) = Theme::by_name(&cli.theme) else {
        eprintln!("Unknown theme '{}' (expected dark, light or high_contrast)", cli.theme);
        std::process::exit(2);
    };

    if cli.dump {
        let state = PuzzleState::new(cli.config());
        let json = serde_json::to_string_pretty(&state.to_view()).map_err(io::Error::other)?;
        println!("{}", json);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, App::new(cli.config(), theme));

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.tick_rate();

        render::render(stdout, &app)?;
        stdout.flush()?;

        // Handle input with timeout for animation updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    // Ignore repeats and releases
                } else if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break;
                } else if let app::AppAction::Quit = app.handle_key(key) {
                    break;
                }
            }
        }

        // Tick animations and the auto-advance deadline
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["facematch"]);
        let config = cli.config();
        assert_eq!(config.start_level, 0);
        assert_eq!(config.seed, None);
        assert_eq!(config.advance_delay_ms, 3000);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["facematch", "--level", "5", "--seed", "42", "--delay", "1.5"]);
        let config = cli.config();
        assert_eq!(config.start_level, 4);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.advance_delay_ms, 1500);
        assert!(Theme::by_name(&cli.theme).is_some());
    }

    #[test]
    fn test_cli_extreme_level() {
        let cli = Cli::parse_from(["facematch", "--level", "-9223372036854775808"]);
        assert_eq!(cli.config().start_level, 5);

        let cli = Cli::parse_from(["facematch", "--level", "9223372036854775807"]);
        assert_eq!(cli.config().start_level, 6);

        // Level 0 is the one before level 1, i.e. the last
        let cli = Cli::parse_from(["facematch", "--level", "0"]);
        assert_eq!(cli.config().start_level, 6);
        let cli = Cli::parse_from(["facematch", "--level", "8"]);
        assert_eq!(cli.config().start_level, 0);
    }
}
