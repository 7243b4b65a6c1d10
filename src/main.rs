//! # mrk-picker CLI Entry Point
//!
//! Interactive Brewfile package selector used by bootstrap scripts.
//!
//! ## Usage
//!
//! ```bash
//! # Pick from ./Brewfile and capture the result
//! selection=$(mrk-picker --installed-formulae "$(brew list --formula | paste -sd, -)")
//!
//! # Only offer casks from a specific Brewfile
//! mrk-picker --brewfile ~/dotfiles/Brewfile --skip-formulae
//!
//! # Print the parsed categories and exit
//! mrk-picker --debug
//! ```
//!
//! ## Output
//!
//! On confirm, stdout receives one `formula:<name>` or `cask:<name>` line per
//! selected package and the exit status is 0 (also when nothing was picked).
//! Cancelling, an unreadable or empty Brewfile, and terminal failures all
//! exit with status 1. The picker itself is drawn on stderr.
//!
//! ## Key Bindings
//!
//! - `j` / `k` / `Up` / `Down` - Move within the focused pane
//! - `Tab` / `h` / `l` / `Left` / `Right` - Switch pane
//! - `Space` - Toggle the package under the cursor
//! - `a` - Select / clear every package in the category
//! - `Enter` - Confirm
//! - `Esc` - Back to categories, or cancel
//! - `q` / `Ctrl+C` - Cancel

use picker::manifest::{self, Category, Descriptions, ParseOptions};
use picker::output;
use picker::ui::config::Config;
use picker::ui::session::{self, CrosstermEventReader};
use picker::ui::theme::Theme;
use picker::ui::{self, App};
use picker::PickerError;

use anyhow::Context;
use clap::Parser;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

const TOOL_NAME: &str = "mrk-picker";

/// Environment variable holding the log filter (`env_logger` syntax).
const LOG_ENV: &str = "MRK_PICKER_LOG";

/// mrk-picker - choose which Brewfile packages to install
#[derive(Parser, Debug)]
#[command(name = "mrk-picker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactively pick Brewfile formulae and casks", long_about = None)]
struct Args {
    /// Path to the Brewfile
    #[arg(long, value_name = "FILE", default_value = "Brewfile")]
    brewfile: PathBuf,

    /// Comma-separated formulae that are already installed
    #[arg(long, value_name = "LIST", default_value = "")]
    installed_formulae: String,

    /// Comma-separated casks that are already installed
    #[arg(long, value_name = "LIST", default_value = "")]
    installed_casks: String,

    /// Leave formulae out of the picker
    #[arg(long)]
    skip_formulae: bool,

    /// Leave casks out of the picker
    #[arg(long)]
    skip_casks: bool,

    /// Colour theme (overrides the config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the parsed categories and exit
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            installed_formulae: manifest::parse_name_list(&self.installed_formulae),
            installed_casks: manifest::parse_name_list(&self.installed_casks),
            skip_formulae: self.skip_formulae,
            skip_casks: self.skip_casks,
        }
    }
}

#[derive(Debug)]
enum Outcome {
    Confirmed(App),
    Cancelled,
    Listed,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    // Set up panic hook to ensure terminal is restored on panic
    session::install_panic_hook();

    let result = run(&args);

    // Restore panic hook
    let _ = panic::take_hook();

    if let Err(e) = &result {
        eprintln!("{TOOL_NAME}: {e}");
    }
    if let Ok(Outcome::Confirmed(app)) = &result {
        let mut stdout = io::stdout().lock();
        if let Err(e) = output::write_selection(&mut stdout, app) {
            eprintln!("{TOOL_NAME}: failed to write selection: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::from(exit_status(&result))
}

/// Confirming (even with nothing picked) and `--debug` exit 0; cancelling
/// and every error exit 1.
fn exit_status(result: &Result<Outcome, PickerError>) -> u8 {
    match result {
        Ok(Outcome::Confirmed(_) | Outcome::Listed) => 0,
        Ok(Outcome::Cancelled) | Err(_) => 1,
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<Outcome, PickerError> {
    let config = Config::load(args.config.as_deref());
    let descriptions = Descriptions::builtin().with_overrides(&config.descriptions);

    let categories = manifest::load_manifest(&args.brewfile, &args.parse_options(), &descriptions)?;

    if args.debug {
        print_categories(&categories);
        return Ok(Outcome::Listed);
    }

    let theme = config.resolve_theme(args.theme.as_deref());
    let app = run_picker(App::new(categories), theme).map_err(|e| PickerError::session(&e))?;

    log::debug!(
        "session ended: {:?}, {} selected",
        app.status(),
        app.total_selected()
    );
    if app.is_cancelled() {
        return Ok(Outcome::Cancelled);
    }
    Ok(Outcome::Confirmed(app))
}

fn run_picker(mut app: App, theme: &Theme) -> anyhow::Result<App> {
    let mut terminal = session::setup_terminal()?;

    let run_result = terminal
        .size()
        .context("Failed to read terminal size")
        .and_then(|size| {
            app.set_viewport(size.width, size.height);
            let mut events = CrosstermEventReader;
            session::run_session(&mut app, &mut events, |app| {
                terminal
                    .draw(|f| ui::render(f, app, theme))
                    .context("Failed to draw terminal UI")?;
                Ok(())
            })
        });

    // Restore terminal (always runs, even if the session failed)
    let cleanup_result = session::restore_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(app)
}

fn print_categories(categories: &[Category]) {
    println!("=== Parsed Categories ===");
    for category in categories {
        println!("  {} ({})", category.name, category.entries.len());
        for entry in &category.entries {
            let installed = if entry.installed { " [installed]" } else { "" };
            println!(
                "    {}{}  {}",
                output::selection_line(entry),
                installed,
                entry.description.as_deref().unwrap_or("-")
            );
        }
    }
    println!(
        "\nTotal: {} categories, {} packages",
        categories.len(),
        categories.iter().map(|c| c.entries.len()).sum::<usize>()
    );
}
