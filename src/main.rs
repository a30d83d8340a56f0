//! Chartwall - CLI entry point
//!
//! This binary launches the demo dashboard TUI, exposes the layout
//! resolver as a standalone command, and manages the configuration file.

use chartwall::charts::DEFAULT_SEED;
use chartwall::config::loader::ConfigLoader;
use chartwall::config::{default, xdg};
use chartwall::layout::{self, ControlState, Density, ManualSize, ScreenPreset};
use chartwall::tui::app::App;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Ultra wide demo dashboard
#[derive(Parser)]
#[command(name = "chartwall")]
#[command(version, about = "Ultra wide demo dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the chartwall CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the dashboard
    Tui {
        /// Path to a configuration file (default: XDG config location)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for the demo chart content
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Resolve a layout configuration once and print it
    Resolve(ResolveArgs),

    /// Print the resolution preset catalog
    Presets,

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Flags selecting the control values for a one-shot resolution.
#[derive(Args, Debug)]
struct ResolveArgs {
    /// Use automatic mode (ignores preset and slider flags)
    #[arg(long)]
    auto: bool,

    /// Resolution preset name (e.g. "qhd-2560x1440" or "QHD 2560x1440")
    #[arg(long)]
    preset: Option<ScreenPreset>,

    /// Manual column count in [4, 20] (Custom preset only)
    #[arg(long)]
    columns: Option<u16>,

    /// Manual chart width in [1.5, 4.0] (Custom preset only)
    #[arg(long)]
    width: Option<f64>,

    /// Manual chart height in [2.0, 5.0] (Custom preset only)
    #[arg(long)]
    height: Option<f64>,

    /// Density choice: low, medium, high, max
    #[arg(long, default_value = "medium")]
    density: Density,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: String,
}

impl ResolveArgs {
    /// Builds the control state these flags describe.
    ///
    /// Without `--auto` or `--preset`, the flags drive the `Custom` preset;
    /// unspecified sliders use their defaults.
    fn control_state(&self) -> ControlState {
        let preset = match (self.auto, self.preset) {
            (true, _) => self.preset.unwrap_or(ScreenPreset::Custom),
            (false, Some(preset)) => preset,
            (false, None) => ScreenPreset::Custom,
        };
        let defaults = ManualSize::default();
        ControlState {
            auto_mode: self.auto,
            preset,
            manual: ManualSize {
                columns: self.columns.unwrap_or(defaults.columns),
                width: self.width.unwrap_or(defaults.width),
                height: self.height.unwrap_or(defaults.height),
            },
            density: self.density,
        }
    }
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { config, seed } => run_tui_command(config, seed),
        Commands::Resolve(args) => run_resolve_command(&args),
        Commands::Presets => run_presets_command(),
        Commands::Config { action } => run_config_command(action),
    }
}

/// Loads configuration, initializes logging, and runs the dashboard.
fn run_tui_command(config_path: Option<PathBuf>, seed: Option<u64>) -> ExitCode {
    let config = match config_path {
        Some(path) => ConfigLoader::load_from_path(&path),
        None => ConfigLoader::load_default(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    chartwall::logging::init(config.log.level);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime for TUI");
    let mut app = App::new(
        config.controls.control_state(),
        seed.unwrap_or(DEFAULT_SEED),
        config.tui.tick_rate_duration(),
    );
    if let Err(e) = rt.block_on(app.run()) {
        eprintln!("TUI error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Resolves the layout once and renders it in the requested format.
fn resolve_output(args: &ResolveArgs) -> Result<String, String> {
    let controls = args.control_state();
    let config = layout::resolve(&controls).map_err(|e| e.to_string())?;

    match args.format.as_str() {
        "json" => {
            let payload = serde_json::json!({
                "columns": config.columns,
                "chart_width": config.chart_width,
                "chart_height": config.chart_height,
                "metric_columns": config.metric_columns(),
            });
            Ok(payload.to_string())
        }
        "text" => Ok(format!(
            "columns:        {}\nchart width:    {:.1}\nchart height:   {:.1}\nmetric columns: {}",
            config.columns,
            config.chart_width,
            config.chart_height,
            config.metric_columns()
        )),
        other => Err(format!("unknown format '{other}', expected 'text' or 'json'")),
    }
}

/// Prints the one-shot resolution result.
fn run_resolve_command(args: &ResolveArgs) -> ExitCode {
    match resolve_output(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the preset catalog table.
fn run_presets_command() -> ExitCode {
    println!(
        "{:<24} {:>7} {:>6} {:>7}",
        "Preset", "Columns", "Width", "Height"
    );
    for preset in ScreenPreset::ALL {
        match preset.base() {
            Some(base) => println!(
                "{:<24} {:>7} {:>6.1} {:>7.1}",
                preset.label(),
                base.columns,
                base.chart_width,
                base.chart_height
            ),
            None => println!("{:<24} {:>7}", preset.label(), "(manual sliders)"),
        }
    }
    ExitCode::SUCCESS
}

/// Handles the `config` subcommand actions.
fn run_config_command(action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => match default::create_default_config(force) {
            Ok(path) => {
                println!("Created configuration at {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate => match ConfigLoader::load_default() {
            Ok(config) => {
                println!("Configuration is valid");
                println!("{config:#?}");
                Ok(())
            }
            Err(e) => Err(e),
        },
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
