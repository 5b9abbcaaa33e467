use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use crate::app::domain::{AppSettings, SystemType, Theme};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::platform::host_signals;
use crate::app::infrastructure::storage::FileStorage;
use crate::app::services::font_profiles::font_profile;
use crate::app::services::pipeline::{FontReport, resolve_system_fonts};
use crate::app::services::theme_store::ThemeStore;

#[derive(Debug, Parser)]
#[command(
    name = "mem8",
    about = "Retro font detection and theme persistence for Mem8 Explorer",
    version
)]
pub struct Cli {
    /// Settings file (defaults to <config dir>/mem8/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Key/value store file the theme is persisted in
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the system type and list its font assets.
    Detect(DetectArgs),

    /// Print @font-face rules for the detected system.
    Fonts(FontsArgs),

    /// List every system type with its font profile.
    Systems,

    /// Read or change the persisted theme.
    #[command(subcommand)]
    Theme(ThemeCommand),
}

/// Browser signals; missing values are synthesized for the host OS
#[derive(Debug, Args)]
pub struct SignalArgs {
    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long)]
    pub platform: Option<String>,
}

impl SignalArgs {
    fn resolve(&self) -> (String, String) {
        if let (Some(ua), Some(platform)) = (&self.user_agent, &self.platform) {
            return (ua.clone(), platform.clone());
        }
        let host = host_signals();
        (
            self.user_agent.clone().unwrap_or(host.user_agent),
            self.platform.clone().unwrap_or(host.platform),
        )
    }
}

#[derive(Debug, Args)]
pub struct DetectArgs {
    #[command(flatten)]
    pub signals: SignalArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FontsArgs {
    #[command(flatten)]
    pub signals: SignalArgs,

    /// Write the stylesheet to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme.
    Get,

    /// Persist a new theme.
    Set {
        name: String,
    },

    /// List available themes.
    List,
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(AppSettings::get_config_path);
    // Only state-changing commands seed a default settings file
    let settings = if matches!(cli.command, Commands::Theme(ThemeCommand::Set { .. })) {
        AppSettings::load_from(&config_path)
    } else {
        AppSettings::read_from(&config_path).unwrap_or_default()
    };

    match cli.command {
        Commands::Detect(args) => {
            let report = report_for(&args.signals, &settings);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", describe(&report));
            }
            Ok(())
        }
        Commands::Fonts(args) => {
            let report = report_for(&args.signals, &settings);
            match args.output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() {
                            fs::create_dir_all(parent)?;
                        }
                    }
                    fs::write(&path, &report.stylesheet)?;
                    tracing::info!("Wrote {} font rules to {}", report.assets.len(), path.display());
                }
                None => println!("{}", report.stylesheet),
            }
            Ok(())
        }
        Commands::Systems => {
            for system in SystemType::all() {
                let profile = font_profile(*system);
                println!(
                    "{:<14} {:<28} {} / {} / {}",
                    system.as_str(),
                    profile.description,
                    profile.primary,
                    profile.fallback,
                    profile.monospace
                );
            }
            Ok(())
        }
        Commands::Theme(command) => {
            let storage_path = cli.storage.unwrap_or_else(|| settings.storage_path());
            let storage = FileStorage::open(storage_path);
            let mut store = ThemeStore::new(settings.default_theme, Some(Box::new(storage)), None);
            match command {
                ThemeCommand::Get => println!("{}", store.get()),
                ThemeCommand::Set { name } => {
                    let theme = store.set_by_name(&name)?;
                    println!("{}", theme);
                }
                ThemeCommand::List => {
                    let current = store.get();
                    for theme in Theme::all() {
                        let marker = if *theme == current { "*" } else { " " };
                        println!("{} {:<9} {}", marker, theme.as_str(), theme.display_name());
                    }
                }
            }
            Ok(())
        }
    }
}

fn report_for(signals: &SignalArgs, settings: &AppSettings) -> FontReport {
    let (user_agent, platform) = signals.resolve();
    tracing::debug!(user_agent = %user_agent, platform = %platform, "detecting system");
    resolve_system_fonts(&user_agent, &platform, &settings.stylesheet_options())
}

/// Plain-text rendering of a report for the terminal
pub fn describe(report: &FontReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("system:      {}\n", report.system));
    out.push_str(&format!("description: {}\n", report.profile.description));
    out.push_str(&format!(
        "fonts:       {} / {} / {}\n",
        report.profile.primary, report.profile.fallback, report.profile.monospace
    ));
    out.push_str(&format!("message:     {}\n", report.message));
    out.push_str("assets:\n");
    for asset in &report.assets {
        out.push_str(&format!("  {}\n", asset));
    }
    out
}
