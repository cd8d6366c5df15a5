//! layout-kit - Command-line renderer
//!
//! Renders a layout box described in a TOML or JSON file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use layout_kit::components::layout::layout_box::{derive_classes, layout_config_schema};
use layout_kit::components::layout::{LayoutBox, LayoutConfig};
use layout_kit::dom::element_to_html;
use layout_kit::error::Result;
use layout_kit::helpers::is_development;
use layout_kit::host::Host;
use layout_kit::i18n::Locale;
use layout_kit::settings::{OutputFormat, Settings};

#[derive(Parser)]
#[command(name = "layout-kit")]
#[command(about = "Render declarative layout boxes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Locale for accessible labels (en, zh); overrides the settings file
    #[arg(long, global = true)]
    locale: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a box configuration
    Render {
        /// Configuration file (.toml or .json)
        file: PathBuf,

        /// Print the element tree as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Print the derived class lists
    Classes {
        /// Configuration file (.toml or .json)
        file: PathBuf,
    },

    /// Print the JSON schema of box configuration files
    Schema,

    /// Show or change persisted settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,

    /// Set the default locale (en, zh)
    Locale { code: String },

    /// Set the default output format
    Output { format: OutputArg },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputArg {
    Html,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Html => OutputFormat::Html,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

fn run_config(mut settings: Settings, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let locale = settings.locale();
            println!("# locale: {} ({})", locale.code(), locale.display_name());
            print!("{}", settings.to_toml_string()?);
        }
        ConfigAction::Locale { code } => {
            let locale: Locale = code.parse()?;
            settings.set_locale(locale);
            settings.save()?;
            println!("locale = {} ({})", locale.code(), locale.display_name());
        }
        ConfigAction::Output { format } => {
            settings.set_output(format.into());
            settings.save()?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Using default settings");
        Settings::default()
    });
    let locale = match cli.locale.as_deref() {
        Some(code) => code.parse()?,
        None => settings.locale(),
    };

    match cli.command {
        Commands::Render { file, json } => {
            let config = LayoutConfig::load(&file)?;
            let mut layout_box = LayoutBox::new(Host::default().with_locale(locale));
            tracing::info!(
                file = ?file,
                locale = layout_box.host().locale.code(),
                "Rendering box"
            );

            layout_box.on_attach(&config);
            let root = layout_box.render(&config);
            tracing::debug!(
                attached = layout_box.is_attached(),
                activation = ?layout_box.activation(),
                "Box mounted"
            );
            layout_box.on_detach();

            let format = if json { OutputFormat::Json } else { settings.output() };
            match format {
                OutputFormat::Html => println!("{}", element_to_html(&root)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&root)?),
            }
        }
        Commands::Classes { file } => {
            let config = LayoutConfig::load(&file)?;
            let classes = derive_classes(&config);
            if let Some(container) = &classes.container {
                println!("container: {}", container.join(" "));
            }
            println!("box: {}", classes.root.join(" "));
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&layout_config_schema())?);
        }
        Commands::Config { action } => run_config(settings, action)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so rendered output stays clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "layout-kit failed");
            ExitCode::FAILURE
        }
    }
}
