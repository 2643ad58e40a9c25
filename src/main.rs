use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env, WriteStyle};
use std::io::Write;
use std::path::PathBuf;

use colorful_logger::snippets::{generating_snippet, initializing_snippet, registering_snippet};
use colorful_logger::{palette, registry, Background, Foreground, LoggerConfig};

#[derive(Parser)]
#[command(name = "colorful-logger")]
#[command(about = "Print ANSI-colored log lines and lifecycle messages")]
#[command(version)]
struct Args {
    /// YAML file with `name` and `enabled` settings
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Logger name (overrides the config file)
    #[arg(short = 'n', long = "name", global = true)]
    name: Option<String>,

    /// Start with output disabled
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// When to keep escape sequences in the output
    #[arg(long, value_enum, default_value = "always", global = true)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for WriteStyle {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => WriteStyle::Auto,
            ColorChoice::Always => WriteStyle::Always,
            ColorChoice::Never => WriteStyle::Never,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Log a single message, optionally colored
    Say {
        message: String,
        #[arg(long)]
        fg: Option<Foreground>,
        #[arg(long, requires = "fg")]
        bg: Option<Background>,
    },
    /// Announce the initialization of a target
    Initializing {
        target: String,
        /// Mark the step as data-generation only
        #[arg(long)]
        datagen: bool,
        #[arg(long, default_value = "bright-cyan")]
        fg: Foreground,
        #[arg(long, default_value = "black")]
        bg: Background,
    },
    /// Announce the registration of an identifier
    Registering {
        target: String,
        identifier: String,
        /// Registered as a child of a pool
        #[arg(long)]
        pool_child: bool,
        #[arg(long, default_value = "green")]
        fg: Foreground,
    },
    /// Announce a generation step
    Generating {
        target: String,
        #[arg(long)]
        pool_child: bool,
        #[arg(long)]
        datagen: bool,
        #[arg(long, default_value = "bright-cyan")]
        fg: Foreground,
        #[arg(long, default_value = "black")]
        bg: Background,
    },
    /// Show every foreground color
    Palette,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn setup_backend(color: ColorChoice) {
    Builder::from_env(Env::default().default_filter_or("info"))
        .write_style(color.into())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.target(), record.args()))
        .init();
}

fn resolve_config(args: &Args) -> anyhow::Result<LoggerConfig> {
    let mut config = match &args.config {
        Some(path) => LoggerConfig::load(path)?,
        None => LoggerConfig::default(),
    };
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if args.quiet {
        config.enabled = false;
    }
    Ok(config)
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    setup_backend(args.color);

    let logger = registry::initialize_from(&config).context("Failed to initialize logger")?;

    match args.command {
        Command::Say { message, fg, bg } => match (fg, bg) {
            (Some(fg), Some(bg)) => logger.emit_styled(&message, fg, bg),
            (Some(fg), None) => logger.emit_colored(&message, fg),
            _ => logger.emit(&message),
        },
        Command::Initializing {
            target,
            datagen,
            fg,
            bg,
        } => initializing_snippet(&target, datagen, fg, bg)?,
        Command::Registering {
            target,
            identifier,
            pool_child,
            fg,
        } => registering_snippet(&target, &identifier, pool_child, fg)?,
        Command::Generating {
            target,
            pool_child,
            datagen,
            fg,
            bg,
        } => generating_snippet(&target, pool_child, datagen, fg, bg)?,
        Command::Palette => {
            logger.emit_styled(" Palette ", palette::HEADING_TEXT, palette::HEADING_BACKGROUND);
            for fg in Foreground::ALL {
                logger.emit_styled(fg.name(), fg, palette::HEADING_BACKGROUND);
            }
        }
    }

    Ok(())
}
