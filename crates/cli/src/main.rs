//! Designi CLI - browse the catalog, manage the session, publish resources.
//!
//! # Usage
//!
//! ```bash
//! # Create an account and log in
//! designi register --name "Ana Souza" --email ana@designi.com --phone "(11) 98765-4321"
//!
//! # Browse
//! designi list --search flyer
//! designi show 2
//!
//! # Publish as the seeded administrator
//! designi login --email admin@designi.com --phone "(00) 00000-0000"
//! designi publish --jpg capa.jpg --psd capa.psd --tag promo --premium
//! ```
//!
//! # Commands
//!
//! - `register`, `login`, `logout`, `whoami` - Session management
//! - `list`, `show` - Catalog browsing
//! - `analyze`, `publish` - AI-assisted upload (administrators only)
//! - `phone-mask` - Format digits as `(xx) xxxxx-xxxx`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use designi_admin::config::AdminConfig;
use designi_storefront::config::StorefrontConfig;
use designi_storefront::state::AppState;

mod commands;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

use commands::CliError;

#[derive(Parser)]
#[command(name = "designi")]
#[command(author, version, about = "Designi design asset catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone in the format (xx) xxxxx-xxxx, used as the password
        #[arg(short, long)]
        phone: String,
    },
    /// Log in with email and phone
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone in the format (xx) xxxxx-xxxx
        #[arg(short, long)]
        phone: String,
    },
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List resources, newest first
    List {
        /// Keep only resources whose title or tags contain this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one resource
    Show {
        /// Resource id
        id: String,
    },
    /// Suggest title, description and tags for a JPEG preview
    Analyze {
        /// JPEG preview
        jpg: PathBuf,
    },
    /// Publish a new resource (administrators only)
    Publish(commands::publish::PublishArgs),
    /// Format digits as a masked phone number
    PhoneMask {
        /// Raw input, e.g. 11987654321
        input: String,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => exit_with(&CliError::from(e)),
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Logs go to stderr so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if let Err(e) = run(cli, &config).await {
        exit_with(&e);
    }
}

/// Report `error`, print its user-facing message and exit non-zero.
#[allow(clippy::print_stderr)]
fn exit_with(error: &CliError) -> ! {
    error.report();
    eprintln!("{}", error.user_message());
    std::process::exit(1);
}

async fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), CliError> {
    if let Commands::PhoneMask { input } = &cli.command {
        commands::catalog::phone_mask(input);
        return Ok(());
    }

    let state = AppState::from_config(config)?;

    match cli.command {
        Commands::Register { name, email, phone } => {
            commands::auth::register(&state, &name, &email, &phone)?;
        }
        Commands::Login { email, phone } => commands::auth::login(&state, &email, &phone)?,
        Commands::Logout => commands::auth::logout(&state)?,
        Commands::Whoami => commands::auth::whoami(&state),
        Commands::List { search } => commands::catalog::list(&state, search.as_deref()),
        Commands::Show { id } => commands::catalog::show(&state, &id)?,
        Commands::Analyze { jpg } => {
            commands::publish::analyze(&jpg, &AdminConfig::from_env()?).await?;
        }
        Commands::Publish(args) => {
            commands::publish::publish(&state, args, &AdminConfig::from_env()?).await?;
        }
        Commands::PhoneMask { .. } => {}
    }
    Ok(())
}
