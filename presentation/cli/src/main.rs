use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;

use business::domain::shared::value_objects::UserId;

mod commands {
    pub mod check;
    pub mod report;
    pub mod settings;
}
mod config {
    pub mod app_config;
    pub mod database_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod terminal_prompt;
}

use commands::check::CheckArgs;
use config::{app_config::AppConfig, database_config};
use setup::dependency_injection::DependencyContainer;

#[derive(Parser, Debug)]
#[command(name = "expiry-guard", version, about = "Product expiry alerts")]
struct Cli {
    /// Print machine-readable JSON where supported
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch products and notify about those close to expiry
    Check {
        /// Alert window in days (default: stored setting)
        #[arg(long, allow_negative_numbers = true)]
        days_before: Option<i64>,

        /// Announce every qualifying product again, even if already notified
        #[arg(long)]
        force: bool,

        /// Only check this user's products and sync their settings
        #[arg(long)]
        user: Option<String>,
    },

    /// Classify a single expiry date
    Status {
        date: String,
    },

    /// Count products per expiry level
    Summary {
        #[arg(long)]
        user: Option<String>,
    },

    /// List expired and near-expiry products
    Alerts {
        #[arg(long)]
        user: Option<String>,
    },

    /// Inspect or request notification permission
    Permission {
        #[arg(value_enum)]
        action: PermissionAction,
    },

    /// Turn system notifications on or off
    Notifications {
        #[arg(value_enum)]
        switch: Switch,
    },

    /// Show notification settings, optionally changing the alert window
    Settings {
        #[arg(long)]
        days: Option<i64>,
    },

    /// Forget notified products that are no longer in the product list
    Compact {
        #[arg(long)]
        user: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PermissionAction {
    Status,
    Request,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Switch {
    On,
    Off,
}

/// CLI Entry Point
///
/// Initializes logging and configuration, wires dependencies and runs one
/// subcommand.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database
    let pool = database_config::init_database(&config.database_url).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config, pool);

    // 6. Run command
    run(&container, cli).await
}

async fn run(container: &DependencyContainer, cli: Cli) -> anyhow::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Check {
            days_before,
            force,
            user,
        } => {
            commands::check::run(
                container,
                CheckArgs {
                    days_before,
                    force,
                    user: user.map(UserId::from),
                },
            )
            .await
        }
        Command::Status { date } => commands::report::status(container, &date, json),
        Command::Summary { user } => {
            commands::report::summary(container, user.map(UserId::from), json).await
        }
        Command::Alerts { user } => {
            commands::report::alerts(container, user.map(UserId::from), json).await
        }
        Command::Permission { action } => match action {
            PermissionAction::Status => commands::settings::permission_status(container).await,
            PermissionAction::Request => commands::settings::request_permission(container).await,
        },
        Command::Notifications { switch } => {
            commands::settings::set_enabled(container, matches!(switch, Switch::On)).await
        }
        Command::Settings { days } => commands::settings::settings(container, days, json).await,
        Command::Compact { user } => {
            commands::settings::compact(container, user.map(UserId::from)).await
        }
    }
}
