use anyhow::Result;
use clap::{Parser, Subcommand};

use eeris_cli::api::ApiClient;
use eeris_cli::cli::{
    handle_account_command, handle_admin_command, handle_expense_command, handle_history_command,
    handle_login, handle_logout, handle_receipts_command, handle_register, handle_stats,
    AccountCommands, AdminCommands, ExpenseCommands, HistoryCommands, ReceiptCommands,
};
use eeris_cli::config::{EerisPaths, Settings};
use eeris_cli::display::notify;
use eeris_cli::error::EerisResult;
use eeris_cli::session::{Role, Session};

#[derive(Parser)]
#[command(
    name = "eeris",
    version,
    about = "Terminal client for the EERIS expense reporting service",
    long_about = "EERIS CLI submits, reviews, and exports employee expense \
                  receipts against an EERIS backend. Log in once with \
                  `eeris login`; the session is stored until you log out."
)]
struct Cli {
    /// Backend server URL (overrides the configured one)
    #[arg(long, env = "EERIS_SERVER_URL", global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        /// Account email (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Register a new account
    Register {
        /// Full name
        name: String,

        /// Account email
        email: String,

        /// Requested role: employee, supervisor, or admin
        #[arg(long, default_value = "employee")]
        role: String,
    },

    /// Log out and clear the stored session
    Logout,

    /// Expense entry commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Receipt listing and review commands
    #[command(subcommand, alias = "rec")]
    Receipts(ReceiptCommands),

    /// Show spending statistics
    Stats,

    /// Expense history commands
    #[command(subcommand)]
    History(HistoryCommands),

    /// Admin panel commands
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Account maintenance commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Initialize paths, settings, and the stored session
    let paths = EerisPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut session = Session::load(&paths)?;

    let server_url = cli
        .server
        .unwrap_or_else(|| settings.server_url.clone());
    let api = ApiClient::new(server_url)?;

    if let Err(err) = run(cli.command, &api, &mut session, &paths, &settings).await {
        notify::error(&err.to_string());
        if err.is_unauthorized() {
            // The stored token is stale or the role was refused; clear it
            // and point at the login entry point.
            session.clear();
            let _ = session.save(&paths);
            notify::info("Please log in again with `eeris login`.");
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(
    command: Commands,
    api: &ApiClient,
    session: &mut Session,
    paths: &EerisPaths,
    settings: &Settings,
) -> EerisResult<()> {
    match command {
        Commands::Login { email } => handle_login(api, session, paths, email).await,
        Commands::Register { name, email, role } => {
            let role: Role = role.parse()?;
            handle_register(api, name, email, role).await
        }
        Commands::Logout => handle_logout(session, paths),
        Commands::Expense(cmd) => handle_expense_command(api, session, cmd).await,
        Commands::Receipts(cmd) => handle_receipts_command(api, session, settings, cmd).await,
        Commands::Stats => handle_stats(api, session, settings).await,
        Commands::History(cmd) => handle_history_command(api, session, settings, cmd).await,
        Commands::Admin(cmd) => handle_admin_command(api, session, cmd).await,
        Commands::Account(cmd) => handle_account_command(api, session, paths, cmd).await,
        Commands::Config => {
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Server URL:       {}", settings.server_url);
            match session.current_role() {
                Some(role) => println!("Session:          logged in ({})", role),
                None => println!("Session:          not logged in"),
            }
            Ok(())
        }
    }
}
