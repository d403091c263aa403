use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use themplus::error::{ConfigError, NavigationError};
use themplus::net::types::{Enterprise, EnterpriseUpdate};
use themplus::notify::{Notification, NotificationKind};
use themplus::router::ROUTES;
use themplus::{ApiError, AppState, ClientConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("request failed: {0}")]
    Request(String),
    #[error("{0}")]
    Navigation(#[from] NavigationError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("not signed in; run `themplus login` first")]
    NotSignedIn,
    #[error("{0} did not complete")]
    Rejected(&'static str),
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err.status() {
            Some(status) => Self::Request(format!("{} (HTTP {status})", err.notification_message())),
            None => Self::Request(err.notification_message()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "themplus", about = "Themplus management API client")]
struct Cli {
    /// Overrides `API_BASE_URL`.
    #[arg(long, env = "API_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Name of the organization created with the account.
        #[arg(long)]
        enterprise: String,
    },
    Logout,
    Whoami,
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
    Department(DepartmentCommand),
    Enterprise(EnterpriseCommand),
    /// List the page routes.
    Routes,
    /// Check whether the current session may open a route (name or path).
    Open { target: String },
}

#[derive(Args, Debug)]
struct DepartmentCommand {
    #[command(subcommand)]
    command: DepartmentSubcommand,
}

#[derive(Subcommand, Debug)]
enum DepartmentSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        parent_id: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        parent_id: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct EnterpriseCommand {
    #[command(subcommand)]
    command: EnterpriseSubcommand,
}

#[derive(Subcommand, Debug)]
enum EnterpriseSubcommand {
    Show,
    Update {
        /// Full enterprise record as JSON.
        #[arg(long)]
        data: String,
        /// Account password confirming the change.
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli.base_url.clone();
    let config = ClientConfig::from_lookup(|key| match key {
        "API_BASE_URL" => base_url.clone(),
        _ => std::env::var(key).ok(),
    })?;
    let app = AppState::from_config(config)?;

    let result = run(&app, cli.command).await;
    print_notifications(&app.notifications.drain());
    result
}

async fn run(app: &AppState, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            expect_done("login", app.store.login(&email, &password).await)?;
            print_json(&app.session.user())
        }
        Command::Register { name, email, password, enterprise } => {
            expect_done("register", app.store.register(&name, &email, &password, &enterprise).await)?;
            print_json(&app.session.user())
        }
        Command::Logout => {
            app.store.logout();
            println!("signed out");
            Ok(())
        }
        Command::Whoami => {
            let user = app.session.user().ok_or(CliError::NotSignedIn)?;
            print_json(&user)
        }
        Command::Profile { name, email, phone, department } => {
            require_session(app)?;
            let done = app.store.update_profile(&name, &email, phone.as_deref(), department.as_deref()).await;
            expect_done("profile update", done)?;
            print_json(&app.session.user())
        }
        Command::Password { current, new } => {
            require_session(app)?;
            expect_done("password update", app.store.update_password(&current, &new).await)
        }
        Command::Department(cmd) => {
            require_session(app)?;
            run_department(app, cmd.command).await
        }
        Command::Enterprise(cmd) => {
            require_session(app)?;
            run_enterprise(app, cmd.command).await
        }
        Command::Routes => {
            for route in ROUTES {
                let access = match (route.requires_auth, route.guard) {
                    (_, Some(_)) => "admin",
                    (true, None) => "signed-in",
                    (false, None) => "public",
                };
                println!("{:<26} {:<24} {access}", route.name, route.path);
            }
            Ok(())
        }
        Command::Open { target } => {
            let route = if target.starts_with('/') {
                app.router.push_path(&target)?
            } else {
                app.router.push(&target)?
            };
            println!("{} -> {}", route.name, route.path);
            Ok(())
        }
    }
}

async fn run_department(app: &AppState, command: DepartmentSubcommand) -> Result<(), CliError> {
    match command {
        DepartmentSubcommand::List => {
            let resp = app.departments.list().await?;
            print_json(&resp.data.departments)
        }
        DepartmentSubcommand::Create { name, parent_id } => {
            let resp = app.departments.create(&name, parent_id.as_deref()).await?;
            println!("{}", resp.data.message);
            print_json(&resp.data.departments)
        }
        DepartmentSubcommand::Update { id, name, parent_id } => {
            let resp = app.departments.update(&id, &name, parent_id.as_deref()).await?;
            println!("{}", resp.data.message);
            print_json(&resp.data.departments)
        }
        DepartmentSubcommand::Delete { id } => {
            let resp = app.departments.delete(&id).await?;
            println!("{}", resp.data.message);
            Ok(())
        }
    }
}

async fn run_enterprise(app: &AppState, command: EnterpriseSubcommand) -> Result<(), CliError> {
    match command {
        EnterpriseSubcommand::Show => {
            let resp = app.enterprise.get().await?;
            print_json(&resp.data.enterprise)
        }
        EnterpriseSubcommand::Update { data, password } => {
            let enterprise: Enterprise = serde_json::from_str(&data)?;
            let resp = app.enterprise.update(&EnterpriseUpdate { enterprise, password }).await?;
            println!("{}", resp.data.message);
            print_json(&resp.data.enterprise)
        }
    }
}

fn require_session(app: &AppState) -> Result<(), CliError> {
    if app.session.is_authenticated() { Ok(()) } else { Err(CliError::NotSignedIn) }
}

fn expect_done(operation: &'static str, done: bool) -> Result<(), CliError> {
    if done { Ok(()) } else { Err(CliError::Rejected(operation)) }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_notifications(notifications: &[Notification]) {
    for n in notifications {
        match n.kind {
            NotificationKind::Positive => println!("✔ {}", n.message),
            NotificationKind::Negative => eprintln!("✘ {}", n.message),
        }
    }
}
