use clap::{Args, Parser, Subcommand};
use portal_client::services::{auth, events, health};
use portal_client::{ApiError, AuthFailure, ClientConfig, ConfigError, NewEvent, PortalContext};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Auth(#[from] AuthFailure),
    #[error("{0}")]
    Failed(&'static str),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Event portal backend client")]
struct Cli {
    #[arg(long, env = "PORTAL_API_URL")]
    base_url: Option<String>,

    #[arg(long, env = "PORTAL_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<String>,

    #[arg(long, env = "PORTAL_CONNECT_TIMEOUT_SECS")]
    connect_timeout_secs: Option<String>,

    /// Reuse an `access_token` cookie printed by an earlier `login`.
    #[arg(long, env = "PORTAL_ACCESS_TOKEN")]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login(Credentials),
    Register {
        #[arg(long)]
        username: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    Logout,
    Verify,
    DbTest,
    Event(EventCommand),
    /// Login, verify, list events, and logout in one process.
    Session(Credentials),
}

#[derive(Args, Debug)]
struct Credentials {
    #[arg(long)]
    email: String,
    #[arg(long, env = "PORTAL_PASSWORD")]
    password: String,
}

#[derive(Args, Debug)]
struct EventCommand {
    #[command(subcommand)]
    command: EventSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        start_time: String,
        #[arg(long)]
        end_time: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        create_by: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = ClientConfig::from_parts(
        cli.base_url.as_deref(),
        cli.request_timeout_secs.as_deref(),
        cli.connect_timeout_secs.as_deref(),
    )?;
    let (ctx, _history) = PortalContext::with_history(config)?;
    if let Some(token) = cli.access_token.as_deref() {
        ctx.api.set_access_token(token);
    }

    match cli.command {
        Command::Login(creds) => run_login(&ctx, &creds).await,
        Command::Register { username, credentials } => {
            let user = auth::register(&ctx, &username, &credentials.email, &credentials.password).await?;
            print_json(&user)?;
            print_token(&ctx);
            Ok(())
        }
        Command::Logout => {
            auth::logout(&ctx).await;
            println!("ok");
            Ok(())
        }
        Command::Verify => run_verify(&ctx).await,
        Command::DbTest => {
            if health::db_test(&ctx).await {
                println!("ok");
                Ok(())
            } else {
                Err(CliError::Failed("db test failed"))
            }
        }
        Command::Event(cmd) => run_event(&ctx, cmd).await,
        Command::Session(creds) => run_session(&ctx, &creds).await,
    }
}

async fn run_login(ctx: &PortalContext, creds: &Credentials) -> Result<(), CliError> {
    let user = auth::login(ctx, &creds.email, &creds.password).await?;
    print_json(&user)?;
    print_token(ctx);
    Ok(())
}

async fn run_verify(ctx: &PortalContext) -> Result<(), CliError> {
    if !auth::verify_token(ctx).await {
        return Err(CliError::Failed("session is not valid"));
    }
    print_json(&ctx.session.snapshot().user)
}

async fn run_event(ctx: &PortalContext, cmd: EventCommand) -> Result<(), CliError> {
    match cmd.command {
        EventSubcommand::List => {
            let list = events::get_events(ctx)
                .await
                .ok_or(CliError::Failed("could not fetch events"))?;
            print_json(&list)
        }
        EventSubcommand::Create { name, location, start_time, end_time, description, create_by } => {
            let event = NewEvent { name, location, start_time, end_time, description, create_by };
            if !events::create_event(ctx, &event).await {
                return Err(CliError::Failed("event was not created"));
            }
            println!("ok");
            Ok(())
        }
    }
}

async fn run_session(ctx: &PortalContext, creds: &Credentials) -> Result<(), CliError> {
    run_login(ctx, creds).await?;
    run_verify(ctx).await?;
    let list = events::get_events(ctx).await.unwrap_or_default();
    println!("{} event(s)", list.len());
    auth::logout(ctx).await;
    println!("logged out");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_token(ctx: &PortalContext) {
    if let Some(token) = ctx.api.access_token() {
        eprintln!("access_token={token}");
    }
}
