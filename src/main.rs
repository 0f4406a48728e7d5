use clap::{Parser, Subcommand, ValueEnum};
use hitron_coda::app_config::{AppConfig, Overrides};
use hitron_coda::hitron::{CableModem, HitronError, new_client};
use tracing::{info, warn};

/// Query and manage a Hitron CODA cable modem.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Host name or address of the modem
    #[arg(long, global = true)]
    host: Option<String>,
    #[arg(long, global = true)]
    username: Option<String>,
    #[arg(long, global = true)]
    password: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Cable modem operations
    #[command(subcommand)]
    Cm(CmCommand),
    /// Router operations
    #[command(subcommand)]
    Router(RouterCommand),
}

#[derive(Debug, Subcommand)]
enum CmCommand {
    /// Print cable modem version information
    Version,
    /// Reboot the cable modem
    Reboot,
    /// Print cable modem logs
    Log,
    /// Clear cable modem logs
    ClearLog,
}

#[derive(Debug, Subcommand)]
enum RouterCommand {
    /// Print router capabilities
    Capability,
    /// Print router location
    Location,
    /// Print router system information
    SysInfo,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(Overrides {
        host: cli.host,
        username: cli.username,
        password: cli.password,
    })?;
    info!("✅  Loaded configuration for {}", config.host());

    let modem = new_client(&config)?;
    modem.login().await?;

    let output = run(&modem, cli.command).await;

    if let Err(e) = modem.logout().await {
        warn!("⚠️ Could not log out: {}", e);
    }

    print!("{}", output?);
    Ok(())
}

async fn run(modem: &CableModem, command: Command) -> Result<String, HitronError> {
    let output = match command {
        Command::Cm(CmCommand::Version) => modem.cm_version().await?.to_string(),
        Command::Cm(CmCommand::Reboot) => modem.cm_reboot().await?.to_string(),
        Command::Cm(CmCommand::Log) => modem.cm_log().await?.to_string(),
        Command::Cm(CmCommand::ClearLog) => modem.cm_clear_log().await?.to_string(),
        Command::Router(RouterCommand::Capability) => modem.router_capability().await?.to_string(),
        Command::Router(RouterCommand::Location) => modem.router_location().await?.to_string(),
        Command::Router(RouterCommand::SysInfo) => modem.router_sys_info().await?.to_string(),
    };

    Ok(output)
}
