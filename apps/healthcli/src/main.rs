// apps/healthcli/src/main.rs

use clap::{Arg, ArgMatches, Command};
use secrecy::Secret;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use health_lib::health_service::HealthService;
use health_lib::probe::MySqlClient;
use health_lib::util::ProbeSettings;

fn cli() -> Command {
    Command::new("healthcli")
        .about("One-shot database health probe")
        .subcommand_required(true)
        .subcommand(
            Command::new("check")
                .about("Probe the database once and print the health JSON")
                .arg(
                    Arg::new("database-url")
                        .long("database-url")
                        .env("DATABASE_URL")
                        .hide_env_values(true)
                        .required(true)
                        .help("MySQL connection URL"),
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("5")
                        .help("Seconds to wait for a connection"),
                ),
        )
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only the JSON body.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    let code = match matches.subcommand() {
        Some(("check", sub)) => {
            let result = run_check(sub).await;
            if let Err(e) = &result {
                eprintln!("healthcli: {}", e);
            }
            exit_code(&result)
        }
        _ => 2,
    };

    process::exit(code);
}

/// 0 healthy, 1 database unhealthy, 2 unusable invocation.
fn exit_code(result: &Result<bool, Box<dyn std::error::Error>>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

async fn run_check(matches: &ArgMatches) -> Result<bool, Box<dyn std::error::Error>> {
    let url = matches
        .get_one::<String>("database-url")
        .ok_or("--database-url or DATABASE_URL must be set")?;
    let timeout = matches.get_one::<u64>("timeout").copied().unwrap_or(5);

    let settings = ProbeSettings {
        connect_timeout: Duration::from_secs(timeout),
    };
    tracing::debug!(timeout_secs = timeout, "probing database");
    let client = MySqlClient::from_url(&Secret::new(url.clone()), &settings)?;
    let service = HealthService::from_mysql(client);

    let status = service.check_health().await;
    println!("{}", serde_json::to_string(&status)?);

    Ok(status.is_healthy())
}
