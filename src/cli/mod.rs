//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::api::HutReservation;
use crate::config::{Config, Credentials, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::error::{HutError, Result};
use crate::exit_code::exit_code_for_error;
use crate::logging;
use crate::output::OutputWriter;
use crate::utils::{FileUtils, StringUtils};
use clap::{Arg, ArgAction, ArgMatches, Command};

/// What to fetch once logged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Overview,
    HutInfo(String),
    Availability(String),
}

/// Main entry point for the CLI application
pub fn run() {
    let matches = create_app().get_matches();
    logging::init(matches.get_flag("verbose"));

    if let Err(e) = run_with_args(&matches) {
        if !matches.get_flag("silent") {
            eprintln!("hutres: error: {}", e);
        }
        std::process::exit(exit_code_for_error(&e));
    }
}

/// Run hutres with parsed command line arguments
fn run_with_args(matches: &ArgMatches) -> Result<()> {
    let config = build_config_from_args(matches)?;
    let action = action_from_args(matches);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| HutError::Config(format!("Failed to create async runtime: {}", e)))?;

    let writer = OutputWriter::new(config.output.clone());
    writer.begin()?;
    rt.block_on(async {
        let client = HutReservation::new(&config)?;
        execute(&client, &action, &writer).await
    })
}

/// Log in and write the requested resource.
///
/// Labeled output is written step by step, so lines from steps that
/// succeeded stay visible when a later step fails. `--json` writes one
/// document once everything is fetched.
pub async fn execute(
    client: &HutReservation,
    action: &Action,
    writer: &OutputWriter,
) -> Result<()> {
    match action {
        Action::Overview if writer.is_json() => {
            let overview = client.overview().await?;
            writer.write(&writer.format_overview(&overview)?)
        }
        Action::Overview => {
            let token = client.csrf_token().await?;
            writer.write(&writer.format_token(token.as_deref()))?;
            client.login(token.as_deref()).await?;

            let current_user = client.current_user().await?;
            writer.write(&writer.format_labeled("Current user", &current_user)?)?;

            let huts = client.huts_list().await?;
            writer.write(&writer.format_labeled("Huts list", &huts)?)
        }
        Action::HutInfo(hut_id) => {
            client.authenticate().await?;
            let info = client.hut_info(hut_id).await?;
            writer.write(&writer.format_labeled("Hut info", &info)?)
        }
        Action::Availability(hut_id) => {
            client.authenticate().await?;
            let availability = client.hut_availability(hut_id).await?;
            writer.write(&writer.format_labeled("Hut availability", &availability)?)
        }
    }
}

/// Create the CLI application structure
pub fn create_app() -> Command {
    Command::new("hutres")
        .version(crate::VERSION)
        .about("Log in to hut-reservation.org and print your account and managed huts")
        .arg(Arg::new("username")
            .short('u')
            .long("username")
            .value_name("EMAIL")
            .env("HUT_USERNAME")
            .help("Account username")
            .required(true))
        .arg(Arg::new("password")
            .short('p')
            .long("password")
            .value_name("PASSWORD")
            .env("HUT_PASSWORD")
            .hide_env_values(true)
            .help("Account password")
            .required(true))
        .arg(Arg::new("base-url")
            .long("base-url")
            .value_name("URL")
            .env("HUT_BASE_URL")
            .help("Base URL of the reservation service")
            .default_value(DEFAULT_BASE_URL))
        .arg(Arg::new("user-agent")
            .short('A')
            .long("user-agent")
            .value_name("STRING")
            .help("User-Agent header")
            .default_value(DEFAULT_USER_AGENT))
        .arg(Arg::new("header")
            .short('H')
            .long("header")
            .value_name("HEADER")
            .help("Add a header to every request")
            .action(ArgAction::Append))
        .arg(Arg::new("timeout")
            .long("timeout")
            .value_name("SECONDS")
            .help("Maximum time per request")
            .default_value("20"))
        .arg(Arg::new("connect-timeout")
            .long("connect-timeout")
            .value_name("SECONDS")
            .help("Maximum time for connection")
            .default_value("10"))
        .arg(Arg::new("json")
            .long("json")
            .help("Print a single JSON document instead of labeled lines")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("pretty")
            .long("pretty")
            .help("Pretty-print JSON values")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Write output to file"))
        .arg(Arg::new("silent")
            .short('s')
            .long("silent")
            .help("Silent mode")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Verbose output")
            .action(ArgAction::SetTrue))
        .subcommand(Command::new("overview")
            .about("Print the CSRF token, current user and huts list (default)"))
        .subcommand(Command::new("hut-info")
            .about("Print the public information of a hut")
            .arg(Arg::new("hut-id")
                .value_name("HUT_ID")
                .required(true)))
        .subcommand(Command::new("availability")
            .about("Print the availability calendar of a hut")
            .arg(Arg::new("hut-id")
                .value_name("HUT_ID")
                .required(true)))
}

/// Pick the action from the subcommand, defaulting to the overview
pub fn action_from_args(matches: &ArgMatches) -> Action {
    match matches.subcommand() {
        Some(("hut-info", sub)) => Action::HutInfo(hut_id(sub)),
        Some(("availability", sub)) => Action::Availability(hut_id(sub)),
        _ => Action::Overview,
    }
}

fn hut_id(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("hut-id")
        .cloned()
        .unwrap_or_default()
}

/// Build configuration from command line arguments
pub fn build_config_from_args(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::default();

    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.base_url = base_url.clone();
    }

    let username = matches.get_one::<String>("username").cloned().unwrap_or_default();
    let password = matches.get_one::<String>("password").cloned().unwrap_or_default();
    config.credentials = Credentials::new(username, password);

    if let Some(user_agent) = matches.get_one::<String>("user-agent") {
        config.user_agent = user_agent.clone();
    }

    if let Some(headers) = matches.get_many::<String>("header") {
        for header_str in headers {
            let (key, value) = StringUtils::parse_header(header_str)?;
            config.headers.insert(key, value);
        }
    }

    if let Some(timeout_str) = matches.get_one::<String>("timeout") {
        config.timeout = StringUtils::parse_timeout(timeout_str)?;
    }

    if let Some(connect_timeout_str) = matches.get_one::<String>("connect-timeout") {
        config.connect_timeout = StringUtils::parse_timeout(connect_timeout_str)?;
    }

    config.output.json = matches.get_flag("json");
    config.output.pretty = matches.get_flag("pretty");

    if let Some(output_file) = matches.get_one::<String>("output") {
        config.output.file = Some(FileUtils::expand_path(output_file)?);
    }

    Ok(config)
}

#[cfg(test)]
mod tests;
