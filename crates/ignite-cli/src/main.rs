//! Ignite CLI
//!
//! Collects name, type and directory from flags or interactive prompts,
//! confirms, and hands the validated request to the experiment handler.
//! Exit codes: 0 on success or a clean "not implemented" outcome, 1 on
//! failure, 2 on user abort.

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use ignite_core::{
    bootstrap, validate, CreateRequest, ExperimentHandler, ExperimentType, IgniteConfig,
    ScaffoldOutcome, ShellRunner,
};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const DEFAULT_NAME: &str = "experiment";
const DEFAULT_DIR: &str = "./app/flow";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Command::new("ignite")
        .version(ignite_core::VERSION)
        .about("Scaffold a new prompting experiment workspace")
        .arg(
            Arg::new("name")
                .long("name")
                .help("Experiment name, bare or in full issue-<number>-<name> form"),
        )
        .arg(
            Arg::new("issue")
                .long("issue")
                .value_parser(value_parser!(u32))
                .help("Issue number (default: derived from the current time)"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .help("Experiment type: prompt-flow, jupyter-notebook, prompty or python"),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .help("Directory to store the experiment"),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .action(ArgAction::SetTrue)
                .help("Skip the confirmation prompt"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the outcome as JSON"),
        );

    let matches = cli.get_matches();

    println!("Welcome to Ignite!");

    let config = IgniteConfig::new();
    let runner = Arc::new(ShellRunner::new(Duration::from_secs(
        config.command_timeout_secs,
    )));

    bootstrap::bootstrap(&config.settings_path, runner.as_ref()).await?;
    tracing::debug!("Environment bootstrap complete");

    let issue = matches
        .get_one::<u32>("issue")
        .copied()
        .unwrap_or_else(default_issue_number);

    let name = match matches.get_one::<String>("name") {
        Some(raw) => {
            let name = compose_name(raw, issue);
            validate::validate_name(&name)?;
            name
        }
        None => prompt_name(issue)?,
    };

    let kind = match matches.get_one::<String>("type") {
        Some(raw) => raw.parse::<ExperimentType>()?,
        None => prompt_type()?,
    };

    let dir = match matches.get_one::<String>("dir") {
        Some(dir) => dir.clone(),
        None => prompt("Enter the directory to store the experiment", DEFAULT_DIR)?,
    };

    println!("Creating experiment: {name} for type: {kind} in directory: {dir}");
    if !matches.get_flag("yes") && !confirm("Proceed?")? {
        println!("Aborted.");
        std::process::exit(2);
    }

    let handler = ExperimentHandler::new(config, runner);
    let request = CreateRequest::new(name, kind, dir);
    let outcome = handler.create(&request).await;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            ScaffoldOutcome::Created { name, path } => {
                println!("Experiment setup complete: {name} in {path}");
            }
            ScaffoldOutcome::Unsupported { kind } => {
                println!("{kind} is not implemented yet.");
            }
            ScaffoldOutcome::Failed { message } => {
                eprintln!("Something went wrong: {message}");
            }
        }
    }

    if outcome.is_failure() {
        std::process::exit(1);
    }
    Ok(())
}

/// Derive a quasi-unique default issue number from the current timestamp
fn default_issue_number() -> u32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    (millis % 1_000_000) as u32
}

/// Compose the full experiment name from a bare name and an issue number
///
/// Names already in full `issue-<number>-<name>` form are used as-is.
fn compose_name(raw: &str, issue: u32) -> String {
    if validate::is_valid_name(raw) {
        raw.to_string()
    } else {
        format!("issue-{issue}-{raw}")
    }
}

fn prompt(question: &str, default: &str) -> anyhow::Result<String> {
    print!("{question} [{default}]: ");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    let trimmed = line.trim();
    Ok(if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    })
}

fn prompt_name(issue: u32) -> anyhow::Result<String> {
    loop {
        let raw = prompt("Enter the name of the experiment", DEFAULT_NAME)?;
        let name = compose_name(&raw, issue);
        if validate::is_valid_name(&name) {
            return Ok(name);
        }
        println!(
            "Invalid name. The name should be in the format 'issue-{{number}}-{{name}}', \
             i.e. issue-123-name, issue-456-name-123"
        );
    }
}

fn prompt_type() -> anyhow::Result<ExperimentType> {
    println!("Choose a type for the experiment:");
    for (index, kind) in ExperimentType::ALL.iter().enumerate() {
        println!("{}. {}", index + 1, kind.label());
    }
    loop {
        let choice = prompt("Enter the number of your choice", "1")?;
        match choice.parse::<usize>() {
            Ok(n) if (1..=ExperimentType::ALL.len()).contains(&n) => {
                return Ok(ExperimentType::ALL[n - 1]);
            }
            _ => println!(
                "Invalid choice. Please enter a number corresponding to one of the options."
            ),
        }
    }
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    let answer = prompt(question, "y")?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}
