use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Tab - Cycle through the Upload, Chat, and Summary tabs.
- Enter - Submit the input line. The Upload tab accepts a file path or an http(s) URL, the Chat tab a question.
- CTRL+N / CTRL+P - Select the next/previous document. Questions are scoped to the selected document.
- CTRL+A - Analyze the selected document and jump to the Summary tab.
- CTRL+G - Fetch the stored summary for the selected document without re-analyzing.
- CTRL+X - Delete the selected document.
- CTRL+R - Refresh the document listing.
- Up/Down arrows, PageUp/PageDown - Scroll the chat transcript.
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn arg_base_url() -> Arg {
    return Arg::new(ConfigKey::BaseURL.to_string())
        .short('u')
        .long(ConfigKey::BaseURL.to_string())
        .env("DOCENT_BASE_URL")
        .num_args(1)
        .help(format!(
            "The base URL of the document analysis backend. [default: {}]",
            Config::default(ConfigKey::BaseURL)
        ));
}

fn arg_request_timeout() -> Arg {
    return Arg::new(ConfigKey::RequestTimeout.to_string())
        .long(ConfigKey::RequestTimeout.to_string())
        .env("DOCENT_REQUEST_TIMEOUT")
        .num_args(1)
        .help(format!(
            "Time to wait in milliseconds before a backend request times out. [default: {}]",
            Config::default(ConfigKey::RequestTimeout)
        ));
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .long(ConfigKey::Username.to_string())
        .env("DOCENT_USERNAME")
        .num_args(1)
        .help("Your user name displayed next to your questions. Defaults to $USER.");
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("DOCENT_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to a configuration file. [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions and outputs to stdout.")
        .arg(
            Arg::new("shell")
                .help("The shell to generate completions for.")
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Manage the configuration file.")
        .arg_required_else_help(true)
        .subcommand(Command::new("create").about("Create a default config file."))
        .subcommand(Command::new("path").about("Print the config file path."));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("docent")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(help_text())
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(arg_base_url())
        .arg(arg_request_timeout())
        .arg(arg_username())
        .arg(arg_config_file());
}

/// Returns false when a subcommand handled the invocation and the UI should
/// not start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(shell) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut cmd = build();
                print_completions(shell, &mut cmd);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => {
                    create_config_file().await?;
                }
                Some(("path", _)) => {
                    println!("{}", Config::default(ConfigKey::ConfigFile));
                }
                _ => {}
            }
            return Ok(false);
        }
        _ => {}
    }

    Config::load(vec![&matches]).await?;

    return Ok(true);
}
