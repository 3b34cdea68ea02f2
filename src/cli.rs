use clap::{value_parser, Arg, ArgAction, Command};

use crate::constants::{DEFAULT_EXPORT_FILE, GITHUB_API_URL};

pub fn build_cli() -> Command {
    Command::new("gc2gh")
        .about("Import Google Code issues from a Takeout export into GitHub")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Google Takeout project hosting export")
                .default_value(DEFAULT_EXPORT_FILE)
        )
        .arg(
            Arg::new("google-project")
                .short('p')
                .long("google-project")
                .value_name("NAME")
                .help("Name of the Google Code project to migrate")
                .required(true)
        )
        .arg(
            Arg::new("github-owner")
                .short('o')
                .long("github-owner")
                .value_name("OWNER")
                .help("User or organization owning the GitHub repository")
                .required(true)
        )
        .arg(
            Arg::new("github-project")
                .short('r')
                .long("github-project")
                .value_name("REPO")
                .help("GitHub repository receiving the issues")
                .required(true)
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .value_name("TOKEN")
                .help("GitHub access token (defaults to $GITHUB_TOKEN)")
        )
        .arg(
            Arg::new("start-from")
                .long("start-from")
                .value_name("ID")
                .help("Skip Google Code issues with a lower id")
                .value_parser(value_parser!(u64))
        )
        .arg(
            Arg::new("finish-at")
                .long("finish-at")
                .value_name("ID")
                .help("Skip Google Code issues with a higher id")
                .value_parser(value_parser!(u64))
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("GitHub API base URL")
                .default_value(GITHUB_API_URL)
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Convert and log the issues without submitting them")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v debug, -vv trace)")
                .action(ArgAction::Count)
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log warnings and errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
        )
        .arg(
            Arg::new("save-log")
                .long("save-log")
                .help("Also write the log to a file in the user cache directory")
                .action(ArgAction::SetTrue)
        )
}
