use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("hivelink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Supervise a dev tunnel, auth token, and environment setup")
        .long_about(
            "Hivelink wraps the shell commands behind a cluster development setup: \
            starting the tunnel, refreshing the auth token, declaring environment \
            variables, and probing connection health from process liveness, auth \
            validity, and kubeconfig presence.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load configuration from this file instead of the hierarchy")
                .value_name("PATH")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("status")
                .about("Probe connection health and print a status report")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("connect")
                .about("Configure routing (if set) and start the tunnel in the background"),
        )
        .subcommand(Command::new("refresh").about("Refresh the auth token and re-probe"))
        .subcommand(
            Command::new("setup")
                .about("Run the configured environment setup commands, stopping at first failure"),
        )
        .subcommand(
            Command::new("run")
                .about("Run an arbitrary shell command through the supervisor")
                .arg(
                    Arg::new("command")
                        .help("Command string, passed to sh -c")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("background")
                        .long("background")
                        .short('b')
                        .help("Fire and forget: detach the command, no output capture")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("timeout-secs")
                        .long("timeout-secs")
                        .help("Timeout for synchronous execution (overrides config)")
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("logs")
                .about("Show the most recent supervisor log entries")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .help("Number of entries to show")
                        .value_parser(value_parser!(usize))
                        .default_value("10"),
                ),
        )
        .subcommand(
            Command::new("watch")
                .about("Probe on the configured interval and print health transitions")
                .arg(
                    Arg::new("interval-secs")
                        .long("interval-secs")
                        .help("Seconds between probe ticks (overrides config)")
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("open")
                .about("Open the configured console or token page in the browser")
                .arg(
                    Arg::new("target")
                        .help("Which link to open")
                        .required(true)
                        .value_parser(["console", "token"])
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(value_parser!(Shell))
                        .index(1),
                ),
        )
}
