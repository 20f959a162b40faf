mod app;
mod audio;
mod command;
mod config;
mod consts;
mod difficulty;
mod game;
mod logging;
mod menu;
mod timer;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use log::info;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: moving-snake [--config <path>] [--log-file <path>]\n",
    "\n",
    "Play snake in the terminal while the food wanders around the board.\n",
    "\n",
    "Options:\n",
    "  -c, --config <path>    Read configuration from the given file\n",
    "      --log-file <path>  Write log messages to the given file\n",
    "  -h, --help             Display this help message and exit\n",
    "  -V, --version          Show the program version and exit",
);

fn main() -> ExitCode {
    match Command::from_parser(Parser::from_env()) {
        Ok(Command::Run(args)) => exit(run(args)),
        Ok(Command::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", env!("CARGO_PKG_NAME"));
            eprintln!("Try '--help' for usage.");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Arguments),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::load_default(),
    }
    .context("failed to load configuration")?;
    let log_file = args.log_file.as_deref().or(config.log.file.as_deref());
    logging::init(log_file, config.log.level).context("failed to set up logging")?;
    info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    let terminal = ratatui::init();
    let r = App::new(&config).run(terminal);
    ratatui::restore();
    r?;
    info!("Exiting");
    Ok(())
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e:?}", env!("CARGO_PKG_NAME"));
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(Arguments::default()));
    }

    #[test]
    fn config_and_log_file() {
        assert_eq!(
            parse(&["--config", "snake.toml", "--log-file=snake.log"]).unwrap(),
            Command::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log")),
            })
        );
    }

    #[test]
    fn short_config() {
        assert_eq!(
            parse(&["-c", "snake.toml"]).unwrap(),
            Command::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: None,
            })
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["--config", "x.toml", "-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--help", "--bogus"]).unwrap(), Command::Help);
    }

    #[test]
    fn version() {
        assert_eq!(parse(&["-V"]).unwrap(), Command::Version);
    }

    #[test]
    fn unknown_option() {
        assert!(parse(&["--wraparound"]).is_err());
    }

    #[test]
    fn missing_value() {
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn stray_positional() {
        assert!(parse(&["extra"]).is_err());
    }

    #[test]
    fn broken_pipe_is_success() {
        let e = anyhow::Error::from(io::Error::from(ErrorKind::BrokenPipe));
        assert_eq!(exit(Err(e)), ExitCode::SUCCESS);
    }

    #[test]
    fn other_errors_exit_2() {
        let e = anyhow::Error::from(io::Error::from(ErrorKind::PermissionDenied));
        assert_eq!(exit(Err(e)), ExitCode::from(2));
    }
}
