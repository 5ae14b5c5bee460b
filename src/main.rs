mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod logging;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::highscore::HighScoreFile;
use anyhow::Context;
use log::{error, info};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [<options>]

Play Snake in the terminal

Options:
  -c, --config <file>   Read configuration from the given file
      --log-file <file> Append log messages to the given file
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: lexopt::Parser) -> Result<Invocation, lexopt::Error> {
        use lexopt::prelude::*;
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Short('h') | Long("help") => return Ok(Invocation::Help),
                Short('V') | Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    /// Configuration file to use instead of the default one
    config: Option<PathBuf>,

    /// Log file to use instead of the configured one
    log_file: Option<PathBuf>,
}

impl Arguments {
    /// Load the configuration and start logging, returning where the high
    /// score should be kept
    fn setup(&self) -> anyhow::Result<HighScoreFile> {
        let config = match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::load(&Config::default_path()?, true),
        }
        .context("failed to load configuration")?;
        if let Some(path) = self.log_file.as_ref().or(config.logging.file.as_ref()) {
            logging::init(path, config.logging.level)?;
        }
        Ok(config.high_score_store())
    }

    fn run(self) -> ExitCode {
        let store = match self.setup() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("gridsnake: {e:#}");
                return ExitCode::from(2);
            }
        };
        info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
        let terminal = ratatui::init();
        let r = match terminal.size() {
            Ok(size) => App::new(store, size).run(terminal),
            Err(e) => Err(e),
        };
        ratatui::restore();
        io_exit(r)
    }
}

fn main() -> ExitCode {
    match Invocation::from_parser(lexopt::Parser::from_env()) {
        Ok(Invocation::Run(args)) => args.run(),
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprint!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => {
            info!("Exiting");
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!("I/O error: {e}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(lexopt::Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Invocation::Run(Arguments::default()));
    }

    #[rstest]
    #[case(&["-c", "snake.toml"])]
    #[case(&["--config", "snake.toml"])]
    #[case(&["--config=snake.toml"])]
    #[case(&["-csnake.toml"])]
    fn config_option(#[case] args: &[&str]) {
        assert_eq!(
            parse(args).unwrap(),
            Invocation::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: None,
            })
        );
    }

    #[test]
    fn log_file_option() {
        assert_eq!(
            parse(&["--log-file", "snake.log", "-c", "snake.toml"]).unwrap(),
            Invocation::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log")),
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Invocation::Help)]
    #[case(&["--help"], Invocation::Help)]
    #[case(&["-V"], Invocation::Version)]
    #[case(&["--version"], Invocation::Version)]
    #[case(&["-c", "snake.toml", "--help"], Invocation::Help)]
    fn info_options(#[case] args: &[&str], #[case] expected: Invocation) {
        assert_eq!(parse(args).unwrap(), expected);
    }

    #[rstest]
    #[case(&["--speed", "10"])]
    #[case(&["extra"])]
    #[case(&["--config"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
