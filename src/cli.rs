use clap::Parser;
use std::path::PathBuf;

use crate::runner::Mode;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Post the latest comment of every Trello card carrying a sticker to Slack"
)]
pub struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Any value switches to debug mode: no Trello requests are made
    pub debug: Option<String>,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.debug.is_some() {
            Mode::Debug
        } else {
            Mode::Live
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_positional_is_live() {
        let args = Args::try_parse_from(["trello-sticker-notifier"]).unwrap();
        assert_eq!(args.mode(), Mode::Live);
        assert_eq!(args.config, PathBuf::from("config.yaml"));
    }

    #[test]
    fn one_positional_is_debug() {
        let args = Args::try_parse_from(["trello-sticker-notifier", "debug"]).unwrap();
        assert_eq!(args.mode(), Mode::Debug);

        let args =
            Args::try_parse_from(["trello-sticker-notifier", "--config", "c.yaml", "1"]).unwrap();
        assert_eq!(args.mode(), Mode::Debug);
        assert_eq!(args.config, PathBuf::from("c.yaml"));
    }

    #[test]
    fn two_positionals_is_a_usage_error() {
        let err = Args::try_parse_from(["trello-sticker-notifier", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
