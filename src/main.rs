use std::{env, ffi::OsString};

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
    error::ErrorKind,
};

use ytmatch::{cli, config, warning};

const USAGE: &str = "Usage: ytmatch <track name> <album name> <artist name>";

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  override_usage = "ytmatch <TRACK_NAME> <ALBUM_NAME> <ARTIST_NAME>",
  styles=styles(),
)]
struct Cli {
    /// Name of the track to look up
    track_name: String,

    /// Name of the album the track appears on
    album_name: String,

    /// Name of the performing artist
    artist_name: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = match Cli::try_parse_from(cli_args(env::args_os())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    cli::find(&cli.track_name, &cli.album_name, &cli.artist_name).await;
}

/// Marks everything as positional when exactly three arguments are given,
/// so names like `-1` or `--help` are looked up instead of parsed as flags.
fn cli_args(args: impl Iterator<Item = OsString>) -> Vec<OsString> {
    let mut args: Vec<OsString> = args.collect();
    if args.len() == 4 {
        args.insert(1, OsString::from("--"));
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn three_arguments_are_forced_positional() {
        let args = cli_args(os_args(&["ytmatch", "-1", "--help", "Artist"]).into_iter());
        assert_eq!(args, os_args(&["ytmatch", "--", "-1", "--help", "Artist"]));

        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.track_name, "-1");
        assert_eq!(cli.album_name, "--help");
        assert_eq!(cli.artist_name, "Artist");
    }

    #[test]
    fn other_argument_counts_are_left_alone() {
        let help = os_args(&["ytmatch", "--help"]);
        assert_eq!(cli_args(help.clone().into_iter()), help);

        for args in [
            os_args(&["ytmatch", "a", "b"]),
            os_args(&["ytmatch", "a", "b", "c", "d"]),
        ] {
            assert!(Cli::try_parse_from(cli_args(args.into_iter())).is_err());
        }
    }
}
