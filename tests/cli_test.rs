use std::process::{Command, Output};

const USAGE: &str = "Usage: ytmatch <track name> <album name> <artist name>\n";

// Nothing listens on the discard port, so lookups fail fast at the search step
const CLOSED_API_URL: &str = "http://127.0.0.1:9/youtubei/v1/";

// Helper function to run the binary with a search endpoint that refuses connections
fn run_ytmatch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ytmatch"))
        .args(args)
        .env("YTMUSIC_API_URL", CLOSED_API_URL)
        .env("NO_PROXY", "*")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run ytmatch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    for args in [
        vec![],
        vec!["Imagine", "John Lennon"],
        vec!["Imagine", "Imagine", "John Lennon", "extra"],
    ] {
        let output = run_ytmatch(&args);

        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert_eq!(stdout(&output), USAGE, "args: {:?}", args);
    }
}

#[test]
fn test_hyphen_leading_track_name_is_looked_up() {
    let output = run_ytmatch(&["-1", "Album", "Artist"]);

    // Parsing succeeded, the search against the closed port did not
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("Usage"));
    let err = stderr(&output);
    assert!(err.contains("Searching for: Artist - Album - -1"), "stderr: {}", err);
    assert!(err.contains("request to YouTube Music failed"), "stderr: {}", err);
}

#[test]
fn test_flag_like_names_are_looked_up_with_three_arguments() {
    let output = run_ytmatch(&["--help", "Album", "Artist"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("Usage"));
    assert!(stderr(&output).contains("Searching for: Artist - Album - --help"));
}

#[test]
fn test_help_and_version_flags() {
    let help = run_ytmatch(&["--help"]);
    assert_eq!(help.status.code(), Some(0));
    assert!(stdout(&help).contains("TRACK_NAME"));

    let version = run_ytmatch(&["--version"]);
    assert_eq!(version.status.code(), Some(0));
    assert!(stdout(&version).contains(env!("CARGO_PKG_VERSION")));
}
