use std::env;

use ytmatch::config::*;

// Single test so the environment is never modified concurrently
#[test]
fn test_settings_from_environment() {
    unsafe {
        env::remove_var("YTMUSIC_API_URL");
        env::remove_var("YTMUSIC_LANGUAGE");
        env::remove_var("YTMUSIC_LOCATION");
    }

    // Defaults
    assert_eq!(ytmusic_api_url(), DEFAULT_YTMUSIC_API_URL);
    assert_eq!(ytmusic_language(), "en");
    assert_eq!(ytmusic_location(), None);

    unsafe {
        env::set_var("YTMUSIC_API_URL", "http://localhost:9000/v1");
        env::set_var("YTMUSIC_LANGUAGE", "de");
        env::set_var("YTMUSIC_LOCATION", "AT");
    }

    // Trailing slash is added
    assert_eq!(ytmusic_api_url(), "http://localhost:9000/v1/");
    assert_eq!(ytmusic_language(), "de");
    assert_eq!(ytmusic_location().as_deref(), Some("AT"));

    // Blank location counts as unset
    unsafe {
        env::set_var("YTMUSIC_LOCATION", "  ");
    }
    assert_eq!(ytmusic_location(), None);

    // dirs reads HOME/XDG variables, so this stays in the same test
    assert!(env_path().ends_with("ytmatch/.env"));
}
