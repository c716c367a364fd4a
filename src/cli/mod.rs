//! # CLI Module
//!
//! Command-line layer of ytmatch. It owns everything the user sees: the
//! progress spinner, status lines on stderr and the final URL on stdout.
//!
//! ## Layers
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Finder (query + best match)
//!     ↓
//! YouTube Music client (HTTP)
//! ```
//!
//! ## Commands
//!
//! - [`find`] - Looks up a track and prints the best-matching watch URL
//!
//! ## Usage
//!
//! ```bash
//! ytmatch "Imagine" "Imagine" "John Lennon"
//! ```
//!
//! Failures are reported through the `error!` macro and end the process with
//! exit code 1.

mod find;

pub use find::find;
