use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, finder, info, types::Candidate, ytmusic::YtMusicClient};

pub async fn find(track_name: &str, album_name: &str, artist_name: &str) {
    let client = match YtMusicClient::new() {
        Ok(c) => c,
        Err(e) => error!("Cannot create YouTube Music client. Err: {}", e),
    };

    info!(
        "Searching for: {} - {} - {}",
        artist_name, album_name, track_name
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching YouTube Music...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = finder::find_best(&client, track_name, album_name, artist_name).await;
    pb.finish_and_clear();

    match result {
        Ok((candidate, score)) => {
            info!("Best match: {} (score {:.2})", describe(&candidate), score);
            println!("{}", finder::watch_url(&candidate.video_id));
        }
        Err(e) => error!("{}", e),
    }
}

fn describe(candidate: &Candidate) -> String {
    let mut text = candidate.title.clone();
    if !candidate.artists.is_empty() {
        text.push_str(&format!(" - {}", candidate.artists.join(", ")));
    }
    if let Some(album) = &candidate.album {
        text.push_str(&format!(" [{}]", album));
    }
    if let Some(duration) = &candidate.duration {
        text.push_str(&format!(" {}", duration));
    }
    text
}
