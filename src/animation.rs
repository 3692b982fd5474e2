use std::fmt;

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Shown in place of the animation when it could not be loaded
pub const ANIMATION_FAILED: &str = "Animation failed to load.";

/// Fetch a Lottie animation document. Returns `None` on any failure.
pub async fn fetch_animation(client: &Client, url: &str) -> Option<Value> {
    debug!("Fetching animation from {}", url);

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Animation request failed: {}", e);
            return None;
        }
    };

    if response.status() != StatusCode::OK {
        warn!("Animation request returned status {}", response.status());
        return None;
    }

    match response.json::<Value>().await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Animation payload is not JSON: {}", e);
            None
        }
    }
}

/// The few Lottie header fields worth showing in a terminal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationSummary {
    pub name: Option<String>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub frame_rate: Option<f64>,
    pub frames: Option<f64>,
}

impl AnimationSummary {
    pub fn from_value(value: &Value) -> Self {
        let frames = match (value["ip"].as_f64(), value["op"].as_f64()) {
            (Some(start), Some(end)) if end >= start => Some(end - start),
            _ => None,
        };

        AnimationSummary {
            name: value["nm"].as_str().map(String::from),
            width: value["w"].as_u64(),
            height: value["h"].as_u64(),
            frame_rate: value["fr"].as_f64(),
            frames,
        }
    }
}

impl fmt::Display for AnimationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Animation '{}'", self.name.as_deref().unwrap_or("untitled"))?;
        if let (Some(w), Some(h)) = (self.width, self.height) {
            write!(f, " {}x{}", w, h)?;
        }
        if let Some(frames) = self.frames {
            write!(f, ", {} frames", frames)?;
        }
        if let Some(fr) = self.frame_rate {
            write!(f, " @ {} fps", fr)?;
        }
        Ok(())
    }
}
