use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::{Color, Position};
use crate::foundation::error::{JetframeError, JetframeResult};

/// Game configuration.
///
/// Every field has a default, so a config file only needs the values it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Window title.
    pub title: String,
    /// Framebuffer and window width in pixels.
    pub width: u32,
    /// Framebuffer and window height in pixels.
    pub height: u32,
    /// Background image, drawn at the origin every frame.
    pub background: PathBuf,
    /// Sprite image, drawn at the player position.
    pub sprite: PathBuf,
    /// Sprite position on the first frame.
    pub sprite_start: Position,
    /// Pixels moved per frame while an arrow key is held.
    pub speed: i32,
    /// Clear color applied before the background.
    pub clear_color: Color,
    /// Points added per score tick.
    pub score_increment: u32,
    /// Milliseconds between score ticks.
    pub score_interval_ms: u64,
    /// Score at which the loop exits.
    pub score_goal: u32,
    /// Frame pacing target for window surfaces.
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Jet Test 1".to_string(),
            width: 1280,
            height: 720,
            background: PathBuf::from("water_background.png"),
            sprite: PathBuf::from("plane.png"),
            sprite_start: Position::new(100, 100),
            speed: 10,
            clear_color: Color::BLACK,
            score_increment: 10,
            score_interval_ms: 5000,
            score_goal: 100,
            target_fps: 60,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config from a reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> JetframeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| JetframeError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a JSON config file. Relative image paths resolve against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> JetframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            JetframeError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        if let Some(root) = path.parent() {
            cfg.background = resolve(root, &cfg.background);
            cfg.sprite = resolve(root, &cfg.sprite);
        }
        Ok(cfg)
    }

    /// Reject values the frame loop cannot run with.
    pub fn validate(&self) -> JetframeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(JetframeError::validation(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.score_interval_ms == 0 {
            return Err(JetframeError::validation(
                "score_interval_ms must be > 0",
            ));
        }
        if self.target_fps == 0 {
            return Err(JetframeError::validation("target_fps must be > 0"));
        }
        if self.speed < 0 {
            return Err(JetframeError::validation("speed must be >= 0"));
        }
        Ok(())
    }
}

fn resolve(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
