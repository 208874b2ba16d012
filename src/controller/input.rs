/// Platform-agnostic input handling
use serde::Deserialize;

/// Discrete player commands, produced from key-press edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Restart,
    TogglePause,
    SpeedBoost,
    Quit,
}

/// Key mapping configuration. Key names follow the browser/winit logical
/// key naming (`"a"`, `" "`, `"Shift"`, `"Escape"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub restart: String,
    pub pause: String,
    pub boost: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "a".to_string(),
            right: "d".to_string(),
            restart: "r".to_string(),
            pause: " ".to_string(),
            boost: "Shift".to_string(),
            quit: "Escape".to_string(),
        }
    }
}

/// Maps key names to intents
#[derive(Debug, Clone)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn intent_for_key(&self, key: &str) -> Option<Intent> {
        let b = &self.bindings;
        if key == "ArrowLeft" || key.eq_ignore_ascii_case(&b.left) {
            Some(Intent::MoveLeft)
        } else if key == "ArrowRight" || key.eq_ignore_ascii_case(&b.right) {
            Some(Intent::MoveRight)
        } else if key.eq_ignore_ascii_case(&b.restart) {
            Some(Intent::Restart)
        } else if key == b.pause {
            Some(Intent::TogglePause)
        } else if key == b.boost {
            Some(Intent::SpeedBoost)
        } else if key == b.quit {
            Some(Intent::Quit)
        } else {
            None
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let input = InputProcessor::default();
        assert_eq!(input.intent_for_key("a"), Some(Intent::MoveLeft));
        assert_eq!(input.intent_for_key("A"), Some(Intent::MoveLeft));
        assert_eq!(input.intent_for_key("ArrowLeft"), Some(Intent::MoveLeft));
        assert_eq!(input.intent_for_key("d"), Some(Intent::MoveRight));
        assert_eq!(input.intent_for_key("ArrowRight"), Some(Intent::MoveRight));
        assert_eq!(input.intent_for_key("r"), Some(Intent::Restart));
        assert_eq!(input.intent_for_key(" "), Some(Intent::TogglePause));
        assert_eq!(input.intent_for_key("Shift"), Some(Intent::SpeedBoost));
        assert_eq!(input.intent_for_key("Escape"), Some(Intent::Quit));
        assert_eq!(input.intent_for_key("w"), None);
    }

    #[test]
    fn test_rebound_keys() {
        let input = InputProcessor::new(KeyBindings {
            left: "j".to_string(),
            right: "l".to_string(),
            ..KeyBindings::default()
        });
        assert_eq!(input.intent_for_key("j"), Some(Intent::MoveLeft));
        assert_eq!(input.intent_for_key("l"), Some(Intent::MoveRight));
        assert_eq!(input.intent_for_key("a"), None);
        // arrows keep working whatever the bindings say
        assert_eq!(input.intent_for_key("ArrowLeft"), Some(Intent::MoveLeft));
    }
}
