//! Keybinding configuration types and parsing.
//!
//! Every palette action can be bound to any number of keys in the
//! `[keybindings]` table of `config.toml`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::input::{Key, Modifiers};

/// All palette actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Close the standalone palette (persisting session data)
    Exit,
    /// Ask the host to toggle its canvas-only view
    ToggleCanvasOnly,
    SwapColors,
    ResetColors,
    InvertTexture,
    MirrorHorizontal,
    MirrorVertical,
}

/// A single keybinding: a key name with optional modifiers.
///
/// Single-character keys are stored lowercase so `"Z"` and `"z"` are the
/// same binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parses a keybinding string like `"Ctrl+Shift+I"` or `"Tab"`.
    ///
    /// Modifiers may appear in any order and spaces around `+` are ignored.
    /// A trailing `+` key is written `"Ctrl++"`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let compact: String = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");
        let (body, plus_key) = match compact.strip_suffix("++") {
            Some(rest) => (rest.to_string(), true),
            None if compact == "+" => (String::new(), true),
            None => (compact, false),
        };

        let mut binding = KeyBinding {
            key: String::new(),
            ctrl: false,
            shift: false,
            alt: false,
        };
        let mut key = plus_key.then(|| "+".to_string());

        for part in body.split('+').filter(|p| !p.is_empty()) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                _ if key.is_some() => {
                    return Err(format!("More than one key in: {s}"));
                }
                _ => key = Some(part.to_string()),
            }
        }

        let key = key.ok_or_else(|| format!("No key specified in: {s}"))?;
        binding.key = if key.chars().count() == 1 {
            key.to_lowercase()
        } else {
            key
        };
        Ok(binding)
    }

    /// Checks whether this binding matches a key name and modifier state.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == modifiers.ctrl
            && self.shift == modifiers.shift
            && self.alt == modifiers.alt
    }
}

/// Configuration for all keybindings.
///
/// ```toml
/// [keybindings]
/// exit = ["Z"]
/// toggle_canvas_only = ["Tab"]
/// invert_texture = ["I", "Ctrl+I"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_toggle_canvas_only")]
    pub toggle_canvas_only: Vec<String>,

    #[serde(default = "default_swap_colors")]
    pub swap_colors: Vec<String>,

    #[serde(default = "default_reset_colors")]
    pub reset_colors: Vec<String>,

    #[serde(default = "default_invert_texture")]
    pub invert_texture: Vec<String>,

    #[serde(default = "default_mirror_horizontal")]
    pub mirror_horizontal: Vec<String>,

    #[serde(default = "default_mirror_vertical")]
    pub mirror_vertical: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            toggle_canvas_only: default_toggle_canvas_only(),
            swap_colors: default_swap_colors(),
            reset_colors: default_reset_colors(),
            invert_texture: default_invert_texture(),
            mirror_horizontal: default_mirror_horizontal(),
            mirror_vertical: default_mirror_vertical(),
        }
    }
}

impl KeybindingsConfig {
    fn entries(&self) -> [(&[String], Action); 7] {
        [
            (self.exit.as_slice(), Action::Exit),
            (self.toggle_canvas_only.as_slice(), Action::ToggleCanvasOnly),
            (self.swap_colors.as_slice(), Action::SwapColors),
            (self.reset_colors.as_slice(), Action::ResetColors),
            (self.invert_texture.as_slice(), Action::InvertTexture),
            (self.mirror_horizontal.as_slice(), Action::MirrorHorizontal),
            (self.mirror_vertical.as_slice(), Action::MirrorVertical),
        ]
    }

    /// Builds the lookup table from bindings to actions.
    ///
    /// Fails on an unparsable binding or when two actions share a binding.
    pub fn build_action_map(&self) -> Result<ActionMap, String> {
        let mut map = HashMap::new();
        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing) = map.insert(binding, action)
                    && existing != action
                {
                    return Err(format!(
                        "Duplicate keybinding '{binding_str}' assigned to both {existing:?} and {action:?}"
                    ));
                }
            }
        }
        Ok(ActionMap { bindings: map })
    }
}

/// Resolved keybinding table.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    bindings: HashMap<KeyBinding, Action>,
}

impl ActionMap {
    /// Looks up the action bound to `key` under the given modifiers.
    pub fn lookup(&self, key: Key, modifiers: Modifiers) -> Option<Action> {
        let name = key.binding_name()?;
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(&name, modifiers))
            .map(|(_, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn default_exit() -> Vec<String> {
    vec!["Z".to_string()]
}

fn default_toggle_canvas_only() -> Vec<String> {
    vec!["Tab".to_string()]
}

fn default_swap_colors() -> Vec<String> {
    vec!["X".to_string()]
}

fn default_reset_colors() -> Vec<String> {
    vec!["D".to_string()]
}

fn default_invert_texture() -> Vec<String> {
    vec!["I".to_string()]
}

fn default_mirror_horizontal() -> Vec<String> {
    vec!["H".to_string()]
}

fn default_mirror_vertical() -> Vec<String> {
    vec!["V".to_string()]
}
