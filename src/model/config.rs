use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use super::action::{ActionId, ActionSetId};
use super::undo_record::UndoMode;

/// Configuration from actionlist.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub undo: UndoConfig,
    #[serde(default)]
    pub menus: MenuConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Number of numbered items to start with when no item file is given
    #[serde(default = "default_initial_count")]
    pub initial_count: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            initial_count: default_initial_count(),
        }
    }
}

fn default_initial_count() -> usize {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndoConfig {
    /// How long a delete stays revocable
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    #[serde(default)]
    pub mode: UndoMode,
}

impl Default for UndoConfig {
    fn default() -> Self {
        UndoConfig {
            window_ms: default_window_ms(),
            mode: UndoMode::default(),
        }
    }
}

impl UndoConfig {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

fn default_window_ms() -> u64 {
    5000
}

/// Action set presented for each session phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_menu")]
    pub single: Vec<ActionId>,
    #[serde(default = "default_menu")]
    pub multiple: Vec<ActionId>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            single: default_menu(),
            multiple: default_menu(),
        }
    }
}

impl MenuConfig {
    pub fn actions(&self, set: ActionSetId) -> &[ActionId] {
        match set {
            ActionSetId::Single => &self.single,
            ActionSetId::Multiple => &self.multiple,
        }
    }
}

fn default_menu() -> Vec<ActionId> {
    vec![ActionId::SelectAll, ActionId::Delete]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// How long a tap toast stays in the status row
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            toast_ms: default_toast_ms(),
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_toast_ms() -> u64 {
    2000
}
