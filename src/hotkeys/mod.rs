/*!
 * Keyboard shortcuts for the editor.
 *
 * - `keys`: combination strings, modifiers and key events
 * - `registry`: the owned binding table and its RAII scope
 * - `context`: the editor collaborators handlers act upon
 * - `actions`: the action table and what each action does
 *
 * `EditorHotkeys` ties these together: it resolves the combination for every
 * action (defaults plus config overrides) and mounts the whole table into a
 * registry for as long as the returned scope lives.
 */

pub mod actions;
pub mod context;
pub mod keys;
pub mod registry;

use log::debug;

use crate::app_config::HotkeyConfig;
use crate::errors::HotkeyError;

pub use actions::{ActionSettings, HotkeyAction, NudgeSettings, ZoomSettings};
pub use context::{
    ClipSelector, EditorContext, EditorEngine, FocusedElement, PlaybackControl, SelectionHandle,
    TimelineState,
};
pub use keys::{ComboList, Key, KeyCombo, KeyEvent, Modifiers};
pub use registry::{BindingId, HotkeyRegistry, HotkeyScope};

/// The editor's full shortcut table
#[derive(Debug, Clone)]
pub struct EditorHotkeys {
    table: Vec<(HotkeyAction, ComboList)>,
    settings: ActionSettings,
}

impl Default for EditorHotkeys {
    fn default() -> Self {
        let table = HotkeyAction::ALL
            .into_iter()
            .filter_map(|action| {
                action
                    .default_combos()
                    .parse()
                    .ok()
                    .map(|combos| (action, combos))
            })
            .collect();
        Self {
            table,
            settings: ActionSettings::default(),
        }
    }
}

impl EditorHotkeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from configuration, applying combination overrides
    pub fn from_config(config: &HotkeyConfig) -> Result<Self, HotkeyError> {
        let mut hotkeys = Self {
            settings: ActionSettings {
                zoom: config.zoom,
                nudge: config.nudge,
            },
            ..Self::default()
        };

        for (id, combos) in &config.overrides {
            let action: HotkeyAction = id.parse()?;
            let combos: ComboList = combos.parse()?;
            debug!("Overriding hotkey '{}' with '{}'", action, combos);
            if let Some(entry) = hotkeys.table.iter_mut().find(|(a, _)| *a == action) {
                entry.1 = combos;
            }
        }

        Ok(hotkeys)
    }

    pub fn settings(&self) -> &ActionSettings {
        &self.settings
    }

    /// Actions with their resolved combinations, in registration order
    pub fn bindings(&self) -> &[(HotkeyAction, ComboList)] {
        &self.table
    }

    pub fn combos_for(&self, action: HotkeyAction) -> Option<&ComboList> {
        self.table
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, combos)| combos)
    }

    /// Bind every action into `registry`.
    ///
    /// The bindings stay active while the returned scope lives and are
    /// removed, combination by combination, when it is dropped.
    pub fn mount<'r>(&self, registry: &'r mut HotkeyRegistry) -> HotkeyScope<'r> {
        let mut scope = HotkeyScope::new(registry);
        for (action, combos) in &self.table {
            let action = *action;
            let settings = self.settings;
            scope.bind_combos(combos.clone(), move |event, ctx| {
                actions::perform(action, event, ctx, &settings);
            });
        }
        debug!("Mounted {} editor hotkeys", self.table.len());
        scope
    }
}
