/*!
 * Editor actions reachable from the keyboard.
 *
 * Each `HotkeyAction` carries its default combination list and the focus
 * policy it applies before touching the editor.
 */

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::HotkeyError;
use crate::hotkeys::context::EditorContext;
use crate::hotkeys::keys::KeyEvent;

/// Seconds to microseconds, the unit the engine expects for split positions
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// All editor actions with a keyboard binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HotkeyAction {
    PlayPause,
    Split,
    Delete,
    SelectAll,
    ZoomIn,
    ZoomOut,
    Undo,
    Redo,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    FramePrev,
    FrameNext,
}

/// Which focused elements suppress an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusGuard {
    /// Always runs
    None,
    /// Skipped while an `input` or `textarea` has focus
    TextInput,
    /// Also skipped inside contenteditable elements
    Editable,
}

impl HotkeyAction {
    /// Registration order of the editor table
    pub const ALL: [HotkeyAction; 14] = [
        Self::PlayPause,
        Self::Split,
        Self::Delete,
        Self::SelectAll,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::Undo,
        Self::Redo,
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveLeft,
        Self::MoveRight,
        Self::FramePrev,
        Self::FrameNext,
    ];

    /// Identifier used in configuration overrides
    pub const fn id(&self) -> &'static str {
        match self {
            Self::PlayPause => "play_pause",
            Self::Split => "split",
            Self::Delete => "delete",
            Self::SelectAll => "select_all",
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::FramePrev => "frame_prev",
            Self::FrameNext => "frame_next",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::PlayPause => "Play / pause",
            Self::Split => "Split selected clips at the playhead",
            Self::Delete => "Delete selected clips",
            Self::SelectAll => "Select all clips",
            Self::ZoomIn => "Zoom timeline in",
            Self::ZoomOut => "Zoom timeline out",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::MoveUp => "Nudge selection up (shift: faster)",
            Self::MoveDown => "Nudge selection down (shift: faster)",
            Self::MoveLeft => "Nudge selection left (shift: faster)",
            Self::MoveRight => "Nudge selection right (shift: faster)",
            Self::FramePrev => "Previous frame",
            Self::FrameNext => "Next frame",
        }
    }

    pub const fn default_combos(&self) -> &'static str {
        match self {
            Self::PlayPause => "space",
            Self::Split => "command+b, ctrl+b",
            Self::Delete => "backspace, delete",
            Self::SelectAll => "command+a, ctrl+a",
            Self::ZoomIn => "command+=, ctrl+=",
            Self::ZoomOut => "command+-, ctrl+-",
            Self::Undo => "command+z, ctrl+z",
            Self::Redo => "command+shift+z, ctrl+shift+z, command+y, ctrl+y",
            Self::MoveUp => "up, shift+up",
            Self::MoveDown => "down, shift+down",
            Self::MoveLeft => "left, shift+left",
            Self::MoveRight => "right, shift+right",
            Self::FramePrev => "command+left, ctrl+left",
            Self::FrameNext => "command+right, ctrl+right",
        }
    }

    pub const fn focus_guard(&self) -> FocusGuard {
        match self {
            Self::Split | Self::ZoomIn | Self::ZoomOut => FocusGuard::None,
            Self::Delete => FocusGuard::Editable,
            _ => FocusGuard::TextInput,
        }
    }

    /// Whether the host's native shortcut is suppressed.
    /// Delete leaves the native behaviour alone.
    pub const fn prevents_default(&self) -> bool {
        !matches!(self, Self::Delete)
    }
}

impl fmt::Display for HotkeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for HotkeyAction {
    type Err = HotkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s.trim())
            .ok_or_else(|| HotkeyError::UnknownAction(s.to_string()))
    }
}

/// Timeline zoom limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSettings {
    #[serde(default = "default_zoom_min")]
    pub min: f64,
    #[serde(default = "default_zoom_max")]
    pub max: f64,
    #[serde(default = "default_zoom_step")]
    pub step: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: default_zoom_min(),
            max: default_zoom_max(),
            step: default_zoom_step(),
        }
    }
}

/// Selection nudge distances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NudgeSettings {
    #[serde(default = "default_nudge_step")]
    pub step: f64,
    /// Used while shift is held
    #[serde(default = "default_nudge_fast_step")]
    pub fast_step: f64,
}

impl Default for NudgeSettings {
    fn default() -> Self {
        Self {
            step: default_nudge_step(),
            fast_step: default_nudge_fast_step(),
        }
    }
}

fn default_zoom_min() -> f64 {
    0.1
}

fn default_zoom_max() -> f64 {
    10.0
}

fn default_zoom_step() -> f64 {
    0.15
}

fn default_nudge_step() -> f64 {
    1.0
}

fn default_nudge_fast_step() -> f64 {
    5.0
}

/// Tunables captured by the handlers at mount time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionSettings {
    pub zoom: ZoomSettings,
    pub nudge: NudgeSettings,
}

/// Run `action` for `event` against whatever collaborators `ctx` provides.
///
/// Returns `true` if the action reached its target. Suppression by the focus
/// guard or a missing collaborator yields `false` and is not an error.
pub fn perform(
    action: HotkeyAction,
    event: &mut KeyEvent,
    ctx: &mut EditorContext<'_>,
    settings: &ActionSettings,
) -> bool {
    let suppressed = match action.focus_guard() {
        FocusGuard::None => false,
        FocusGuard::TextInput => ctx.typing_in_text_input(),
        FocusGuard::Editable => ctx.typing_in_editable(),
    };
    if suppressed {
        debug!("Hotkey '{}' suppressed while typing", action);
        return false;
    }

    if action.prevents_default() {
        event.prevent_default();
    }

    match action {
        HotkeyAction::PlayPause => match ctx.playback.as_deref_mut() {
            Some(playback) => {
                playback.toggle();
                true
            }
            None => false,
        },
        HotkeyAction::Split => {
            let Some(engine) = ctx.engine.as_deref_mut() else {
                return false;
            };
            let Some(playback) = ctx.playback.as_deref() else {
                return false;
            };
            engine.split_selected(seconds_to_micros(playback.current_time()));
            true
        }
        HotkeyAction::SelectAll => {
            let (Some(canvas), Some(timeline)) = (ctx.canvas.as_deref_mut(), ctx.timeline) else {
                return false;
            };
            canvas.select_clips(&timeline.clip_ids());
            true
        }
        HotkeyAction::ZoomIn | HotkeyAction::ZoomOut => {
            let Some(zoom) = ctx.zoom.as_deref_mut() else {
                return false;
            };
            let z = &settings.zoom;
            *zoom = if action == HotkeyAction::ZoomIn {
                (*zoom + z.step).min(z.max)
            } else {
                (*zoom - z.step).max(z.min)
            };
            true
        }
        HotkeyAction::MoveUp
        | HotkeyAction::MoveDown
        | HotkeyAction::MoveLeft
        | HotkeyAction::MoveRight => {
            let Some(engine) = ctx.engine.as_deref_mut() else {
                return false;
            };
            let step = nudge_step(event, &settings.nudge);
            let (dx, dy) = match action {
                HotkeyAction::MoveUp => (0.0, -step),
                HotkeyAction::MoveDown => (0.0, step),
                HotkeyAction::MoveLeft => (-step, 0.0),
                _ => (step, 0.0),
            };
            engine.selection().move_by(dx, dy);
            true
        }
        HotkeyAction::Delete
        | HotkeyAction::Undo
        | HotkeyAction::Redo
        | HotkeyAction::FramePrev
        | HotkeyAction::FrameNext => {
            let Some(engine) = ctx.engine.as_deref_mut() else {
                return false;
            };
            match action {
                HotkeyAction::Delete => engine.delete_selected(),
                HotkeyAction::Undo => engine.undo(),
                HotkeyAction::Redo => engine.redo(),
                HotkeyAction::FramePrev => engine.frame_prev(),
                _ => engine.frame_next(),
            }
            true
        }
    }
}

pub fn seconds_to_micros(seconds: f64) -> f64 {
    seconds * MICROS_PER_SECOND
}

fn nudge_step(event: &KeyEvent, nudge: &NudgeSettings) -> f64 {
    if event.modifiers.shift {
        nudge.fast_step
    } else {
        nudge.step
    }
}
