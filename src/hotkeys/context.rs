/*!
 * Collaborators a hotkey handler can act on.
 *
 * The editor engine, playback and timeline are owned elsewhere; handlers only
 * see them through these traits, borrowed for the duration of one dispatch.
 */

use std::collections::{BTreeMap, HashMap};

/// Clip selection inside the editor engine
pub trait SelectionHandle {
    /// Nudge the selected items by the given offsets
    fn move_by(&mut self, delta_x: f64, delta_y: f64);
}

/// The external video editing engine
pub trait EditorEngine {
    /// Split selected clips at a timeline position given in microseconds
    fn split_selected(&mut self, time_micros: f64);
    fn delete_selected(&mut self);
    fn undo(&mut self);
    fn redo(&mut self);
    fn frame_prev(&mut self);
    fn frame_next(&mut self);
    fn selection(&mut self) -> &mut dyn SelectionHandle;
}

/// Playback transport
pub trait PlaybackControl {
    /// Current playhead position in seconds
    fn current_time(&self) -> f64;
    fn toggle(&mut self);
}

/// Read access to the clips on the timeline
pub trait TimelineState {
    fn clip_ids(&self) -> Vec<String>;
}

impl<T> TimelineState for BTreeMap<String, T> {
    fn clip_ids(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl<T> TimelineState for HashMap<String, T> {
    fn clip_ids(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

/// The timeline canvas widget, which owns the visual clip selection
pub trait ClipSelector {
    fn select_clips(&mut self, clip_ids: &[String]);
}

/// The element that currently has keyboard focus
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusedElement {
    /// Lowercase tag name, e.g. `input`
    pub tag: String,
    pub content_editable: bool,
}

impl FocusedElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            content_editable: false,
        }
    }

    pub fn content_editable(tag: impl Into<String>) -> Self {
        Self {
            content_editable: true,
            ..Self::new(tag)
        }
    }

    /// `input` or `textarea`
    pub fn is_text_input(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea")
    }

    /// Any element that accepts typed text, including contenteditable hosts
    pub fn accepts_text(&self) -> bool {
        self.is_text_input() || self.content_editable
    }
}

/// Everything a handler may touch during one key press.
///
/// Every capability is optional; a handler whose target is `None` does nothing.
#[derive(Default)]
pub struct EditorContext<'a> {
    pub focus: Option<FocusedElement>,
    pub engine: Option<&'a mut dyn EditorEngine>,
    pub playback: Option<&'a mut dyn PlaybackControl>,
    pub timeline: Option<&'a dyn TimelineState>,
    pub canvas: Option<&'a mut dyn ClipSelector>,
    /// Timeline zoom factor owned by the view
    pub zoom: Option<&'a mut f64>,
}

impl<'a> EditorContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_focus(mut self, focus: FocusedElement) -> Self {
        self.focus = Some(focus);
        self
    }

    pub fn with_engine(mut self, engine: &'a mut dyn EditorEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_playback(mut self, playback: &'a mut dyn PlaybackControl) -> Self {
        self.playback = Some(playback);
        self
    }

    pub fn with_timeline(mut self, timeline: &'a dyn TimelineState) -> Self {
        self.timeline = Some(timeline);
        self
    }

    pub fn with_canvas(mut self, canvas: &'a mut dyn ClipSelector) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn with_zoom(mut self, zoom: &'a mut f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Focus sits in an `input` or `textarea`
    pub fn typing_in_text_input(&self) -> bool {
        self.focus.as_ref().is_some_and(FocusedElement::is_text_input)
    }

    /// Focus sits in any text-accepting element
    pub fn typing_in_editable(&self) -> bool {
        self.focus.as_ref().is_some_and(FocusedElement::accepts_text)
    }
}
