/*!
 * Tests for the editor action handlers
 */

use std::collections::BTreeMap;

use captionkeys::hotkeys::actions::{perform, FocusGuard};
use captionkeys::hotkeys::{
    ActionSettings, EditorContext, FocusedElement, HotkeyAction, KeyEvent, NudgeSettings,
};

use crate::common::{EngineCall, FakeCanvas, FakePlayback, RecordingEngine};

fn press(combo: &str) -> KeyEvent {
    KeyEvent::from_combo(combo).unwrap()
}

/// Test the focus policy of every action
#[test]
fn test_focus_guard_withEachAction_shouldMatchEditorPolicy() {
    for action in HotkeyAction::ALL {
        let expected = match action {
            HotkeyAction::Split | HotkeyAction::ZoomIn | HotkeyAction::ZoomOut => FocusGuard::None,
            HotkeyAction::Delete => FocusGuard::Editable,
            _ => FocusGuard::TextInput,
        };
        assert_eq!(action.focus_guard(), expected, "{}", action);
    }
}

/// Test that only delete keeps the host's native behaviour
#[test]
fn test_prevents_default_withDelete_shouldBeOnlyException() {
    let keeping: Vec<_> = HotkeyAction::ALL
        .into_iter()
        .filter(|a| !a.prevents_default())
        .collect();
    assert_eq!(keeping, vec![HotkeyAction::Delete]);
}

/// Test play/pause toggles the transport
#[test]
fn test_play_pause_withPlayback_shouldToggle() {
    let settings = ActionSettings::default();
    let mut playback = FakePlayback::at(0.0);
    let mut event = press("space");
    {
        let mut ctx = EditorContext::new().with_playback(&mut playback);
        assert!(perform(HotkeyAction::PlayPause, &mut event, &mut ctx, &settings));
    }
    assert_eq!(playback.toggles, 1);
    assert!(event.default_prevented());
}

/// Test play/pause is ignored while typing in a textarea
#[test]
fn test_play_pause_withTextareaFocused_shouldNotToggle() {
    let settings = ActionSettings::default();
    let mut playback = FakePlayback::at(0.0);
    let mut event = press("space");
    {
        let mut ctx = EditorContext::new()
            .with_focus(FocusedElement::new("TEXTAREA"))
            .with_playback(&mut playback);
        assert!(!perform(HotkeyAction::PlayPause, &mut event, &mut ctx, &settings));
    }
    assert_eq!(playback.toggles, 0);
    assert!(!event.default_prevented());
}

/// Test split converts the playhead to microseconds
#[test]
fn test_split_withPlayheadInSeconds_shouldPassMicroseconds() {
    let settings = ActionSettings::default();
    let mut engine = RecordingEngine::default();
    let mut playback = FakePlayback::at(1.25);
    {
        let mut ctx = EditorContext::new()
            .with_engine(&mut engine)
            .with_playback(&mut playback);
        perform(HotkeyAction::Split, &mut press("ctrl+b"), &mut ctx, &settings);
    }
    assert_eq!(engine.calls, vec![EngineCall::Split(1_250_000.0)]);
}

/// Test split still fires inside a text input
#[test]
fn test_split_withInputFocused_shouldStillRun() {
    let settings = ActionSettings::default();
    let mut engine = RecordingEngine::default();
    let mut playback = FakePlayback::at(3.0);
    {
        let mut ctx = EditorContext::new()
            .with_focus(FocusedElement::new("input"))
            .with_engine(&mut engine)
            .with_playback(&mut playback);
        assert!(perform(HotkeyAction::Split, &mut press("command+b"), &mut ctx, &settings));
    }
    assert_eq!(engine.calls, vec![EngineCall::Split(3_000_000.0)]);
}

/// Test split without a playback handle is a no-op
#[test]
fn test_split_withoutPlayback_shouldDoNothing() {
    let settings = ActionSettings::default();
    let mut engine = RecordingEngine::default();
    {
        let mut ctx = EditorContext::new().with_engine(&mut engine);
        assert!(!perform(HotkeyAction::Split, &mut press("ctrl+b"), &mut ctx, &settings));
    }
    assert!(engine.calls.is_empty());
}

/// Test delete is suppressed in contenteditable and keeps native behaviour
#[test]
fn test_delete_withContentEditableFocus_shouldBeSuppressed() {
    let settings = ActionSettings::default();
    let mut engine = RecordingEngine::default();
    {
        let mut ctx = EditorContext::new()
            .with_focus(FocusedElement::content_editable("div"))
            .with_engine(&mut engine);
        assert!(!perform(HotkeyAction::Delete, &mut press("backspace"), &mut ctx, &settings));
    }
    assert!(engine.calls.is_empty());

    let mut event = press("delete");
    {
        let mut ctx = EditorContext::new()
            .with_focus(FocusedElement::new("div"))
            .with_engine(&mut engine);
        assert!(perform(HotkeyAction::Delete, &mut event, &mut ctx, &settings));
    }
    assert_eq!(engine.calls, vec![EngineCall::Delete]);
    assert!(!event.default_prevented());
}

/// Test select all hands every clip id to the canvas
#[test]
fn test_select_all_withTimeline_shouldSelectEveryClip() {
    let settings = ActionSettings::default();
    let timeline: BTreeMap<String, u32> = BTreeMap::from([
        ("clip-b".to_string(), 2),
        ("clip-a".to_string(), 1),
    ]);
    let mut canvas = FakeCanvas::default();
    {
        let mut ctx = EditorContext::new()
            .with_timeline(&timeline)
            .with_canvas(&mut canvas);
        assert!(perform(HotkeyAction::SelectAll, &mut press("ctrl+a"), &mut ctx, &settings));
    }
    assert_eq!(canvas.selected, vec!["clip-a".to_string(), "clip-b".to_string()]);
}

/// Test select all without a canvas does nothing
#[test]
fn test_select_all_withoutCanvas_shouldDoNothing() {
    let settings = ActionSettings::default();
    let timeline: BTreeMap<String, u32> = BTreeMap::new();
    let mut ctx = EditorContext::new().with_timeline(&timeline);
    assert!(!perform(HotkeyAction::SelectAll, &mut press("ctrl+a"), &mut ctx, &settings));
}

/// Test nudges honour shift and the configured steps
#[test]
fn test_nudge_withShift_shouldUseFastStep() {
    let settings = ActionSettings {
        nudge: NudgeSettings { step: 2.0, fast_step: 20.0 },
        ..ActionSettings::default()
    };
    let mut engine = RecordingEngine::default();
    {
        let mut ctx = EditorContext::new().with_engine(&mut engine);
        perform(HotkeyAction::MoveUp, &mut press("up"), &mut ctx, &settings);
        perform(HotkeyAction::MoveDown, &mut press("shift+down"), &mut ctx, &settings);
        perform(HotkeyAction::MoveLeft, &mut press("shift+left"), &mut ctx, &settings);
        perform(HotkeyAction::MoveRight, &mut press("right"), &mut ctx, &settings);
    }
    assert_eq!(
        engine.selection.moves,
        vec![(0.0, -2.0), (0.0, 20.0), (-20.0, 0.0), (2.0, 0.0)]
    );
}

/// Test history and frame stepping reach the engine
#[test]
fn test_engine_actions_withEngine_shouldCallThrough() {
    let settings = ActionSettings::default();
    let mut engine = RecordingEngine::default();
    {
        let mut ctx = EditorContext::new().with_engine(&mut engine);
        perform(HotkeyAction::Undo, &mut press("ctrl+z"), &mut ctx, &settings);
        perform(HotkeyAction::Redo, &mut press("ctrl+y"), &mut ctx, &settings);
        perform(HotkeyAction::FramePrev, &mut press("ctrl+left"), &mut ctx, &settings);
        perform(HotkeyAction::FrameNext, &mut press("ctrl+right"), &mut ctx, &settings);
    }
    assert_eq!(
        engine.calls,
        vec![
            EngineCall::Undo,
            EngineCall::Redo,
            EngineCall::FramePrev,
            EngineCall::FrameNext
        ]
    );
}
