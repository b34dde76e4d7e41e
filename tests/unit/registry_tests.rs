/*!
 * Tests for the hotkey registry and scoped bindings
 */

use std::cell::RefCell;
use std::rc::Rc;

use captionkeys::hotkeys::{EditorContext, HotkeyRegistry, HotkeyScope, KeyEvent};

fn press(combo: &str) -> KeyEvent {
    KeyEvent::from_combo(combo).unwrap()
}

/// Test that handlers see the event and may mark it
#[test]
fn test_dispatch_withMatchingBinding_shouldPassEventToHandler() {
    let mut registry = HotkeyRegistry::new();
    registry
        .bind("command+s, ctrl+s", |event, _ctx| event.prevent_default())
        .unwrap();

    let mut event = press("command+s");
    let mut ctx = EditorContext::new();
    assert_eq!(registry.dispatch(&mut event, &mut ctx), 1);
    assert!(event.default_prevented());

    let mut other = press("command+d");
    assert_eq!(registry.dispatch(&mut other, &mut ctx), 0);
    assert!(!other.default_prevented());
}

/// Test that handlers can mutate context state
#[test]
fn test_dispatch_withZoomInContext_shouldMutateThroughContext() {
    let mut registry = HotkeyRegistry::new();
    registry
        .bind("z", |_, ctx| {
            if let Some(zoom) = ctx.zoom.as_deref_mut() {
                *zoom *= 2.0;
            }
        })
        .unwrap();

    let mut zoom = 1.5;
    {
        let mut ctx = EditorContext::new().with_zoom(&mut zoom);
        registry.dispatch(&mut press("z"), &mut ctx);
        registry.dispatch(&mut press("z"), &mut ctx);
    }
    assert_eq!(zoom, 6.0);
}

/// Test that nested scopes only release their own combinations
#[test]
fn test_scope_drop_withOtherBindings_shouldKeepUnrelatedBindings() {
    let mut registry = HotkeyRegistry::new();
    registry.bind("escape", |_, _| {}).unwrap();

    {
        let mut scope = HotkeyScope::new(&mut registry);
        scope.bind("ctrl+k", |_, _| {}).unwrap();
        scope.bind("ctrl+j", |_, _| {}).unwrap();
        assert_eq!(scope.len(), 3);
    }

    assert_eq!(registry.len(), 1);
    assert!(registry.is_bound(&press("escape")));
    assert!(!registry.is_bound(&press("ctrl+k")));
}

/// Test that teardown leaves no handler reachable
#[test]
fn test_teardown_withBoundHandlers_shouldNeverInvokeThemAgain() {
    let calls = Rc::new(RefCell::new(0usize));
    let mut registry = HotkeyRegistry::new();

    {
        let mut scope = HotkeyScope::new(&mut registry);
        for combo in ["space", "ctrl+b, command+b", "left, shift+left"] {
            let calls = Rc::clone(&calls);
            scope.bind(combo, move |_, _| *calls.borrow_mut() += 1).unwrap();
        }
    }

    let mut ctx = EditorContext::new();
    for combo in ["space", "ctrl+b", "command+b", "left", "shift+left"] {
        assert_eq!(registry.dispatch(&mut press(combo), &mut ctx), 0);
    }
    assert_eq!(*calls.borrow(), 0);
}

/// Test unbinding with an unparseable combination
#[test]
fn test_unbind_withInvalidCombo_shouldReturnError() {
    let mut registry = HotkeyRegistry::new();
    assert!(registry.unbind("ctrl+").is_err());
    assert_eq!(registry.unbind("ctrl+q").unwrap(), 0);
}
