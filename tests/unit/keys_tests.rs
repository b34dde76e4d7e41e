/*!
 * Tests for key combination parsing and matching
 */

use captionkeys::errors::HotkeyError;
use captionkeys::hotkeys::{ComboList, Key, KeyCombo, KeyEvent, Modifiers};

/// Test every default editor combination form
#[test]
fn test_combo_list_withEditorDefaults_shouldParseAllSynonyms() {
    let redo: ComboList = "command+shift+z, ctrl+shift+z, command+y, ctrl+y".parse().unwrap();
    assert_eq!(redo.combos().len(), 4);
    assert_eq!(
        redo.combos()[1],
        KeyCombo::new(Key::Char('z'), Modifiers::CTRL.with(Modifiers::SHIFT))
    );

    let delete: ComboList = "backspace, delete".parse().unwrap();
    assert_eq!(delete.combos()[0].key, Key::Backspace);
    assert_eq!(delete.combos()[1].key, Key::Delete);
}

/// Test that synonyms in a list each match
#[test]
fn test_combo_list_matches_withAnySynonym_shouldMatch() {
    let split: ComboList = "command+b, ctrl+b".parse().unwrap();
    assert!(split.matches(&KeyEvent::from_combo("ctrl+b").unwrap()));
    assert!(split.matches(&KeyEvent::from_combo("command+b").unwrap()));
    assert!(!split.matches(&KeyEvent::from_combo("b").unwrap()));
    assert!(!split.matches(&KeyEvent::from_combo("ctrl+shift+b").unwrap()));
}

/// Test that shift variants are distinct combinations
#[test]
fn test_shift_variant_withShiftHeld_shouldOnlyMatchShiftCombo() {
    let plain: KeyCombo = "up".parse().unwrap();
    let shifted: KeyCombo = "shift+up".parse().unwrap();
    let event = KeyEvent::new(Key::Up, Modifiers::SHIFT);
    assert!(!plain.matches(&event));
    assert!(shifted.matches(&event));
}

/// Test parse errors
#[test]
fn test_parse_withInvalidInput_shouldReturnDescriptiveErrors() {
    assert_eq!("  ".parse::<KeyCombo>(), Err(HotkeyError::EmptyCombo));
    assert_eq!(
        "shift".parse::<KeyCombo>(),
        Err(HotkeyError::MissingKey("shift".to_string()))
    );
    assert_eq!(
        "ctrl+hyper".parse::<KeyCombo>(),
        Err(HotkeyError::UnknownKey("hyper".to_string()))
    );

    let err = "ctrl+a+b".parse::<KeyCombo>().unwrap_err();
    assert!(err.to_string().contains("more than one key"));
}

/// Test aliases for keys that collide with the combo syntax
#[test]
fn test_named_aliases_withCommaAndPlus_shouldMapToCharacters() {
    let comma: KeyCombo = "ctrl+comma".parse().unwrap();
    assert_eq!(comma.key, Key::Char(','));
    let plus: KeyCombo = "plus".parse().unwrap();
    assert_eq!(plus.key, Key::Char('+'));
    assert_eq!(comma.to_string(), "ctrl+comma");
}

/// Test prevent default flag
#[test]
fn test_prevent_default_withFreshEvent_shouldToggleOnce() {
    let mut event = KeyEvent::from_combo("command+a").unwrap();
    assert!(!event.default_prevented());
    event.prevent_default();
    assert!(event.default_prevented());
}
