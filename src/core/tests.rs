use super::*;

// ---------------------------------------------------------------------------
// Character selection
// ---------------------------------------------------------------------------

#[test]
fn unselected_character_uses_default_id() {
    let selected = SelectedCharacter::default();
    assert_eq!(selected.id(), DEFAULT_CHARACTER_ID);
}

#[test]
fn chosen_character_overrides_default_id() {
    let selected = SelectedCharacter {
        character_id: Some("character_heavy".to_string()),
    };
    assert_eq!(selected.id(), "character_heavy");
}
