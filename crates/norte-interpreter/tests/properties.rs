//! Property tests: interpretation never fails and is fully deterministic.

use norte_core::{ScreenType, Stack};
use norte_interpreter::{build_spec_from_prompt, detect_entity};
use proptest::prelude::*;

proptest! {
    /// No input string makes interpretation panic, and the stack and prompt
    /// always pass through unchanged.
    #[test]
    fn never_panics_and_preserves_inputs(prompt in ".{0,200}") {
        let spec = build_spec_from_prompt(&prompt, Stack::Vue);
        prop_assert_eq!(spec.stack, Stack::Vue);
        prop_assert_eq!(spec.prompt.as_str(), prompt.as_str());
    }

    /// Re-running with the same inputs yields a deep-equal spec.
    #[test]
    fn deterministic(prompt in ".{0,200}") {
        let first = build_spec_from_prompt(&prompt, Stack::Angular);
        let second = build_spec_from_prompt(&prompt, Stack::Angular);
        prop_assert_eq!(first, second);
    }

    /// Entity detection always produces a non-empty Title Case entity and the
    /// lowercased prompt.
    #[test]
    fn entity_is_total(prompt in ".{0,200}") {
        let m = detect_entity(&prompt);
        prop_assert!(!m.entity.is_empty());
        prop_assert_eq!(m.lower, prompt.to_lowercase());
    }

    /// "crud de <word>" prompts always classify as CRUD with the Title-Cased
    /// word as the entity. Words carrying a login keyword are excluded: login
    /// takes priority over CRUD by contract.
    #[test]
    fn crud_de_word(
        word in "[a-z]{1,12}".prop_filter(
            "login keywords flip classification",
            |w| !["login", "acesso", "entrar"].iter().any(|k| w.contains(k)),
        )
    ) {
        let spec = build_spec_from_prompt(&format!("crud de {word}"), Stack::React);
        prop_assert_eq!(spec.screen_type, ScreenType::Crud);
        let mut expected = word.clone();
        if let Some(first) = expected.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        prop_assert_eq!(spec.entity, expected);
    }
}
