use proptest::prelude::*;
use recase::{apply, Style};

fn word_vec() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(".{0,12}", 0..8)
}

proptest! {
    #[test]
    fn length_is_preserved_by_every_style(words in word_vec()) {
        for style in Style::ALL {
            let out = style.apply(words.clone());
            prop_assert_eq!(out.len(), words.len(), "style: {}", style);
        }
    }

    #[test]
    fn lower_is_idempotent(words in word_vec()) {
        let once = Style::Lower.apply(words);
        prop_assert_eq!(Style::Lower.apply(once.clone()), once);
    }

    #[test]
    fn upper_is_idempotent(words in word_vec()) {
        let once = Style::Upper.apply(words);
        prop_assert_eq!(Style::Upper.apply(once.clone()), once);
    }

    #[test]
    fn alternate_lowers_even_indices_and_uppers_odd(words in word_vec()) {
        let out = Style::Alternate.apply(words.clone());
        for (i, (orig, got)) in words.iter().zip(&out).enumerate() {
            if i % 2 == 0 {
                prop_assert_eq!(got, &orig.to_lowercase());
            } else {
                prop_assert_eq!(got, &orig.to_uppercase());
            }
        }
    }

    #[test]
    fn invert_preserves_the_first_character(words in word_vec()) {
        let out = Style::Invert.apply(words.clone());
        for (orig, got) in words.iter().zip(&out) {
            prop_assert_eq!(orig.chars().next(), got.chars().next());
        }
    }

    #[test]
    fn random_outputs_one_of_the_two_full_forms(words in word_vec()) {
        let out = Style::Random.apply(words.clone());
        for (orig, got) in words.iter().zip(&out) {
            prop_assert!(
                got == &orig.to_uppercase() || got == &orig.to_lowercase(),
                "mixed-case output {:?} for input {:?}", got, orig
            );
        }
    }

    #[test]
    fn unrecognized_names_always_error(name in "[A-Z][a-z]{0,9}") {
        // Recognized names are all lower-case, so a leading capital can never match.
        let err = apply(vec!["x".to_string()], &name).unwrap_err();
        prop_assert_eq!(err.name(), name);
    }
}
