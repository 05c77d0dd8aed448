mod common;

use common::*;
use corpfreq::rank::Ranking;
use corpfreq::report::{write_summary, TableKind};
use corpfreq::script::{is_letter, Script};
use proptest::prelude::*;

fn assert_well_ranked<K: Ord + std::fmt::Debug>(ranking: &Ranking<K>) -> Result<(), TestCaseError> {
    prop_assert_eq!(ranking.counted(), ranking.total);
    for pair in ranking.entries.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        prop_assert!(
            a.count > b.count || (a.count == b.count && a.key < b.key),
            "out of order: {:?} before {:?}",
            a,
            b
        );
    }
    if ranking.total > 0 {
        let sum: f64 = ranking.entries.iter().map(|e| e.percent).sum();
        prop_assert!((sum - 100.0).abs() < 1e-6, "percent sum {}", sum);
    } else {
        prop_assert!(ranking.entries.iter().all(|e| e.percent == 0.0));
    }
    Ok(())
}

fn render(text: &str) -> String {
    let tables = chars_of(text, &char_config(None, true, true), &[]);
    let mut buf = Vec::new();
    write_summary(&mut buf, TableKind::Chars, &tables.chars, 20, 0).unwrap();
    if let Some(b) = &tables.bigrams {
        write_summary(&mut buf, TableKind::Bigrams, b, 20, 0).unwrap();
    }
    if let Some(t) = &tables.trigrams {
        write_summary(&mut buf, TableKind::Trigrams, t, 20, 0).unwrap();
    }
    String::from_utf8(buf).unwrap()
}

prop_compose! {
    fn arb_words()(
        words in proptest::collection::vec(
            prop_oneof![Just("ab"), Just("cd"), Just("abc"), Just("b"), Just("да")],
            0..30
        )
    ) -> Vec<&'static str> {
        words
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_char_tables_are_consistent(text in "[abcабв ,.\n\t1]{0,80}") {
        let tables = chars_of(&text, &char_config(None, true, true), &[]);
        assert_well_ranked(&tables.chars)?;
        let bigrams = tables.bigrams.unwrap();
        let trigrams = tables.trigrams.unwrap();
        assert_well_ranked(&bigrams)?;
        assert_well_ranked(&trigrams)?;

        // Unrestricted: the window never resets, so n-grams follow the letter count.
        let letters = text.chars().filter(|c| is_letter(*c)).count() as u64;
        prop_assert_eq!(bigrams.total, letters.saturating_sub(1));
        prop_assert_eq!(trigrams.total, letters.saturating_sub(2));
    }

    #[test]
    fn test_restricted_tables_are_consistent(text in "[abcабв ,\n]{0,80}") {
        let tables = chars_of(&text, &char_config(Some(Script::Cyrillic), true, true), &[]);
        assert_well_ranked(&tables.chars)?;
        prop_assert!(tables.chars.entries.iter().all(|e| Script::Cyrillic.is_letter(e.key)));
        let bigrams = tables.bigrams.unwrap();
        assert_well_ranked(&bigrams)?;
        prop_assert!(bigrams.total < tables.chars.total.max(1));
    }

    #[test]
    fn test_word_tables_are_consistent(text in "[a-cа-в -]{0,80}", min_len in 1usize..4) {
        let ranking = words_of(&text, &word_config(None, min_len), &[]);
        assert_well_ranked(&ranking)?;
        prop_assert!(ranking.entries.iter().all(|e| e.key.chars().count() >= min_len));
    }

    #[test]
    fn test_top_n_never_exceeds_table(text in "[a-e ]{0,40}", n in 0usize..10) {
        let tables = chars_of(&text, &char_config(None, false, false), &[]);
        let top = tables.chars.top(n);
        prop_assert_eq!(top.len(), n.min(tables.chars.unique()));
    }

    #[test]
    fn test_reports_are_reproducible(text in "[abcабв \n]{0,60}") {
        prop_assert_eq!(render(&text), render(&text));
    }

    #[test]
    fn test_excluded_tokens_contribute_nothing(words in arb_words()) {
        let config = char_config(None, true, true);
        let text = words.join(" ");
        // Same text with the excluded token erased but its whitespace kept.
        let erased = words
            .iter()
            .map(|w| if *w == "ab" { "" } else { *w })
            .collect::<Vec<_>>()
            .join(" ");

        let excluded = chars_of(&text, &config, &["ab"]);
        let baseline = chars_of(&erased, &config, &[]);
        prop_assert_eq!(excluded.chars, baseline.chars);
        prop_assert_eq!(excluded.bigrams, baseline.bigrams);
        prop_assert_eq!(excluded.trigrams, baseline.trigrams);
    }
}
