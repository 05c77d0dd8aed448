#![allow(dead_code)]

use corpfreq::aggregate::CharTables;
use corpfreq::api::{analyze_chars, analyze_words};
use corpfreq::config::{CharConfig, WordConfig};
use corpfreq::filter::ExclusionSet;
use corpfreq::rank::Ranking;
use corpfreq::script::Script;
use std::io::Cursor;

pub fn char_config(script: Option<Script>, bigram: bool, trigram: bool) -> CharConfig {
    let mut config = CharConfig::default();
    if let Some(s) = script {
        config.input.script = s;
        config.chars.script_only = true;
    }
    config.chars.bigram = bigram;
    config.chars.trigram = trigram;
    config
}

pub fn word_config(script: Option<Script>, min_len: usize) -> WordConfig {
    let mut config = WordConfig::default();
    config.words.script_only = script.is_some();
    if let Some(s) = script {
        config.input.script = s;
    }
    config.words.min_len = min_len;
    config
}

pub fn chars_of(text: &str, config: &CharConfig, excluded: &[&str]) -> CharTables {
    let set: ExclusionSet = excluded.iter().collect();
    analyze_chars(Cursor::new(text.as_bytes().to_vec()), config, set).unwrap()
}

pub fn words_of(text: &str, config: &WordConfig, stopwords: &[&str]) -> Ranking<String> {
    let set: ExclusionSet = stopwords.iter().collect();
    analyze_words(Cursor::new(text.as_bytes().to_vec()), config, set).unwrap()
}

pub fn count_of<K: PartialEq>(ranking: &Ranking<K>, key: &K) -> u64 {
    ranking
        .entries
        .iter()
        .find(|e| &e.key == key)
        .map(|e| e.count)
        .unwrap_or(0)
}

pub fn keys_of<K: Clone>(ranking: &Ranking<K>) -> Vec<K> {
    ranking.entries.iter().map(|e| e.key.clone()).collect()
}

pub fn bigram(s: &str) -> [char; 2] {
    let v: Vec<char> = s.chars().collect();
    [v[0], v[1]]
}

pub fn trigram(s: &str) -> [char; 3] {
    let v: Vec<char> = s.chars().collect();
    [v[0], v[1], v[2]]
}
