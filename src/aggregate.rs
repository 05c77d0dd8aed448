use crate::filter::TokenFilter;
use crate::rank::Ranking;
use crate::script::Script;
use crate::table::CountTable;
use crate::tokenizer::TokenSink;
use crate::window::SlidingWindow;

#[derive(Debug, Clone, Copy, Default)]
pub struct NgramModes {
    pub bigram: bool,
    pub trigram: bool,
}

impl NgramModes {
    pub fn any(&self) -> bool {
        self.bigram || self.trigram
    }
}

/// Character, bigram and trigram counting for the character tool.
pub struct CharAggregator {
    filter: TokenFilter,
    script: Option<Script>,
    modes: NgramModes,
    window: SlidingWindow,
    chars: CountTable<char>,
    bigrams: CountTable<[char; 2]>,
    trigrams: CountTable<[char; 3]>,
    pub tokens_dropped: u64,
}

/// Frozen result of a character pass.
#[derive(Debug, Clone)]
pub struct CharTables {
    pub chars: Ranking<char>,
    pub bigrams: Option<Ranking<[char; 2]>>,
    pub trigrams: Option<Ranking<[char; 3]>>,
}

impl CharAggregator {
    pub fn new(filter: TokenFilter, script: Option<Script>, modes: NgramModes) -> Self {
        Self {
            filter,
            script,
            modes,
            window: SlidingWindow::new(),
            chars: CountTable::with_capacity(1024),
            bigrams: CountTable::with_capacity(if modes.bigram { 2048 } else { 0 }),
            trigrams: CountTable::with_capacity(if modes.trigram { 4096 } else { 0 }),
            tokens_dropped: 0,
        }
    }

    fn is_countable(&self, c: char) -> bool {
        match self.script {
            Some(script) => script.is_letter(c),
            None => true,
        }
    }

    fn accept_char(&mut self, c: char) {
        self.chars.add(c);
        if !self.modes.any() {
            return;
        }
        self.window.push(c);
        if self.modes.bigram {
            if let Some(key) = self.window.bigram() {
                self.bigrams.add(key);
            }
        }
        if self.modes.trigram {
            if let Some(key) = self.window.trigram() {
                self.trigrams.add(key);
            }
        }
    }

    pub fn finish(self) -> CharTables {
        CharTables {
            chars: self.chars.into_ranking(),
            bigrams: self.modes.bigram.then(|| self.bigrams.into_ranking()),
            trigrams: self.modes.trigram.then(|| self.trigrams.into_ranking()),
        }
    }
}

impl TokenSink for CharAggregator {
    fn token(&mut self, token: &[char]) {
        let Some(cleaned) = self.filter.accept(token) else {
            self.tokens_dropped += 1;
            return;
        };
        for c in cleaned.chars() {
            // Off-script letters are skipped without touching the window.
            if self.is_countable(c) {
                self.accept_char(c);
            }
        }
    }

    fn boundary(&mut self, c: char) {
        match self.script {
            // Whitespace is itself a counted event, but never enters the window.
            None => self.chars.add(c),
            Some(_) => self.window.reset(),
        }
    }
}

/// Word counting for the word tool.
pub struct WordAggregator {
    filter: TokenFilter,
    words: CountTable<String>,
    pub tokens_dropped: u64,
}

impl WordAggregator {
    pub fn new(filter: TokenFilter) -> Self {
        Self {
            filter,
            words: CountTable::with_capacity(1 << 16),
            tokens_dropped: 0,
        }
    }

    pub fn finish(self) -> Ranking<String> {
        self.words.into_ranking()
    }
}

impl TokenSink for WordAggregator {
    fn token(&mut self, token: &[char]) {
        match self.filter.accept(token) {
            Some(word) => self.words.add(word),
            None => self.tokens_dropped += 1,
        }
    }
}
