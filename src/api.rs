use crate::aggregate::{CharAggregator, CharTables, NgramModes, WordAggregator};
use crate::config::{CharConfig, WordConfig, STDIN_SENTINEL};
use crate::decoder::CharReader;
use crate::error::{FreqError, FreqResult};
use crate::filter::{ExclusionSet, TokenFilter};
use crate::rank::Ranking;
use crate::tokenizer::{tokenize, BoundaryRule};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::{info, warn};

const READ_BUFFER: usize = 1 << 20;

/// Opens a named file, or standard input for `-`.
pub fn open_input(path: &str) -> FreqResult<Box<dyn BufRead>> {
    if path == STDIN_SENTINEL {
        info!("Reading from stdin");
        return Ok(Box::new(BufReader::with_capacity(READ_BUFFER, io::stdin())));
    }
    let file = File::open(path).map_err(|source| FreqError::InputOpen {
        path: path.into(),
        source,
    })?;
    info!("Reading from {}", path);
    Ok(Box::new(BufReader::with_capacity(READ_BUFFER, file)))
}

/// Character frequencies (plus optional bigrams/trigrams) over one stream.
pub fn analyze_chars<R: BufRead>(
    reader: R,
    config: &CharConfig,
    exclusions: ExclusionSet,
) -> FreqResult<CharTables> {
    let modes = NgramModes {
        bigram: config.chars.bigram,
        trigram: config.chars.trigram,
    };
    let mut agg = CharAggregator::new(TokenFilter::new(0, exclusions), config.script(), modes);

    let stats = tokenize(CharReader::new(reader), BoundaryRule::Whitespace, &mut agg)?;
    info!(
        "Pass finished: {} chars read, {} tokens, {} dropped by filter",
        stats.chars, stats.tokens, agg.tokens_dropped
    );

    let tables = agg.finish();
    if tables.chars.is_empty() {
        warn!("No characters were counted");
    }
    Ok(tables)
}

/// Word frequencies over one stream.
pub fn analyze_words<R: BufRead>(
    reader: R,
    config: &WordConfig,
    stopwords: ExclusionSet,
) -> FreqResult<Ranking<String>> {
    let filter = TokenFilter::new(config.words.min_len, stopwords);
    let mut agg = WordAggregator::new(filter);

    let rule = BoundaryRule::Letters(config.script());
    let stats = tokenize(CharReader::new(reader), rule, &mut agg)?;
    info!(
        "Pass finished: {} chars read, {} tokens, {} dropped by filter",
        stats.chars, stats.tokens, agg.tokens_dropped
    );

    let ranking = agg.finish();
    if ranking.is_empty() {
        warn!("No words were counted");
    }
    Ok(ranking)
}
