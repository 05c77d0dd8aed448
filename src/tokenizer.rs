use crate::error::FreqResult;
use crate::script::{is_letter, Script};

/// Decides which characters split the stream into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    /// Only whitespace splits; everything else is buffered and left for the
    /// filter to clean.
    Whitespace,
    /// Anything that is not an allowed letter splits. With a script, letters
    /// outside its blocks are boundaries too.
    Letters(Option<Script>),
}

impl BoundaryRule {
    pub fn is_boundary(&self, c: char) -> bool {
        match self {
            Self::Whitespace => c.is_whitespace(),
            Self::Letters(None) => !is_letter(c),
            Self::Letters(Some(script)) => !script.is_letter(c),
        }
    }
}

/// Receives the tokenizer's output in stream order.
pub trait TokenSink {
    /// Called with each non-empty token, before the boundary that ended it.
    fn token(&mut self, token: &[char]);

    /// Called with every boundary character after any pending token is flushed.
    fn boundary(&mut self, _c: char) {}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeStats {
    pub chars: u64,
    pub tokens: u64,
    pub boundaries: u64,
}

/// Single pass over `chars`. The first decode error aborts the pass.
pub fn tokenize<I, S>(chars: I, rule: BoundaryRule, sink: &mut S) -> FreqResult<TokenizeStats>
where
    I: IntoIterator<Item = FreqResult<char>>,
    S: TokenSink + ?Sized,
{
    let mut stats = TokenizeStats::default();
    let mut buf: Vec<char> = Vec::with_capacity(64);

    for c in chars {
        let c = c?;
        stats.chars += 1;

        if rule.is_boundary(c) {
            if !buf.is_empty() {
                sink.token(&buf);
                stats.tokens += 1;
                buf.clear();
            }
            sink.boundary(c);
            stats.boundaries += 1;
            continue;
        }
        buf.push(c);
    }

    // End of stream flushes a trailing token.
    if !buf.is_empty() {
        sink.token(&buf);
        stats.tokens += 1;
    }

    Ok(stats)
}
