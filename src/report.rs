use crate::display::DisplayKey;
use crate::error::{FreqError, FreqResult};
use crate::rank::{RankedEntry, Ranking};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use strum_macros::Display;
use tempfile::NamedTempFile;
use tracing::info;

/// Which table a ranking came from; drives labels and column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Chars,
    Bigrams,
    Trigrams,
    Words,
}

impl TableKind {
    /// Column header of the key in TSV output.
    pub fn key_column(&self) -> &'static str {
        match self {
            Self::Chars => "char",
            Self::Bigrams => "bigram",
            Self::Trigrams => "trigram",
            Self::Words => "word",
        }
    }

    /// `(total, unique)` labels for tables that print a header.
    fn totals_labels(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Chars => Some(("total_chars", "unique_chars")),
            Self::Words => Some(("total_tokens", "unique_words")),
            Self::Bigrams | Self::Trigrams => None,
        }
    }
}

pub fn format_entry<K: DisplayKey>(e: &RankedEntry<K>) -> String {
    format!(
        "{:4}. {}\t{}\t({:.4}%)",
        e.rank,
        e.key.console(),
        e.count,
        e.percent
    )
}

/// Plain-text section: totals (chars and words only), then the top list.
pub fn write_summary<W: Write, K: DisplayKey>(
    w: &mut W,
    kind: TableKind,
    ranking: &Ranking<K>,
    top_n: usize,
    min_count: u64,
) -> FreqResult<()> {
    if let Some((total_label, unique_label)) = kind.totals_labels() {
        writeln!(w, "{}: {}", total_label, ranking.total)?;
        writeln!(w, "{}: {}", unique_label, ranking.unique())?;
    }
    writeln!(w, "top_{}_{}:", top_n, kind)?;
    for e in ranking.top_filtered(top_n, min_count) {
        writeln!(w, "{}", format_entry(e))?;
    }
    Ok(())
}

/// Writes the full ranking as TSV. The file appears under `path` only once
/// complete: rows go to a temp file in the same directory which is then
/// renamed over the target.
pub fn write_tsv<K: DisplayKey>(path: &Path, kind: TableKind, ranking: &Ranking<K>) -> FreqResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(|source| FreqError::Output {
        path: path.to_path_buf(),
        source,
    })?;

    {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(tmp.as_file());

        wtr.write_record(["rank", kind.key_column(), "count", "percent"])?;
        for e in &ranking.entries {
            wtr.write_record([
                e.rank.to_string(),
                e.key.tsv(),
                e.count.to_string(),
                format!("{:.6}", e.percent),
            ])?;
        }
        wtr.flush().map_err(|source| FreqError::Output {
            path: path.to_path_buf(),
            source,
        })?;
    }

    publish_permissions(tmp.as_file()).map_err(|source| FreqError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.persist(path)?;
    info!("Wrote {} rows to {}", ranking.entries.len(), path.display());
    Ok(())
}

// Temp files are created owner-only; reports are ordinary shared files.
#[cfg(unix)]
fn publish_permissions(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn publish_permissions(_file: &File) -> std::io::Result<()> {
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    pub rank: usize,
    pub key: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonTable {
    pub table: TableKind,
    pub total: u64,
    pub unique: usize,
    pub entries: Vec<JsonEntry>,
}

impl JsonTable {
    pub fn from_ranking<K: DisplayKey>(
        kind: TableKind,
        ranking: &Ranking<K>,
        top_n: usize,
        min_count: u64,
    ) -> Self {
        Self {
            table: kind,
            total: ranking.total,
            unique: ranking.unique(),
            entries: ranking
                .top_filtered(top_n, min_count)
                .map(|e| JsonEntry {
                    rank: e.rank,
                    key: e.key.console(),
                    count: e.count,
                    percent: e.percent,
                })
                .collect(),
        }
    }
}

pub fn write_json<W: Write>(w: &mut W, tables: &[JsonTable]) -> FreqResult<()> {
    serde_json::to_writer_pretty(&mut *w, tables)?;
    writeln!(w)?;
    Ok(())
}
