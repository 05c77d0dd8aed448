use crate::error::{FreqError, FreqResult};
use crate::script::Script;
use clap::{ArgAction, Args};
use std::path::PathBuf;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Input path value that means "read standard input".
pub const STDIN_SENTINEL: &str = "-";

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq, Default)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

fn parse_script(s: &str) -> Result<Script, String> {
    Script::from_str(s).map_err(|_| {
        format!(
            "unknown script '{}', expected one of: {}",
            s,
            Script::names().join(", ")
        )
    })
}

#[derive(Args, Debug, Clone)]
pub struct InputParams {
    /// Path to input text file or '-' for stdin
    #[arg(short, long, default_value = "all_texts.txt")]
    pub input: String,

    /// Number of most frequent entries to print
    #[arg(short, long, default_value_t = 50)]
    pub top: usize,

    /// Unicode script used when script restriction is on
    #[arg(long, default_value_t = Script::Cyrillic, value_parser = parse_script)]
    pub script: Script,

    #[arg(long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Hide entries below this count from the printed list
    #[arg(long, default_value_t = 0)]
    pub min_count: u64,
}

impl Default for InputParams {
    fn default() -> Self {
        Self {
            input: "all_texts.txt".to_string(),
            top: 50,
            script: Script::Cyrillic,
            format: OutputFormat::Text,
            min_count: 0,
        }
    }
}

impl InputParams {
    pub fn validate(&self) -> FreqResult<()> {
        if self.top == 0 {
            return Err(FreqError::Config("--top must be a positive integer".into()));
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone)]
pub struct CharParams {
    /// Count only letters of --script (and build ngrams from them)
    #[arg(long, alias = "cyrillic-only", default_value_t = false)]
    pub script_only: bool,

    /// Compute bigram stats
    #[arg(long, default_value_t = false)]
    pub bigram: bool,

    /// Compute trigram stats
    #[arg(long, default_value_t = false)]
    pub trigram: bool,

    /// Stopwords file (one token per line); may be repeated
    #[arg(long)]
    pub stopwords: Vec<PathBuf>,

    /// Extra words to exclude (one token per line); may be repeated
    #[arg(long)]
    pub exclude_words: Vec<PathBuf>,

    /// Write full sorted lists to TSV files
    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    /// Output file prefix for TSV files
    #[arg(long, default_value = "stats")]
    pub out_prefix: String,
}

impl Default for CharParams {
    fn default() -> Self {
        Self {
            script_only: false,
            bigram: false,
            trigram: false,
            stopwords: Vec::new(),
            exclude_words: Vec::new(),
            tsv: false,
            out_prefix: "stats".to_string(),
        }
    }
}

impl CharParams {
    pub fn wants_ngrams(&self) -> bool {
        self.bigram || self.trigram
    }

    pub fn exclusion_paths(&self) -> Vec<PathBuf> {
        self.stopwords
            .iter()
            .chain(self.exclude_words.iter())
            .cloned()
            .collect()
    }
}

#[derive(Args, Debug, Clone)]
pub struct WordParams {
    /// Count only words of --script (pass `false` to count every script)
    #[arg(long, alias = "cyrillic-only", default_value_t = true, action = ArgAction::Set)]
    pub script_only: bool,

    /// Minimum token length in characters
    #[arg(long, default_value_t = 2)]
    pub min_len: usize,

    /// Stopwords file (one token per line); may be repeated
    #[arg(long)]
    pub stopwords: Vec<PathBuf>,

    /// Write full sorted list to a TSV file
    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    /// Output TSV file when --tsv is set
    #[arg(long, default_value = "word_freq.tsv")]
    pub out: PathBuf,
}

impl Default for WordParams {
    fn default() -> Self {
        Self {
            script_only: true,
            min_len: 2,
            stopwords: Vec::new(),
            tsv: false,
            out: PathBuf::from("word_freq.tsv"),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct CharConfig {
    #[command(flatten)]
    pub input: InputParams,
    #[command(flatten)]
    pub chars: CharParams,
}

impl CharConfig {
    pub fn script(&self) -> Option<Script> {
        self.chars.script_only.then_some(self.input.script)
    }

    pub fn validate(&self) -> FreqResult<()> {
        self.input.validate()
    }

    pub fn tsv_path(&self, suffix: &str) -> PathBuf {
        PathBuf::from(format!("{}_{}.tsv", self.chars.out_prefix, suffix))
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct WordConfig {
    #[command(flatten)]
    pub input: InputParams,
    #[command(flatten)]
    pub words: WordParams,
}

impl WordConfig {
    pub fn script(&self) -> Option<Script> {
        self.words.script_only.then_some(self.input.script)
    }

    pub fn validate(&self) -> FreqResult<()> {
        self.input.validate()?;
        if self.words.min_len == 0 {
            return Err(FreqError::Config("--min-len must be a positive integer".into()));
        }
        Ok(())
    }
}
