use crate::reports;
use clap::Args;
use corpfreq::api;
use corpfreq::config::CharConfig;
use corpfreq::error::FreqResult;
use corpfreq::filter::ExclusionSet;
use corpfreq::report::{write_tsv, TableKind};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CharArgs {
    #[command(flatten)]
    pub config: CharConfig,
}

pub fn run(args: CharArgs) -> FreqResult<()> {
    let config = args.config;
    config.validate()?;

    // Exclusions load before the input is touched so a bad list fails fast.
    let exclusions = ExclusionSet::load_all(&config.chars.exclusion_paths())?;
    info!("Excluding {} tokens", exclusions.len());

    let input = api::open_input(&config.input.input)?;
    let tables = api::analyze_chars(input, &config, exclusions)?;

    reports::print_char_tables(&tables, &config.input)?;

    if config.chars.tsv {
        write_tsv(&config.tsv_path("chars"), TableKind::Chars, &tables.chars)?;
        if let Some(bigrams) = &tables.bigrams {
            write_tsv(&config.tsv_path("bigrams"), TableKind::Bigrams, bigrams)?;
        }
        if let Some(trigrams) = &tables.trigrams {
            write_tsv(&config.tsv_path("trigrams"), TableKind::Trigrams, trigrams)?;
        }
    }
    Ok(())
}
