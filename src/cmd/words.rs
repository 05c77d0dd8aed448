use crate::reports;
use clap::Args;
use corpfreq::api;
use corpfreq::config::WordConfig;
use corpfreq::error::FreqResult;
use corpfreq::filter::ExclusionSet;
use corpfreq::report::{write_tsv, TableKind};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct WordArgs {
    #[command(flatten)]
    pub config: WordConfig,
}

pub fn run(args: WordArgs) -> FreqResult<()> {
    let config = args.config;
    config.validate()?;

    let stopwords = ExclusionSet::load_all(&config.words.stopwords)?;
    info!("Loaded {} stopwords", stopwords.len());

    let input = api::open_input(&config.input.input)?;
    let ranking = api::analyze_words(input, &config, stopwords)?;

    reports::print_word_table(&ranking, &config.input)?;

    if config.words.tsv {
        write_tsv(&config.words.out, TableKind::Words, &ranking)?;
    }
    Ok(())
}
