use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use corpfreq::aggregate::CharTables;
use corpfreq::config::{InputParams, OutputFormat};
use corpfreq::display::DisplayKey;
use corpfreq::error::FreqResult;
use corpfreq::rank::Ranking;
use corpfreq::report::{write_json, write_summary, JsonTable, TableKind};
use std::io::{self, Write};

pub fn print_char_tables(tables: &CharTables, params: &InputParams) -> FreqResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (top, min) = (params.top, params.min_count);

    match params.format {
        OutputFormat::Text => {
            write_summary(&mut out, TableKind::Chars, &tables.chars, top, min)?;
            if let Some(b) = &tables.bigrams {
                write_summary(&mut out, TableKind::Bigrams, b, top, min)?;
            }
            if let Some(t) = &tables.trigrams {
                write_summary(&mut out, TableKind::Trigrams, t, top, min)?;
            }
        }
        OutputFormat::Table => {
            print_grid(&mut out, TableKind::Chars, &tables.chars, top, min)?;
            if let Some(b) = &tables.bigrams {
                print_grid(&mut out, TableKind::Bigrams, b, top, min)?;
            }
            if let Some(t) = &tables.trigrams {
                print_grid(&mut out, TableKind::Trigrams, t, top, min)?;
            }
        }
        OutputFormat::Json => {
            let mut docs = vec![JsonTable::from_ranking(TableKind::Chars, &tables.chars, top, min)];
            if let Some(b) = &tables.bigrams {
                docs.push(JsonTable::from_ranking(TableKind::Bigrams, b, top, min));
            }
            if let Some(t) = &tables.trigrams {
                docs.push(JsonTable::from_ranking(TableKind::Trigrams, t, top, min));
            }
            write_json(&mut out, &docs)?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn print_word_table(ranking: &Ranking<String>, params: &InputParams) -> FreqResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (top, min) = (params.top, params.min_count);

    match params.format {
        OutputFormat::Text => write_summary(&mut out, TableKind::Words, ranking, top, min)?,
        OutputFormat::Table => print_grid(&mut out, TableKind::Words, ranking, top, min)?,
        OutputFormat::Json => {
            write_json(&mut out, &[JsonTable::from_ranking(TableKind::Words, ranking, top, min)])?
        }
    }
    out.flush()?;
    Ok(())
}

fn print_grid<W: Write, K: DisplayKey>(
    out: &mut W,
    kind: TableKind,
    ranking: &Ranking<K>,
    top: usize,
    min_count: u64,
) -> FreqResult<()> {
    writeln!(
        out,
        "\n{}: total {}, unique {}",
        kind,
        ranking.total,
        ranking.unique()
    )?;

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new(kind.key_column()).add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Percent"),
    ]);

    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for e in ranking.top_filtered(top, min_count) {
        table.add_row(vec![
            Cell::new(e.rank),
            Cell::new(e.key.console()),
            Cell::new(e.count).fg(Color::Cyan),
            Cell::new(format!("{:.4}%", e.percent)),
        ]);
    }
    writeln!(out, "{}", table)?;
    Ok(())
}
