/// How a table key is written out.
///
/// Console and TSV disagree on the space character (`space` vs `SPACE`);
/// both outputs are consumed downstream, so the difference is kept.
pub trait DisplayKey {
    fn console(&self) -> String;
    fn tsv(&self) -> String;
}

fn escape(c: char, space: &str) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        ' ' => space.to_string(),
        _ => c.to_string(),
    }
}

impl DisplayKey for char {
    fn console(&self) -> String {
        escape(*self, "space")
    }

    fn tsv(&self) -> String {
        escape(*self, "SPACE")
    }
}

// N-gram keys print raw on the console and escaped per character in TSV.
impl<const N: usize> DisplayKey for [char; N] {
    fn console(&self) -> String {
        self.iter().collect()
    }

    fn tsv(&self) -> String {
        self.iter().map(|c| escape(*c, "SPACE")).collect()
    }
}

impl DisplayKey for String {
    fn console(&self) -> String {
        self.clone()
    }

    fn tsv(&self) -> String {
        self.clone()
    }
}
