use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_script::{Script as UnicodeScriptName, UnicodeScript};

/// Unicode general category L: upper, lower, title, modifier and other
/// letters. Marks, numerals and symbols are not letters.
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// A Unicode script (the Script property) that restricted mode counts.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Script {
    #[default]
    Cyrillic,
    Latin,
    Greek,
    Armenian,
    Georgian,
    Hebrew,
    Arabic,
    Devanagari,
}

impl Script {
    fn unicode(&self) -> UnicodeScriptName {
        match self {
            Self::Cyrillic => UnicodeScriptName::Cyrillic,
            Self::Latin => UnicodeScriptName::Latin,
            Self::Greek => UnicodeScriptName::Greek,
            Self::Armenian => UnicodeScriptName::Armenian,
            Self::Georgian => UnicodeScriptName::Georgian,
            Self::Hebrew => UnicodeScriptName::Hebrew,
            Self::Arabic => UnicodeScriptName::Arabic,
            Self::Devanagari => UnicodeScriptName::Devanagari,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c.script() == self.unicode()
    }

    /// True for letters whose Script property is this script.
    pub fn is_letter(&self, c: char) -> bool {
        is_letter(c) && self.contains(c)
    }

    pub fn names() -> Vec<String> {
        Script::iter().map(|s| s.to_string()).collect()
    }
}
