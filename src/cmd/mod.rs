pub mod chars;
pub mod words;
