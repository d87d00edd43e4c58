//! The read-only display variant: formats parsed resume text into HTML and
//! supports inline editing of individual bullet lines.

pub mod inline;
pub mod scanner;
