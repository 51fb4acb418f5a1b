use std::io::{self, Write};

use anyhow::{bail, Result};

/// Which records the user wants on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    BySkin,
}

/// "all" or "skin".
pub fn parse_selection(input: &str) -> Option<Selection> {
    match input {
        "all" => Some(Selection::All),
        "skin" => Some(Selection::BySkin),
        _ => None,
    }
}

/// "y" or "n".
pub fn parse_confirm(input: &str) -> Option<bool> {
    match input {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

/// Any non-empty animal name.
pub fn parse_name(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

/// Case-insensitive membership check against the known skin types,
/// returning the canonical (first-seen) spelling.
pub fn resolve_skin(input: &str, skins: &[String]) -> Option<String> {
    skins
        .iter()
        .find(|skin| skin.to_lowercase() == input.to_lowercase())
        .cloned()
}

/// Print `question`, read one line, trim and lowercase it, and hand it to
/// `parse`. Rejected input prints `reject` and asks again; only EOF on
/// stdin ends the loop early.
pub fn ask<T>(question: &str, reject: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    let stdin = io::stdin();
    loop {
        print!("{}", question);
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }
        let input = line.trim().to_lowercase();
        match parse(&input) {
            Some(value) => return Ok(value),
            None => println!("{}", reject),
        }
    }
}

// ── Tests ──
