//! Group code generator
//!
//! Derives the short display code of a finalized group:
//! `{cluster}-{season}{year}-{variety}-G{sequence}`, e.g. `NP-WS26-HM1-G03`
//! for group 3 of Hom Mali 105 in the 2026 wet season of the Nakhon Pathom
//! cluster. Cosmetic; the sequence number comes from discovery order.

use shared::{CultivationSeason, RiceVariety};

/// Maximum characters an abbreviation keeps.
const ABBREVIATION_LEN: usize = 3;

/// Known season-name fragments, checked case-insensitively before the
/// generic abbreviation rule.
const SEASON_ABBREVIATIONS: &[(&str, &str)] = &[
    ("wet", "WS"),
    ("นาปี", "WS"),
    ("major", "WS"),
    ("dry", "DS"),
    ("นาปรัง", "DS"),
    ("second", "DS"),
];

/// Abbreviate free text: upper-cased initials when the text splits into two
/// or more words on space, hyphen or underscore, otherwise the leading
/// characters. Truncated to `max_len`.
pub fn abbreviate(text: &str, max_len: usize) -> String {
    let words: Vec<&str> = text
        .split(|c: char| c == ' ' || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .collect();
    let abbreviation: String = match words.as_slice() {
        [] => String::new(),
        [word] => word.chars().take(max_len).collect(),
        _ => words
            .iter()
            .filter_map(|w| w.chars().next())
            .take(max_len)
            .collect(),
    };
    abbreviation.to_uppercase()
}

/// Abbreviate a season name, consulting the known-season table first.
pub fn abbreviate_season(name: &str) -> String {
    let lowered = name.to_lowercase();
    for (fragment, abbreviation) in SEASON_ABBREVIATIONS {
        if lowered.contains(fragment) {
            return (*abbreviation).to_string();
        }
    }
    abbreviate(name, ABBREVIATION_LEN)
}

/// Generate the display code for a finalized group.
pub fn generate_group_code(
    season: &CultivationSeason,
    variety: &RiceVariety,
    sequence: u32,
) -> String {
    format!(
        "{}-{}{:02}-{}-G{:02}",
        abbreviate(&season.cluster_name, ABBREVIATION_LEN),
        abbreviate_season(&season.season.to_string()),
        season.year.rem_euclid(100),
        abbreviate(&variety.to_string(), ABBREVIATION_LEN),
        sequence
    )
}
