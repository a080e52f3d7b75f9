// src/specs/ability.rs
//! Skill table → `Ability`.
//!
//! Table shape:
//! - row 0: icon cell, name cell
//! - row 1: column headers (ignored)
//! - row 2..: one level each: `level [cost] description`
//!
//! Costs are sticky: a row that declares one (3+ tokens) sets it, rows that
//! don't inherit the last declared value. Level 1 usually has none.

use scraper::ElementRef;

use crate::core::html::{cells, img_src, non_empty_text, row_tokens};
use crate::core::sanitize::parse_count;
use crate::model::{Ability, AbilityLevel};

const HEADER_ROWS: usize = 2;

pub fn parse_ability(rows: &[ElementRef<'_>]) -> Ability {
    if rows.len() <= HEADER_ROWS {
        return Ability::default();
    }
    let (name, icon) = header(rows[0]);
    let (_, levels) = rows[HEADER_ROWS..]
        .iter()
        .enumerate()
        .fold((None, Vec::new()), |(sticky, mut levels), (i, &row)| {
            let tokens = row_tokens(row);
            let sticky = match level_from_tokens(i + 1, &tokens, sticky) {
                Some((level, cost)) => {
                    levels.push(level);
                    cost
                }
                None => sticky,
            };
            (sticky, levels)
        });

    Ability { name, icon, levels }
}

/// One level row given the sticky cost so far. Returns the level and the
/// sticky cost for the next row; `None` for rows with no text.
pub fn level_from_tokens(position: usize, tokens: &[String], sticky: Option<u32>) -> Option<(AbilityLevel, Option<u32>)> {
    let first = tokens.first()?;
    let description = tokens.last()?.clone();
    let level = first
        .parse()
        .unwrap_or_else(|_| u32::try_from(position).unwrap_or(u32::MAX));

    let cost = if tokens.len() >= 3 {
        match parse_count(&tokens[1]) {
            Some(c) => Some(c),
            None => {
                logd!("level {level}: unreadable cost {:?}, keeping {:?}", tokens[1], sticky);
                sticky
            }
        }
    } else {
        sticky
    };

    let level = AbilityLevel { level, description, cost, upgrade: Vec::new() };
    Some((level, cost))
}

/// Icon from the first cell, name from the second (or the first text found).
fn header(row: ElementRef<'_>) -> (Option<String>, Option<String>) {
    let cs = cells(row);
    let icon = cs.first().and_then(|&c| img_src(c));
    let name = cs
        .get(1)
        .and_then(|&c| non_empty_text(c))
        .or_else(|| row_tokens(row).into_iter().next());
    (name, icon)
}
