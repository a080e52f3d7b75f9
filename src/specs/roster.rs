// src/specs/roster.rs
//! Roster page → `RosterEntry` per row.
//!
//! Column meaning is positional and fixed; see [`Column`]. The layout is
//! checked against `ROSTER_WIDTH` when a [`RowDecoder`] is built so a
//! miscounted table fails at startup instead of shifting every field.

use scraper::{ElementRef, Html};

use crate::config::consts::{RARITY_GLYPH, ROSTER_WIDTH};
use crate::core::fragments::{FragmentBag, SelectorMap, Slot};
use crate::core::html::{count_tag, data_cells, img_src, link, link_href, link_title, text};
use crate::error::{Result, ScrapeError};
use crate::model::{Affinity, RosterEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Avatar,
    Name,
    Rarity,
    School,
    Role,
    Position,
    Attack,
    Armor,
    Combat,
    Weapon,
    Bunker,
    Urban,
    Outdoors,
    Indoors,
    Release,
}

impl Column {
    /// Page order.
    pub const ALL: [Column; ROSTER_WIDTH] = [
        Column::Avatar,
        Column::Name,
        Column::Rarity,
        Column::School,
        Column::Role,
        Column::Position,
        Column::Attack,
        Column::Armor,
        Column::Combat,
        Column::Weapon,
        Column::Bunker,
        Column::Urban,
        Column::Outdoors,
        Column::Indoors,
        Column::Release,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Column::Avatar => "avatar",
            Column::Name => "name",
            Column::Rarity => "rarity",
            Column::School => "school",
            Column::Role => "role",
            Column::Position => "position",
            Column::Attack => "attack",
            Column::Armor => "armor",
            Column::Combat => "combat",
            Column::Weapon => "weapon",
            Column::Bunker => "bunker",
            Column::Urban => "urban",
            Column::Outdoors => "outdoors",
            Column::Indoors => "indoors",
            Column::Release => "release",
        }
    }
}

/// Every column sits at its own index and the layout spans the full row.
pub fn validate_layout() -> Result<()> {
    if Column::ALL.len() != ROSTER_WIDTH {
        return Err(ScrapeError::Layout(format!(
            "roster layout has {} columns, expected {}",
            Column::ALL.len(),
            ROSTER_WIDTH
        )));
    }
    for (pos, col) in Column::ALL.iter().enumerate() {
        if col.index() != pos {
            return Err(ScrapeError::Layout(format!(
                "column {} declared at {} but listed at {}",
                col.label(),
                col.index(),
                pos
            )));
        }
    }
    Ok(())
}

/// A roster row that failed to decode, kept for reporting.
#[derive(Debug)]
pub struct RowFailure {
    pub row: usize,
    pub error: ScrapeError,
}

/// Only built through `new`, which checks the column layout.
pub struct RowDecoder;

impl RowDecoder {
    pub fn new() -> Result<Self> {
        validate_layout()?;
        Ok(Self)
    }

    /// Decode one `tr`. `row` is the index used in error messages.
    pub fn decode(&self, row: usize, tr: ElementRef<'_>) -> Result<RosterEntry> {
        let cells = data_cells(tr);
        if cells.len() < ROSTER_WIDTH {
            return Err(ScrapeError::malformed(
                row,
                format!("{} cells, expected {}", cells.len(), ROSTER_WIDTH),
            ));
        }
        let cell = |c: Column| cells[c.index()];
        let plain = |c: Column| text(cell(c));

        let thumbnail = img_src(cell(Column::Avatar))
            .ok_or_else(|| ScrapeError::malformed(row, "avatar cell has no image"))?;

        let name_link = link(cell(Column::Name))
            .ok_or_else(|| ScrapeError::malformed(row, "name cell has no link"))?;
        let link_target = link_href(name_link)
            .ok_or_else(|| ScrapeError::malformed(row, "name link has no href"))?;
        let name = Some(text(name_link))
            .filter(|t| !t.is_empty())
            .or_else(|| link_title(name_link))
            .ok_or_else(|| ScrapeError::malformed(row, "name link is empty"))?;

        let affinity = Affinity {
            urban: affinity_code(row, cell(Column::Urban), Column::Urban)?,
            outdoors: affinity_code(row, cell(Column::Outdoors), Column::Outdoors)?,
            indoors: affinity_code(row, cell(Column::Indoors), Column::Indoors)?,
        };

        Ok(RosterEntry {
            link: link_target,
            thumbnail,
            name,
            rarity: rarity(cell(Column::Rarity)),
            school: plain(Column::School),
            play_role: plain(Column::Role),
            position: plain(Column::Position),
            attack_type: plain(Column::Attack),
            armor_type: plain(Column::Armor),
            combat_class: plain(Column::Combat),
            weapon_type: plain(Column::Weapon),
            bunker: plain(Column::Bunker),
            affinity,
            release_date: plain(Column::Release),
        })
    }
}

/// Star markers are images on the wiki; plain-text tables use glyphs.
fn rarity(cell: ElementRef<'_>) -> u8 {
    let markers = match count_tag(cell, "img") {
        0 => text(cell).chars().filter(|&c| c == RARITY_GLYPH).count(),
        n => n,
    };
    u8::try_from(markers).unwrap_or(u8::MAX)
}

/// "Strong" → 'S'. The code comes from the link's title, not the cell text.
fn affinity_code(row: usize, cell: ElementRef<'_>, col: Column) -> Result<char> {
    link_title(cell)
        .and_then(|t| t.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(|| ScrapeError::malformed(row, format!("{} cell has no titled link", col.label())))
}

/// Decode every data row of a roster page. Header rows (no `td`) are
/// skipped; malformed rows are returned beside the good ones.
pub fn parse_roster(doc: &Html, selectors: &SelectorMap) -> Result<(Vec<RosterEntry>, Vec<RowFailure>)> {
    let decoder = RowDecoder::new()?;
    let bag = FragmentBag::new(doc, selectors);

    let mut entries = Vec::new();
    let mut failures = Vec::new();
    for (row, tr) in bag.all(Slot::RosterRow).into_iter().enumerate() {
        if data_cells(tr).is_empty() {
            continue;
        }
        match decoder.decode(row, tr) {
            Ok(entry) => entries.push(entry),
            Err(error) => {
                logw!("skipping roster row {row}: {error}");
                failures.push(RowFailure { row, error });
            }
        }
    }
    logf!("roster: {} entries, {} malformed rows", entries.len(), failures.len());
    Ok((entries, failures))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_ROW: &str = r#"
        <tr>
          <td><img src="/thumbs/Alice.png"></td>
          <td><a href="https://bluearchive.wiki/wiki/Alice" title="Alice">Alice</a></td>
          <td>★★★</td>
          <td>Trinity</td>
          <td>Striker</td>
          <td>Front</td>
          <td>Explosive</td>
          <td>Light</td>
          <td>Normal</td>
          <td>AR</td>
          <td>No</td>
          <td><a title='Strong'>S</a></td>
          <td><a title='Normal'>N</a></td>
          <td><a title='Weak'>W</a></td>
          <td>2024-01-01</td>
        </tr>"#;

    fn roster(rows: &str) -> Html {
        Html::parse_document(&format!(
            r#"<table class="charactertable"><tr><th>Avatar</th><th>Name</th></tr>{rows}</table>"#
        ))
    }

    #[test]
    fn layout_is_consistent() {
        assert!(validate_layout().is_ok());
        assert_eq!(Column::Release.index(), ROSTER_WIDTH - 1);
        assert!(RowDecoder::new().is_ok());
    }

    #[test]
    fn decodes_full_row() {
        let doc = roster(ALICE_ROW);
        let selectors = SelectorMap::new().unwrap();
        let (entries, failures) = parse_roster(&doc, &selectors).unwrap();
        assert!(failures.is_empty());
        assert_eq!(entries.len(), 1);

        let alice = &entries[0];
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.link, "https://bluearchive.wiki/wiki/Alice");
        assert_eq!(alice.thumbnail, "/thumbs/Alice.png");
        assert_eq!(alice.rarity, 3);
        assert_eq!(alice.school, "Trinity");
        assert_eq!(alice.weapon_type, "AR");
        assert!(!alice.has_bunker());
        assert_eq!(alice.affinity, Affinity { urban: 'S', outdoors: 'N', indoors: 'W' });
        assert_eq!(alice.release_date, "2024-01-01");
    }

    #[test]
    fn rarity_counts_image_markers() {
        let row = ALICE_ROW.replace("<td>★★★</td>", r#"<td><img src="s"><img src="s"></td>"#);
        let doc = roster(&row);
        let (entries, _) = parse_roster(&doc, &SelectorMap::new().unwrap()).unwrap();
        assert_eq!(entries[0].rarity, 2);
    }

    #[test]
    fn short_row_is_malformed_and_others_survive() {
        let short = "<tr><td>only</td><td>two</td></tr>";
        let doc = roster(&format!("{short}{ALICE_ROW}"));
        let (entries, failures) = parse_roster(&doc, &SelectorMap::new().unwrap()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0].error, ScrapeError::MalformedRow { .. }));
    }

    #[test]
    fn affinity_without_link_is_malformed() {
        let row = ALICE_ROW.replace("<td><a title='Weak'>W</a></td>", "<td>W</td>");
        let doc = roster(&row);
        let (entries, failures) = parse_roster(&doc, &SelectorMap::new().unwrap()).unwrap();
        assert!(entries.is_empty());
        match &failures[0].error {
            ScrapeError::MalformedRow { reason, .. } => assert!(reason.contains("indoors")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_avatar_image_is_malformed() {
        let row = ALICE_ROW.replace(r#"<img src="/thumbs/Alice.png">"#, "");
        let doc = roster(&row);
        let (_, failures) = parse_roster(&doc, &SelectorMap::new().unwrap()).unwrap();
        assert_eq!(failures.len(), 1);
    }
}
