// src/specs/upgrade.rs
//! Upgrade table → per-level material lists, merged into an `Ability`.
//!
//! Each data row is the cost of one level from 2 upward. The first cell is
//! a label; every other non-empty cell is one material: link title for the
//! item, printed count for the amount.

use scraper::ElementRef;

use crate::core::html::{data_cells, img_alt, link_title, text_outside};
use crate::core::sanitize::parse_count;
use crate::error::{Result, ScrapeError};
use crate::model::{Ability, AbilityUpgrade};

/// One upgrade list per data row, in row order. Header rows are skipped.
pub fn parse_upgrades(rows: &[ElementRef<'_>]) -> Vec<Vec<AbilityUpgrade>> {
    rows.iter()
        .map(|&row| data_cells(row))
        .filter(|cells| !cells.is_empty())
        .map(|cells| cells.into_iter().skip(1).filter_map(material).collect())
        .collect()
}

fn material(cell: ElementRef<'_>) -> Option<AbilityUpgrade> {
    let item = link_title(cell).or_else(|| img_alt(cell))?;
    // Link text is the item's display name; the count is printed beside it.
    // An icon without a printed count is a single item.
    let amount = parse_count(&text_outside(cell, "a")).unwrap_or(1);
    Some(AbilityUpgrade { item, amount })
}

/// Assign `upgrades[i]` to `levels[i + 1]`, replacing what was there.
/// Level 1 never gets an upgrade list.
pub fn merge_upgrades(ability: &mut Ability, upgrades: Vec<Vec<AbilityUpgrade>>) -> Result<()> {
    let expected = ability.levels.len().saturating_sub(1);
    if upgrades.len() != expected {
        return Err(ScrapeError::UpgradeMergeMismatch {
            upgrades: upgrades.len(),
            levels: ability.levels.len(),
        });
    }
    for (level, list) in ability.levels.iter_mut().skip(1).zip(upgrades) {
        level.upgrade = list;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AbilityLevel;
    use scraper::{Html, Selector};

    fn ability(n: u32) -> Ability {
        Ability {
            name: Some(s!("Ex")),
            icon: None,
            levels: (1..=n)
                .map(|level| AbilityLevel {
                    level,
                    description: format!("desc{level}"),
                    cost: None,
                    upgrade: Vec::new(),
                })
                .collect(),
        }
    }

    fn upgrade(item: &str, amount: u32) -> AbilityUpgrade {
        AbilityUpgrade { item: s!(item), amount }
    }

    #[test]
    fn parses_materials_after_label() {
        let doc = Html::parse_document(
            r#"<table class="skill-ex-upgrade">
                 <tr><th>Lv</th><th>Materials</th></tr>
                 <tr><td>2</td><td><a title="Credits"><img src="c.png"></a> 80,000</td><td></td></tr>
                 <tr><td>3</td><td><a title="Beginner Tactical BD"></a>x2</td><td><img alt="Note" src="n.png"></td></tr>
               </table>"#,
        );
        let rows: Vec<_> = doc.select(&Selector::parse("tr").unwrap()).collect();
        let lists = parse_upgrades(&rows);
        assert_eq!(lists, vec![
            vec![upgrade("Credits", 80_000)],
            vec![upgrade("Beginner Tactical BD", 2), upgrade("Note", 1)],
        ]);
    }

    #[test]
    fn digits_in_link_text_are_not_the_count() {
        let doc = Html::parse_document(
            r#"<table>
                 <tr><td>Lv.2</td><td><a title="Lv.2 Note">Tier 2 Note</a> x5</td><td><a title="Tier 3 Disc">Tier 3 Disc</a></td></tr>
               </table>"#,
        );
        let rows: Vec<_> = doc.select(&Selector::parse("tr").unwrap()).collect();
        assert_eq!(parse_upgrades(&rows), vec![vec![
            upgrade("Lv.2 Note", 5),
            upgrade("Tier 3 Disc", 1),
        ]]);
    }

    #[test]
    fn merge_skips_level_one() {
        let mut ex = ability(3);
        merge_upgrades(&mut ex, vec![vec![upgrade("A", 1)], vec![upgrade("B", 2)]]).unwrap();
        for (k, level) in ex.levels.iter().enumerate() {
            assert_eq!(level.upgrade.is_empty(), k == 0);
        }
        assert_eq!(ex.levels[2].upgrade, vec![upgrade("B", 2)]);
    }

    #[test]
    fn merge_replaces_existing_lists() {
        let mut ex = ability(2);
        ex.levels[1].upgrade = vec![upgrade("Old", 9)];
        merge_upgrades(&mut ex, vec![vec![upgrade("New", 1)]]).unwrap();
        assert_eq!(ex.levels[1].upgrade, vec![upgrade("New", 1)]);
    }

    #[test]
    fn merge_rejects_misaligned_tables() {
        let mut ex = ability(3);
        let err = merge_upgrades(&mut ex, vec![vec![upgrade("A", 1)]]).unwrap_err();
        assert!(matches!(err, ScrapeError::UpgradeMergeMismatch { upgrades: 1, levels: 3 }));

        let mut empty = Ability::default();
        assert!(merge_upgrades(&mut empty, Vec::new()).is_ok());
        assert!(merge_upgrades(&mut empty, vec![Vec::new()]).is_err());
    }
}
