// src/specs/profile.rs
//! Entity page + roster entry → `StudentProfile`.
//!
//! Required fragments abort the student with `ProfileIncomplete`; nothing
//! partial is returned. Optional fragments (cafe, gifts, gear, limited
//! marker) become `None`/`false`. Skill tables are parsed independently;
//! only the ex skill carries an upgrade table.

use std::collections::BTreeMap;

use scraper::ElementRef;

use crate::config::consts::BONUS_SUFFIX;
use crate::core::fragments::{FragmentBag, Slot};
use crate::core::html::{cells, child_lines, count_tag, img_src, link_title, non_empty_text, text};
use crate::core::sanitize::{join_multiline, to_enum_case, to_int};
use crate::model::{
    Cafe, CafeGift, RosterEntry, Skills, StudentImages, StudentProfile, UniqueGear, UniqueWeapon,
};
use crate::error::Result;
use super::ability::parse_ability;
use super::upgrade::{merge_upgrades, parse_upgrades};

pub fn assemble(entry: &RosterEntry, page: &FragmentBag<'_>) -> Result<StudentProfile> {
    let text_of = |slot: Slot| page.required(slot, non_empty_text);

    let background = page.required(Slot::Background, |el| {
        Some(join_multiline(&child_lines(el))).filter(|t| !t.is_empty())
    })?;
    let equip1 = text_of(Slot::Equipment1)?;
    let equip2 = text_of(Slot::Equipment2)?;
    let equip3 = text_of(Slot::Equipment3)?;

    let full_name = text_of(Slot::FullName)?;
    let age = to_int(&text_of(Slot::Age)?);
    let birthday = text_of(Slot::Birthday)?;
    let height = to_int(&text_of(Slot::Height)?);
    let hobbies = page.required(Slot::Hobbies, |el| {
        Some(join_multiline(&child_lines(el))).filter(|t| !t.is_empty())
    })?;
    let illustrator = text_of(Slot::Illustrator)?;
    let voice_actress = text_of(Slot::VoiceActress)?;

    let images = StudentImages {
        thumbnail: entry.thumbnail.clone(),
        profile: page.required(Slot::ProfileImage, img_src)?,
        full_art: page.required(Slot::FullArtImage, img_src)?,
    };

    let unique_weapon = unique_weapon(page)?;
    let unique_gear = unique_gear(page);
    let cafe = cafe(page);
    let skills = skills(entry, page);
    let bonus_affection = bonus_affection(&page.all(Slot::AffectionBonusRow));
    let limited = page.first(Slot::Limited).is_some();

    Ok(StudentProfile {
        link: entry.link.clone(),
        name: entry.name.clone(),
        rarity: entry.rarity,
        background,
        school: to_enum_case(&entry.school),
        play_role: to_enum_case(&entry.play_role),
        position: to_enum_case(&entry.position),
        attack_type: to_enum_case(&entry.attack_type),
        armor_type: to_enum_case(&entry.armor_type),
        combat_class: to_enum_case(&entry.combat_class),
        affinity: entry.affinity,
        weapon_type: to_enum_case(&entry.weapon_type),
        bunker: entry.has_bunker(),
        equip1,
        equip2,
        equip3,
        full_name,
        age,
        birthday,
        height,
        hobbies,
        illustrator,
        voice_actress,
        release_date: entry.release_date.clone(),
        bonus_affection,
        skills,
        unique_weapon,
        unique_gear,
        cafe,
        images,
        limited,
    })
}

fn unique_weapon(page: &FragmentBag<'_>) -> Result<UniqueWeapon> {
    let mut name = vec![page.required(Slot::WeaponName, non_empty_text)?];
    name.extend(page.all(Slot::WeaponSubName).into_iter().filter_map(non_empty_text));

    Ok(UniqueWeapon {
        name,
        img: page.required(Slot::WeaponIcon, img_src)?,
        description: page.required(Slot::WeaponDescription, non_empty_text)?,
        affinity_boost: page
            .all(Slot::WeaponAffinityBoost)
            .into_iter()
            .filter_map(|a| link_title(a).or_else(|| non_empty_text(a)))
            .collect(),
    })
}

fn unique_gear(page: &FragmentBag<'_>) -> Option<UniqueGear> {
    let name = page.optional(Slot::GearName, non_empty_text).map(|main| {
        let mut names = vec![main];
        names.extend(page.all(Slot::GearSubName).into_iter().filter_map(non_empty_text));
        names
    });
    let gear = UniqueGear {
        name,
        img: page.optional(Slot::GearIcon, img_src),
        description: page.optional(Slot::GearDescription, non_empty_text),
        tiers: page.optional_list(Slot::GearTier, non_empty_text),
    };
    (gear != UniqueGear::default()).then_some(gear)
}

fn cafe(page: &FragmentBag<'_>) -> Cafe {
    let gift_name = |a| link_title(a).or_else(|| non_empty_text(a));
    Cafe {
        interact: page.optional(Slot::CafeInteraction, |el| link_title(el).or_else(|| non_empty_text(el))),
        gift: CafeGift {
            favorite: page.optional_list(Slot::GiftFavorite, gift_name),
            likes: page.optional_list(Slot::GiftLikes, gift_name),
        },
    }
}

fn skills(entry: &RosterEntry, page: &FragmentBag<'_>) -> Skills {
    let table = |slot: Slot| parse_ability(&page.all(slot));

    let mut ex = table(Slot::SkillEx);
    let upgrades = parse_upgrades(&page.all(Slot::SkillExUpgrade));
    let ex = match merge_upgrades(&mut ex, upgrades) {
        Ok(()) => Some(ex),
        Err(e) => {
            logw!("{}: dropping ex skill: {e}", entry.name);
            None
        }
    };

    Skills {
        ex,
        normal: table(Slot::SkillNormal),
        passive: table(Slot::SkillPassive),
        sub: table(Slot::SkillSub),
        weapon_passive: table(Slot::SkillWeaponPassive),
        gear_normal: table(Slot::SkillGearNormal),
    }
}

/// `(level, reward)` rows into a level-keyed map; a later duplicate wins.
/// An image in the reward cell marks a bonus reward.
pub fn bonus_affection(rows: &[ElementRef<'_>]) -> BTreeMap<u32, String> {
    rows.iter()
        .filter_map(|&row| {
            let cs = cells(row);
            let level: u32 = text(*cs.first()?).parse().ok()?;
            let reward_cell = *cs.get(1)?;
            let mut reward = text(reward_cell);
            if count_tag(reward_cell, "img") > 0 {
                reward = join!(reward.as_str(), BONUS_SUFFIX);
            }
            Some((level, reward))
        })
        .collect()
}
