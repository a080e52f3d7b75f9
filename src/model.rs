// src/model.rs
//
// Output records. Every record owns its nested data outright; nothing is
// shared between students. Field names serialize in camelCase.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::sanitize::to_bool_from_yes_no;

/// One row of the roster table, as printed (enum fields not yet normalized).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    /// Handed back to the fetcher to get the student's page.
    pub link: String,
    pub thumbnail: String,
    pub name: String,
    pub rarity: u8,
    pub school: String,
    pub play_role: String,
    pub position: String,
    pub attack_type: String,
    pub armor_type: String,
    pub combat_class: String,
    pub weapon_type: String,
    /// Raw "Yes"/"No" text.
    pub bunker: String,
    pub affinity: Affinity,
    pub release_date: String,
}

impl RosterEntry {
    pub fn has_bunker(&self) -> bool {
        to_bool_from_yes_no(&self.bunker)
    }
}

/// Terrain grades, one uppercase letter each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affinity {
    pub urban: char,
    pub outdoors: char,
    pub indoors: char,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityUpgrade {
    pub item: String,
    pub amount: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityLevel {
    pub level: u32,
    pub description: String,
    /// Sticky: inherited from the last row that declared one.
    pub cost: Option<u32>,
    /// Empty for level 1.
    pub upgrade: Vec<AbilityUpgrade>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub levels: Vec<AbilityLevel>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    /// `None` when the upgrade table didn't line up with the levels.
    pub ex: Option<Ability>,
    pub normal: Ability,
    pub passive: Ability,
    pub sub: Ability,
    pub weapon_passive: Ability,
    pub gear_normal: Ability,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeGift {
    pub favorite: Option<Vec<String>>,
    pub likes: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    pub interact: Option<String>,
    pub gift: CafeGift,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentImages {
    pub thumbnail: String,
    pub profile: String,
    pub full_art: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueWeapon {
    /// Main display name first, then sub-names.
    pub name: Vec<String>,
    pub img: String,
    pub description: String,
    pub affinity_boost: Vec<String>,
}

/// Present when the page shows any part of a gear block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueGear {
    pub name: Option<Vec<String>>,
    pub img: Option<String>,
    pub description: Option<String>,
    pub tiers: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub link: String,
    pub name: String,
    pub rarity: u8,
    pub background: String,
    pub school: String,
    pub play_role: String,
    pub position: String,
    pub attack_type: String,
    pub armor_type: String,
    pub combat_class: String,
    pub affinity: Affinity,
    pub weapon_type: String,
    pub bunker: bool,
    pub equip1: String,
    pub equip2: String,
    pub equip3: String,
    pub full_name: String,
    /// -1 when the wiki prints "??".
    pub age: i32,
    pub birthday: String,
    /// Centimetres, -1 when unknown.
    pub height: i32,
    pub hobbies: String,
    pub illustrator: String,
    pub voice_actress: String,
    pub release_date: String,
    /// Level → reward text, ascending by level.
    pub bonus_affection: BTreeMap<u32, String>,
    pub skills: Skills,
    pub unique_weapon: UniqueWeapon,
    /// `None` for students without unique gear.
    pub unique_gear: Option<UniqueGear>,
    pub cafe: Cafe,
    pub images: StudentImages,
    pub limited: bool,
}
