// src/config/selectors.rs
//! Where each logical fragment lives in the wiki markup.
//!
//! One entry per [`Slot`]. The table is compiled into a `SelectorMap` once at
//! startup, which rejects unparsable selectors and slots without an entry.
//! Row-valued slots (roster rows, ability tables, bonus affection) select the
//! `tr` elements themselves; everything else selects the element whose text
//! or attribute carries the value.

use crate::core::fragments::Slot;

pub const DEFAULT_SELECTORS: &[(Slot, &str)] = &[
    // Roster page
    (Slot::RosterRow, "table.charactertable tr"),
    // Entity page: summary
    (Slot::Background, ".character-background"),
    (Slot::Equipment1, "table.character-equipment td.equip-1"),
    (Slot::Equipment2, "table.character-equipment td.equip-2"),
    (Slot::Equipment3, "table.character-equipment td.equip-3"),
    // Biography
    (Slot::FullName, "table.character-profile tr.full-name td"),
    (Slot::Age, "table.character-profile tr.age td"),
    (Slot::Birthday, "table.character-profile tr.birthday td"),
    (Slot::Height, "table.character-profile tr.height td"),
    (Slot::Hobbies, "table.character-profile tr.hobbies td"),
    (Slot::Illustrator, "table.character-profile tr.illustrator td"),
    (Slot::VoiceActress, "table.character-profile tr.voice td"),
    // Images
    (Slot::ProfileImage, ".character-image-profile img"),
    (Slot::FullArtImage, ".character-image-fullart img"),
    // Affection
    (Slot::AffectionBonusRow, "table.affection-bonus tr"),
    // Cafe
    (Slot::CafeInteraction, ".cafe-interaction"),
    (Slot::GiftFavorite, ".gift-favorite a"),
    (Slot::GiftLikes, ".gift-likes a"),
    // Unique weapon
    (Slot::WeaponName, ".weapon-name"),
    (Slot::WeaponSubName, ".weapon-subname"),
    (Slot::WeaponIcon, ".weapon-icon img"),
    (Slot::WeaponDescription, ".weapon-description"),
    (Slot::WeaponAffinityBoost, ".weapon-affinity-boost a"),
    // Unique gear
    (Slot::GearName, ".gear-name"),
    (Slot::GearSubName, ".gear-subname"),
    (Slot::GearIcon, ".gear-icon img"),
    (Slot::GearDescription, ".gear-description"),
    (Slot::GearTier, "table.gear-tiers td"),
    // Skills
    (Slot::SkillEx, "table.skill-ex tr"),
    (Slot::SkillExUpgrade, "table.skill-ex-upgrade tr"),
    (Slot::SkillNormal, "table.skill-normal tr"),
    (Slot::SkillPassive, "table.skill-passive tr"),
    (Slot::SkillSub, "table.skill-sub tr"),
    (Slot::SkillWeaponPassive, "table.skill-weapon-passive tr"),
    (Slot::SkillGearNormal, "table.skill-gear-normal tr"),
    // Availability
    (Slot::Limited, ".character-limited"),
];
