// src/core/fragments.rs
//! Named fragment lookup over one parsed page.
//!
//! A [`FragmentBag`] answers "give me the fragment called X" for a page.
//! Absence is a normal answer (`None` / empty `Vec`); whether it is fatal is
//! decided by the caller through [`FragmentBag::required`] or
//! [`FragmentBag::optional`].

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use crate::config::selectors::DEFAULT_SELECTORS;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    RosterRow,
    Background,
    Equipment1,
    Equipment2,
    Equipment3,
    FullName,
    Age,
    Birthday,
    Height,
    Hobbies,
    Illustrator,
    VoiceActress,
    ProfileImage,
    FullArtImage,
    AffectionBonusRow,
    CafeInteraction,
    GiftFavorite,
    GiftLikes,
    WeaponName,
    WeaponSubName,
    WeaponIcon,
    WeaponDescription,
    WeaponAffinityBoost,
    GearName,
    GearSubName,
    GearIcon,
    GearDescription,
    GearTier,
    SkillEx,
    SkillExUpgrade,
    SkillNormal,
    SkillPassive,
    SkillSub,
    SkillWeaponPassive,
    SkillGearNormal,
    Limited,
}

impl Slot {
    pub const ALL: [Slot; 36] = [
        Slot::RosterRow,
        Slot::Background,
        Slot::Equipment1,
        Slot::Equipment2,
        Slot::Equipment3,
        Slot::FullName,
        Slot::Age,
        Slot::Birthday,
        Slot::Height,
        Slot::Hobbies,
        Slot::Illustrator,
        Slot::VoiceActress,
        Slot::ProfileImage,
        Slot::FullArtImage,
        Slot::AffectionBonusRow,
        Slot::CafeInteraction,
        Slot::GiftFavorite,
        Slot::GiftLikes,
        Slot::WeaponName,
        Slot::WeaponSubName,
        Slot::WeaponIcon,
        Slot::WeaponDescription,
        Slot::WeaponAffinityBoost,
        Slot::GearName,
        Slot::GearSubName,
        Slot::GearIcon,
        Slot::GearDescription,
        Slot::GearTier,
        Slot::SkillEx,
        Slot::SkillExUpgrade,
        Slot::SkillNormal,
        Slot::SkillPassive,
        Slot::SkillSub,
        Slot::SkillWeaponPassive,
        Slot::SkillGearNormal,
        Slot::Limited,
    ];

    /// Stable name used in errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            Slot::RosterRow => "roster row",
            Slot::Background => "background",
            Slot::Equipment1 => "equipment 1",
            Slot::Equipment2 => "equipment 2",
            Slot::Equipment3 => "equipment 3",
            Slot::FullName => "full name",
            Slot::Age => "age",
            Slot::Birthday => "birthday",
            Slot::Height => "height",
            Slot::Hobbies => "hobbies",
            Slot::Illustrator => "illustrator",
            Slot::VoiceActress => "voice actress",
            Slot::ProfileImage => "profile image",
            Slot::FullArtImage => "full-art image",
            Slot::AffectionBonusRow => "bonus affection",
            Slot::CafeInteraction => "cafe interaction",
            Slot::GiftFavorite => "favorite gifts",
            Slot::GiftLikes => "liked gifts",
            Slot::WeaponName => "unique weapon name",
            Slot::WeaponSubName => "unique weapon sub-name",
            Slot::WeaponIcon => "unique weapon icon",
            Slot::WeaponDescription => "unique weapon description",
            Slot::WeaponAffinityBoost => "unique weapon affinity boost",
            Slot::GearName => "unique gear name",
            Slot::GearSubName => "unique gear sub-name",
            Slot::GearIcon => "unique gear icon",
            Slot::GearDescription => "unique gear description",
            Slot::GearTier => "unique gear tiers",
            Slot::SkillEx => "ex skill",
            Slot::SkillExUpgrade => "ex skill upgrades",
            Slot::SkillNormal => "normal skill",
            Slot::SkillPassive => "passive skill",
            Slot::SkillSub => "sub skill",
            Slot::SkillWeaponPassive => "weapon passive skill",
            Slot::SkillGearNormal => "gear normal skill",
            Slot::Limited => "limited marker",
        }
    }
}

/// Compiled selector per slot.
#[derive(Debug)]
pub struct SelectorMap {
    by_slot: HashMap<Slot, Selector>,
}

impl SelectorMap {
    /// Compile the built-in selector table.
    pub fn new() -> Result<Self> {
        Self::from_table(DEFAULT_SELECTORS)
    }

    /// Compile `table`; every slot must appear exactly once.
    pub fn from_table(table: &[(Slot, &'static str)]) -> Result<Self> {
        let mut by_slot = HashMap::with_capacity(table.len());
        for &(slot, css) in table {
            let sel = Selector::parse(css).map_err(|e| ScrapeError::BadSelector {
                slot: slot.name(),
                selector: css,
                reason: format!("{e:?}"),
            })?;
            if by_slot.insert(slot, sel).is_some() {
                return Err(ScrapeError::Layout(format!("selector for {} given twice", slot.name())));
            }
        }
        if let Some(missing) = Slot::ALL.iter().find(|s| !by_slot.contains_key(*s)) {
            return Err(ScrapeError::Layout(format!("no selector for {}", missing.name())));
        }
        Ok(Self { by_slot })
    }

    fn get(&self, slot: Slot) -> &Selector {
        // `from_table` guarantees every slot is present.
        &self.by_slot[&slot]
    }
}

/// One parsed page plus the selector map used to query it.
pub struct FragmentBag<'a> {
    doc: &'a Html,
    selectors: &'a SelectorMap,
}

impl<'a> FragmentBag<'a> {
    pub fn new(doc: &'a Html, selectors: &'a SelectorMap) -> Self {
        Self { doc, selectors }
    }

    pub fn first(&self, slot: Slot) -> Option<ElementRef<'a>> {
        self.doc.select(self.selectors.get(slot)).next()
    }

    pub fn all(&self, slot: Slot) -> Vec<ElementRef<'a>> {
        self.doc.select(self.selectors.get(slot)).collect()
    }

    /// Extract a value every entity page must carry.
    /// A missing fragment, or one `extract` can't read, is `ProfileIncomplete`.
    pub fn required<T>(&self, slot: Slot, extract: impl FnOnce(ElementRef<'a>) -> Option<T>) -> Result<T> {
        self.first(slot)
            .and_then(extract)
            .ok_or_else(|| ScrapeError::missing(slot.name()))
    }

    /// Extract a value some pages lack. Absence is `None`, never an error.
    pub fn optional<T>(&self, slot: Slot, extract: impl FnOnce(ElementRef<'a>) -> Option<T>) -> Option<T> {
        let value = self.first(slot).and_then(extract);
        if value.is_none() {
            logd!("optional fragment absent: {}", slot.name());
        }
        value
    }

    /// Like `optional`, over every match. Zero readable matches is `None`.
    pub fn optional_list<T>(&self, slot: Slot, extract: impl FnMut(ElementRef<'a>) -> Option<T>) -> Option<Vec<T>> {
        let values: Vec<T> = self.all(slot).into_iter().filter_map(extract).collect();
        if values.is_empty() {
            logd!("optional fragment absent: {}", slot.name());
            None
        } else {
            Some(values)
        }
    }
}
