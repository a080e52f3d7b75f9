// src/specs/mod.rs
//! # Page reading
//!
//! This module knows **where the data lives in the wiki markup** and how to
//! turn it into records. It never fetches and never writes.
//!
//! ## Call chain
//! ```text
//! scrape::collect_students
//!     → roster::parse_roster      (one pass over the roster page)
//!     → profile::assemble         (per student page)
//!         → ability::parse_ability (x6 skill tables)
//!         → upgrade::parse_upgrades + merge_upgrades (ex skill only)
//! ```
//!
//! ## Conventions
//! - Fragments are looked up through `core::fragments::FragmentBag` by
//!   logical `Slot`, never by ad-hoc selectors in parsing code.
//! - Roster columns are positional (`roster::Column`), validated once.
//! - Required vs optional is decided here, per field.
//! - Specs are tested offline against inline markup and `tests/fixtures/`.
pub mod ability;
pub mod profile;
pub mod roster;
pub mod upgrade;
