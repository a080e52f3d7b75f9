// src/core/mod.rs

pub mod fetch;
pub mod fragments;
pub mod html;
pub mod sanitize;

pub use fetch::{DirFetcher, Fetcher};
pub use fragments::{FragmentBag, SelectorMap, Slot};
