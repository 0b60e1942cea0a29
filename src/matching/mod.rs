//! Fuzzy matching utilities for contact lookup.
//!
//! This module provides fuzzy name matching and exact phone matching over the
//! contacts of an address book.

pub mod name_matcher;

pub use name_matcher::{MatchResult, MatchType, NameMatcher};
