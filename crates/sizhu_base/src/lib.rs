//! Closed symbol sets and classification tables for four-pillars charts.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches with their fixed
//!   elements, polarities and cycle arithmetic
//! - The hidden-stem (cang gan) table
//! - Ten-god classification over stem pairs
//! - Branch relationship tables (clash, combine, punishment, harm)
//! - Symbolic marker (shen sha) tables
//!
//! Every table is a total `const fn` over its closed enum domain; the only
//! fallible surface is index-based construction, which returns `Option`.
//! No I/O, no mutable state.

pub mod branch;
pub mod element;
pub mod hidden;
pub mod interaction;
pub mod marker;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use hidden::{HiddenWeight, hidden_stems_of};
pub use interaction::{
    ALL_INTERACTION_KINDS, InteractionKind, branches_interact, clash_partner, combine_partner,
    harm_partner, punishes,
};
pub use marker::{
    ALL_MARKER_KEYS, MarkerKey, academic_branch, nobleman_branches, peach_blossom_branch,
    travel_horse_branch,
};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
