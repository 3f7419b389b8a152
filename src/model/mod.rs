//! Core data structures for molecular datasets and their analysis results.
//!
//! - [`molecule`] – A labeled entity with a strength and one-directional bond list.
//! - [`data`] – The molecule store that owns every molecule of one dataset.
//! - [`structure`] – Connected components borrowed from a store.
//! - [`bond`] – Weighted links created by serum synthesis.
//!
//! The store owns its molecules; structures and bonds only borrow them, so a
//! single analysis never copies molecule data.

pub mod bond;
pub mod data;
pub mod molecule;
pub mod structure;
