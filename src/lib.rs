//! A pure Rust library for comparing molecule datasets and synthesizing a
//! bonding serum between them. It discovers molecular structures from
//! one-directional bond lists, finds structures unique to one dataset, and
//! greedily selects low-strength bonds that tie the weakest members together.
//!
//! # Features
//!
//! - **Structure discovery** — Connected components over bonds recorded on
//!   either endpoint, in a deterministic depth-first member order
//! - **Anomaly detection** — Structures of one dataset with no set-equal
//!   counterpart in another
//! - **Serum synthesis** — Greedy selection over mean-strength bonds between
//!   the weakest molecule of every structure
//! - **Flexible I/O** — Read TOML or plain-text datasets; write text reports
//!   or TOML summaries
//!
//! # Quick Start
//!
//! The main entry point is the [`analyze`] function, which takes two
//! [`MolecularData`] stores and an [`AnalysisConfig`] and produces an
//! [`Analysis`]:
//!
//! ```
//! use serum_forge::{Molecule, MolecularData};
//! use serum_forge::{analyze, AnalysisConfig};
//!
//! // A typical human: H1 bonded to H2, H3 alone
//! let human = MolecularData::new(vec![
//!     Molecule::new("H1", 4.0).with_bonds(["H2"]),
//!     Molecule::new("H2", 6.0),
//!     Molecule::new("H3", 2.5),
//! ]);
//!
//! // A Vitales individual: the same H1-H2 pair recorded the other way round,
//! // plus an unfamiliar V1-V2 structure
//! let vitales = MolecularData::new(vec![
//!     Molecule::new("H2", 6.0).with_bonds(["H1"]),
//!     Molecule::new("H1", 4.0),
//!     Molecule::new("V1", 1.5).with_bonds(["V2"]),
//!     Molecule::new("V2", 3.0),
//! ]);
//!
//! let analysis = analyze(&human, &vitales, &AnalysisConfig::default());
//!
//! // Two structures each; only V1-V2 is unique to the Vitales dataset
//! assert_eq!(analysis.human_structures.len(), 2);
//! assert_eq!(analysis.anomalies.len(), 1);
//! assert_eq!(analysis.anomalies[0].sorted_ids(), ["V1", "V2"]);
//!
//! // Representatives V1, H1, H3 are joined by V1-H3 (2.0) and V1-H1 (2.75)
//! assert_eq!(analysis.synthesis.serum.len(), 2);
//! assert_eq!(analysis.synthesis.total_weight(), 4.75);
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Dataset readers and result writers (TOML, text, report)
//! - [`analyze`] — Full comparison pipeline
//! - [`AnalysisConfig`] — Discovery strategy selection
//!
//! # Data Types
//!
//! - [`Molecule`] — Identifier, strength and outgoing bond ids
//! - [`MolecularData`] — Ordered molecule store for one dataset
//! - [`MolecularStructure`] — Connected group of molecules borrowed from a store
//! - [`Bond`] — Weighted candidate bond between two representatives
//! - [`Synthesis`] — Representatives plus admitted and rejected bonds
//!
//! # Pipeline Stages
//!
//! Each stage of [`analyze`] is also available on its own:
//!
//! - [`identify_structures`] — Structure discovery with a chosen
//!   [`DiscoveryStrategy`]
//! - [`anomalies`] — Structures of a target with no match in a source
//! - [`synthesize`] — Serum synthesis, built from [`select_representatives`],
//!   [`candidate_bonds`] and [`select_bonds`]

mod analysis;
mod model;

pub mod io;

pub use model::bond::Bond;
pub use model::data::MolecularData;
pub use model::molecule::Molecule;
pub use model::structure::MolecularStructure;

pub use analysis::{
    Analysis, AnalysisConfig, DiscoveryStrategy, Synthesis, analyze, anomalies, candidate_bonds,
    identify_structures, select_bonds, select_representatives, synthesize,
};
