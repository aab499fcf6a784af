//! Rotational autotile rules for tile maps.
//!
//! An autotile rule pairs a 3×3 neighbor-match pattern ([`RuleMatrix`]) with
//! the tileset position of the sprite to draw when the pattern matches
//! ([`TilesetPosition`]). Tilesets usually lay out the rotated variants of a
//! form as a 2×2 block, so a form is authored once and expanded into its
//! variants with [`get_rule_group`]. Whole rule libraries load from JSON
//! definition files via [`load_rules`].
//!
//! This crate has no engine dependency. The rule-matching engine that
//! compares the patterns against live neighbor tiles, and the renderer that
//! consumes the display positions, live with the caller.

mod config;
mod group;
mod rotate;
mod types;

pub use config::{
    build_rules, load_forms, load_rule_definitions, load_rules, parse_forms,
    parse_rule_definitions, FormLibrary, LoneRuleDef, RuleDefinitions, RuleGroupDef,
};
pub use group::get_rule_group;
pub use rotate::Rotation;
pub use types::{AutotileRule, CellRule, InvalidCellCode, RuleMatrix, TilesetPosition};

use thiserror::Error;

/// Errors from rule group expansion and rule library loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutotileError {
    /// An argument was outside its documented range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A definition file could not be read.
    #[error("IO error: {0}")]
    IoError(String),
    /// A definition file held malformed JSON or an out-of-range cell code.
    #[error("parse error: {0}")]
    ParseError(String),
    /// A rule definition named a form missing from the form library.
    #[error("unknown form: {0}")]
    UnknownForm(String),
}
