//! JSON rule libraries: form files and rule definition files.
//!
//! A *forms* file maps form names to 3×3 cell-code matrices:
//!
//! ```json
//! { "outer_corner": [[0, 0, 2], [0, 1, 1], [2, 1, 3]] }
//! ```
//!
//! A *rules* file lists which forms to place where in the tileset, either as
//! rotational groups or as lone rules:
//!
//! ```json
//! {
//!     "rule_groups": [
//!         { "type": "outer_corner", "position": [1, 0] },
//!         { "type": "straight_thin", "position": [11, 2], "amount": 2 }
//!     ],
//!     "lone_rules": [
//!         { "type": "cross", "position": [0, 2] }
//!     ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{get_rule_group, AutotileError, AutotileRule, RuleMatrix, TilesetPosition};

/// Named 3×3 matrices, as stored in a forms JSON file.
pub type FormLibrary = HashMap<String, RuleMatrix>;

// ─── Definitions ─────────────────────────────────────────────────────────────

/// Contents of a rules JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleDefinitions {
    /// Forms expanded into rotational variants, in order.
    #[serde(default)]
    pub rule_groups: Vec<RuleGroupDef>,
    /// Forms used as-is, appended after all groups.
    #[serde(default)]
    pub lone_rules: Vec<LoneRuleDef>,
}

/// One rule-group entry: a form expanded into its rotational variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleGroupDef {
    /// Form name, resolved against the [`FormLibrary`].
    #[serde(rename = "type")]
    pub form: String,
    /// Top-left cell of the 2×2 tileset block holding the variants.
    pub position: TilesetPosition,
    /// Number of rotational variants to generate. Default: 4.
    #[serde(default = "default_amount")]
    pub amount: u32,
}

fn default_amount() -> u32 {
    4
}

/// One lone-rule entry: a form used as-is, without rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoneRuleDef {
    /// Form name, resolved against the [`FormLibrary`].
    #[serde(rename = "type")]
    pub form: String,
    pub position: TilesetPosition,
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// Load a form library from a JSON file.
pub fn load_forms(path: &Path) -> Result<FormLibrary, AutotileError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| AutotileError::IoError(e.to_string()))?;

    parse_forms(&content)
}

/// Parse a form library from a JSON string.
pub fn parse_forms(json: &str) -> Result<FormLibrary, AutotileError> {
    serde_json::from_str(json).map_err(|e| AutotileError::ParseError(e.to_string()))
}

/// Load rule definitions from a JSON file.
pub fn load_rule_definitions(path: &Path) -> Result<RuleDefinitions, AutotileError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| AutotileError::IoError(e.to_string()))?;

    parse_rule_definitions(&content)
}

/// Parse rule definitions from a JSON string.
pub fn parse_rule_definitions(json: &str) -> Result<RuleDefinitions, AutotileError> {
    serde_json::from_str(json).map_err(|e| AutotileError::ParseError(e.to_string()))
}

// ─── Expansion ───────────────────────────────────────────────────────────────

/// Expand `defs` against `forms` into a flat rule list.
///
/// Every group's variants come first, in definition order, followed by the
/// lone rules. A definition naming a form absent from the library fails with
/// [`AutotileError::UnknownForm`]; nothing is silently skipped.
pub fn build_rules(
    forms: &FormLibrary,
    defs: &RuleDefinitions,
) -> Result<Vec<AutotileRule>, AutotileError> {
    let mut rules = Vec::new();

    for group in &defs.rule_groups {
        let matrix = lookup_form(forms, &group.form)?;
        rules.extend(get_rule_group(matrix, group.position, group.amount)?);
    }

    for lone in &defs.lone_rules {
        let matrix = lookup_form(forms, &lone.form)?;
        rules.push(AutotileRule::new(matrix, lone.position));
    }

    Ok(rules)
}

/// Load a forms file and a rules file and expand them into a rule list.
pub fn load_rules(
    forms_path: &Path,
    rules_path: &Path,
) -> Result<Vec<AutotileRule>, AutotileError> {
    let forms = load_forms(forms_path)?;
    let defs = load_rule_definitions(rules_path)?;

    build_rules(&forms, &defs)
}

fn lookup_form(forms: &FormLibrary, name: &str) -> Result<RuleMatrix, AutotileError> {
    forms
        .get(name)
        .copied()
        .ok_or_else(|| AutotileError::UnknownForm(name.to_string()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
