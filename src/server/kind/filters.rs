//! Filter tables shared across kinds.

use sea_orm::ColumnTrait;

use crate::server::data::filter::FilterRule;

/// Query flags selecting one expansion each, by seeded expansion id.
pub const EXPANSION_FLAGS: [(&str, i32); 12] = [
    ("dragon_king_exp", 1),
    ("dung_beetle_knight_exp", 2),
    ("flower_knight_exp", 3),
    ("gorm_exp", 4),
    ("lion_god_exp", 5),
    ("lion_knight_exp", 6),
    ("lonely_tree_exp", 7),
    ("manhunter_exp", 8),
    ("slenderman_exp", 9),
    ("spidicules_exp", 10),
    ("sunstalker_exp", 11),
    ("gamblers_chest_exp", 12),
];

/// Query flags selecting one resource type each, by seeded type id.
pub const RESOURCE_TYPE_FLAGS: [(&str, i32); 8] = [
    ("basic", 1),
    ("bone", 2),
    ("hide", 3),
    ("organ", 4),
    ("scrap", 5),
    ("iron", 6),
    ("herb", 7),
    ("flower", 8),
];

/// The twelve expansion toggles plus `expansion` presence, over an `expansion_id` column.
pub fn expansion_rules<C: ColumnTrait>(column: C) -> Vec<FilterRule<C>> {
    let mut rules: Vec<FilterRule<C>> = EXPANSION_FLAGS
        .iter()
        .map(|&(param, id)| FilterRule::id(param, column, id))
        .collect();
    rules.push(FilterRule::presence("expansion", column));
    rules
}

pub fn resource_type_rules<C: ColumnTrait>(column: C) -> Vec<FilterRule<C>> {
    RESOURCE_TYPE_FLAGS
        .iter()
        .map(|&(param, id)| FilterRule::id(param, column, id))
        .collect()
}
