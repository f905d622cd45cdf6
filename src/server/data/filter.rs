//! Declarative query-string filters.
//!
//! Every resource kind declares a table of `FilterRule`s. Each rule reads one query
//! parameter and contributes a condition; rules whose parameter is absent (or carries a
//! value the rule does not understand) contribute nothing. All contributed conditions are
//! ANDed onto the list query.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, Select, Value};

use crate::server::model::auth::Caller;

/// How a `Match` rule parses its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Bool,
    Int,
}

/// Which id of the caller a `Caller` rule compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerScope {
    Account,
    Player,
}

/// One query parameter bound to one column.
#[derive(Debug, Clone)]
pub enum FilterRule<C> {
    /// `true` keeps rows where `column == value`, any other value excludes them.
    ///
    /// Exclusion keeps rows whose column is NULL.
    Toggle {
        param: &'static str,
        column: C,
        value: Value,
    },
    /// `true` keeps rows with a non-null column, `false` rows with a null one.
    Presence { param: &'static str, column: C },
    /// Keeps rows whose column equals the parsed parameter.
    Match {
        param: &'static str,
        column: C,
        kind: MatchKind,
    },
    /// Keeps rows owned by the authenticated caller whenever the parameter is present.
    Caller {
        param: &'static str,
        column: C,
        scope: CallerScope,
    },
}

impl<C: ColumnTrait> FilterRule<C> {
    /// Flag toggle, `param=true` keeps rows where the boolean column is set.
    pub fn flag(param: &'static str, column: C) -> Self {
        Self::Toggle {
            param,
            column,
            value: true.into(),
        }
    }

    /// Id toggle, `param=true` keeps rows pointing at `id`.
    pub fn id(param: &'static str, column: C, id: i32) -> Self {
        Self::Toggle {
            param,
            column,
            value: id.into(),
        }
    }

    pub fn presence(param: &'static str, column: C) -> Self {
        Self::Presence { param, column }
    }

    pub fn matching(param: &'static str, column: C, kind: MatchKind) -> Self {
        Self::Match {
            param,
            column,
            kind,
        }
    }

    pub fn caller(param: &'static str, column: C, scope: CallerScope) -> Self {
        Self::Caller {
            param,
            column,
            scope,
        }
    }

    /// Builds the condition this rule contributes, if any.
    ///
    /// # Arguments
    /// - `params` - Decoded query-string parameters
    /// - `caller` - Authenticated caller, `None` for anonymous reads
    ///
    /// # Returns
    /// - `Some(Condition)` - The rule applies
    /// - `None` - Parameter absent or not understood
    pub fn condition(
        &self,
        params: &HashMap<String, String>,
        caller: Option<&Caller>,
    ) -> Option<Condition> {
        match self {
            Self::Toggle {
                param,
                column,
                value,
            } => {
                let raw = params.get(*param)?;
                if raw == "true" {
                    Some(Condition::all().add(column.eq(value.clone())))
                } else {
                    Some(
                        Condition::any()
                            .add(column.ne(value.clone()))
                            .add(column.is_null()),
                    )
                }
            }
            Self::Presence { param, column } => match params.get(*param)?.as_str() {
                "true" => Some(Condition::all().add(column.is_not_null())),
                "false" => Some(Condition::all().add(column.is_null())),
                _ => None,
            },
            Self::Match {
                param,
                column,
                kind,
            } => {
                let raw = params.get(*param)?;
                let value: Value = match kind {
                    MatchKind::Bool => parse_bool(raw)?.into(),
                    MatchKind::Int => raw.trim().parse::<i32>().ok()?.into(),
                };
                Some(Condition::all().add(column.eq(value)))
            }
            Self::Caller {
                param,
                column,
                scope,
            } => {
                params.get(*param)?;
                let owner = caller.and_then(|caller| match scope {
                    CallerScope::Account => Some(caller.account_id()),
                    CallerScope::Player => caller.player_id(),
                });
                match owner {
                    Some(id) => Some(Condition::all().add(column.eq(id))),
                    // Nobody owns anything for an anonymous caller.
                    None => Some(
                        Condition::all()
                            .add(column.is_null())
                            .add(column.is_not_null()),
                    ),
                }
            }
        }
    }

    fn param(&self) -> &'static str {
        match self {
            Self::Toggle { param, .. }
            | Self::Presence { param, .. }
            | Self::Match { param, .. }
            | Self::Caller { param, .. } => param,
        }
    }
}

/// Query strings spell booleans as lowercase `true` and `false` only.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// ANDs every applicable rule onto `select`.
///
/// # Arguments
/// - `select` - Query to narrow
/// - `rules` - The kind's filter table
/// - `params` - Decoded query-string parameters, unknown names are ignored
/// - `caller` - Authenticated caller, if any
pub fn apply<E: EntityTrait>(
    select: Select<E>,
    rules: &[FilterRule<E::Column>],
    params: &HashMap<String, String>,
    caller: Option<&Caller>,
) -> Select<E> {
    rules.iter().fold(select, |select, rule| {
        match rule.condition(params, caller) {
            Some(condition) => {
                tracing::trace!(param = rule.param(), "applying filter");
                select.filter(condition)
            }
            None => select,
        }
    })
}
