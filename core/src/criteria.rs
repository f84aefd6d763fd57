/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Translation of `field.operator=value` query parameters into database
//! conditions.
//!
//! Every clause is validated against the [`Resource`] field list before a
//! query is built, so unknown fields and operators that do not fit the
//! field type are rejected instead of ignored. All clauses of a request
//! are combined with `AND`. The same [`Condition`] drives both the page
//! query and the total count.

use super::consts::{DEFAULT_PAGE_SIZE, RESERVED_PARAMS};
use super::input::clamp_page_size;
use super::resource::{Field, FieldKind, Resource, Target};
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Alias, Expr, Query, SelectStatement, SimpleExpr};
use sea_orm::{Condition, Order, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Unknown filter field `{0}`")]
    UnknownField(String),
    #[error("Unknown filter operator `{0}`")]
    UnknownOperator(String),
    #[error("Operator `{operator}` cannot be applied to `{field}`")]
    UnsupportedOperator { field: String, operator: String },
    #[error("Invalid value `{value}` for `{field}`")]
    InvalidValue { field: String, value: String },
    #[error("Cannot sort by `{0}`")]
    InvalidSort(String),
    #[error("Invalid value `{value}` for `{param}`")]
    InvalidPage { param: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    NotEquals,
    In,
    NotIn,
    Specified,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Contains,
    DoesNotContain,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "notEquals",
            Operator::In => "in",
            Operator::NotIn => "notIn",
            Operator::Specified => "specified",
            Operator::GreaterThan => "greaterThan",
            Operator::GreaterThanOrEqual => "greaterThanOrEqual",
            Operator::LessThan => "lessThan",
            Operator::LessThanOrEqual => "lessThanOrEqual",
            Operator::Contains => "contains",
            Operator::DoesNotContain => "doesNotContain",
        }
    }

    pub fn supports(self, kind: FieldKind) -> bool {
        match self {
            Operator::Equals
            | Operator::NotEquals
            | Operator::In
            | Operator::NotIn
            | Operator::Specified => true,
            Operator::GreaterThan
            | Operator::GreaterThanOrEqual
            | Operator::LessThan
            | Operator::LessThanOrEqual => kind.is_ordered(),
            Operator::Contains | Operator::DoesNotContain => kind == FieldKind::Text,
        }
    }
}

impl FromStr for Operator {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "equals" => Operator::Equals,
            "notEquals" => Operator::NotEquals,
            "in" => Operator::In,
            "notIn" => Operator::NotIn,
            "specified" => Operator::Specified,
            "greaterThan" => Operator::GreaterThan,
            "greaterThanOrEqual" => Operator::GreaterThanOrEqual,
            "lessThan" => Operator::LessThan,
            "lessThanOrEqual" => Operator::LessThanOrEqual,
            "contains" => Operator::Contains,
            "doesNotContain" => Operator::DoesNotContain,
            _ => return Err(CriteriaError::UnknownOperator(s.to_string())),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed comparison, ready to be applied to a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Equals(Value),
    NotEquals(Value),
    In(Vec<Value>),
    NotIn(Vec<Value>),
    Specified(bool),
    GreaterThan(Value),
    GreaterThanOrEqual(Value),
    LessThan(Value),
    LessThanOrEqual(Value),
    Contains(String),
    DoesNotContain(String),
}

impl Filter {
    fn parse(field_name: &str, kind: FieldKind, operator: Operator, raw: &str) -> Result<Self, CriteriaError> {
        let invalid = || CriteriaError::InvalidValue {
            field: field_name.to_string(),
            value: raw.to_string(),
        };
        let single = || parse_value(kind, raw).ok_or_else(invalid);
        let list = || {
            raw.split(',')
                .map(|item| parse_value(kind, item).ok_or_else(invalid))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(match operator {
            Operator::Equals => Filter::Equals(single()?),
            Operator::NotEquals => Filter::NotEquals(single()?),
            Operator::In => Filter::In(list()?),
            Operator::NotIn => Filter::NotIn(list()?),
            Operator::Specified => Filter::Specified(raw.trim().parse().map_err(|_| invalid())?),
            Operator::GreaterThan => Filter::GreaterThan(single()?),
            Operator::GreaterThanOrEqual => Filter::GreaterThanOrEqual(single()?),
            Operator::LessThan => Filter::LessThan(single()?),
            Operator::LessThanOrEqual => Filter::LessThanOrEqual(single()?),
            Operator::Contains => Filter::Contains(raw.to_string()),
            Operator::DoesNotContain => Filter::DoesNotContain(raw.to_string()),
        })
    }

    fn is_list_of_same_kind(&self, other: &Filter) -> bool {
        matches!(
            (self, other),
            (Filter::In(_), Filter::In(_)) | (Filter::NotIn(_), Filter::NotIn(_))
        )
    }

    /// Merges a repeated `in`/`notIn` parameter into this filter.
    fn extend(&mut self, other: Filter) {
        if let (Filter::In(values), Filter::In(more)) | (Filter::NotIn(values), Filter::NotIn(more)) =
            (self, other)
        {
            values.extend(more);
        }
    }

    /// Condition over a single expression, usually a column.
    fn condition(&self, target: SimpleExpr) -> Condition {
        let expr = Expr::expr(target.clone());
        let clause = match self {
            Filter::Equals(value) => expr.eq(value.clone()),
            Filter::NotEquals(value) => expr.ne(value.clone()),
            Filter::In(values) => expr.is_in(values.clone()),
            Filter::NotIn(values) => expr.is_not_in(values.clone()),
            Filter::Specified(true) => expr.is_not_null(),
            Filter::Specified(false) => expr.is_null(),
            Filter::GreaterThan(value) => expr.gt(value.clone()),
            Filter::GreaterThanOrEqual(value) => expr.gte(value.clone()),
            Filter::LessThan(value) => expr.lt(value.clone()),
            Filter::LessThanOrEqual(value) => expr.lte(value.clone()),
            Filter::Contains(needle) => like(target, "LIKE", needle),
            Filter::DoesNotContain(needle) => {
                return Condition::any()
                    .add(like(target, "NOT LIKE", needle))
                    .add(expr.is_null());
            }
        };

        Condition::all().add(clause)
    }
}

const LIKE_ESCAPE: char = '\\';

/// Case-insensitive substring match. Wildcards in the needle match literally.
fn like(target: SimpleExpr, operator: &str, needle: &str) -> SimpleExpr {
    Expr::cust_with_exprs(
        format!("UPPER($1) {operator} UPPER($2) ESCAPE '{LIKE_ESCAPE}'"),
        [
            target,
            Expr::val(format!("%{}%", escape_like(needle))).into(),
        ],
    )
}

fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn parse_value(kind: FieldKind, raw: &str) -> Option<Value> {
    let raw_trimmed = raw.trim();

    match kind {
        FieldKind::Text => Some(Value::from(raw.to_string())),
        FieldKind::Integer => raw_trimmed.parse::<i32>().ok().map(Value::from),
        FieldKind::Long => raw_trimmed.parse::<i64>().ok().map(Value::from),
        FieldKind::Double => raw_trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Value::from),
        FieldKind::Instant => DateTime::parse_from_rfc3339(raw_trimmed)
            .ok()
            .map(|instant| Value::from(instant.with_timezone(&Utc))),
    }
}

#[derive(Debug, Clone)]
pub struct Clause<C> {
    pub field: Field<C>,
    pub filter: Filter,
}

/// Conjunction of validated filter clauses for one entity type.
pub struct Criteria<R: Resource> {
    clauses: Vec<Clause<R::Column>>,
}

impl<R: Resource> Default for Criteria<R> {
    fn default() -> Self {
        Self { clauses: Vec::new() }
    }
}

impl<R: Resource> Criteria<R> {
    /// Reads every non-reserved `field.operator` parameter. Parameters
    /// without an operator suffix are not filters and are skipped.
    pub fn parse(params: &[(String, String)]) -> Result<Self, CriteriaError> {
        let fields = R::fields();
        let mut clauses: Vec<Clause<R::Column>> = Vec::new();

        for (key, raw) in params {
            if RESERVED_PARAMS.contains(&key.as_str()) {
                continue;
            }

            let Some((name, operator)) = key.rsplit_once('.') else {
                continue;
            };

            let field = fields
                .iter()
                .find(|field| field.name == name)
                .copied()
                .ok_or_else(|| CriteriaError::UnknownField(name.to_string()))?;
            let operator: Operator = operator.parse()?;

            if !operator.supports(field.kind) {
                return Err(CriteriaError::UnsupportedOperator {
                    field: field.name.to_string(),
                    operator: operator.to_string(),
                });
            }

            let filter = Filter::parse(field.name, field.kind, operator, raw)?;
            let repeated = clauses.iter().position(|clause| {
                clause.field.name == field.name && clause.filter.is_list_of_same_kind(&filter)
            });

            match repeated {
                Some(position) => clauses[position].filter.extend(filter),
                None => clauses.push(Clause { field, filter }),
            }
        }

        Ok(Self { clauses })
    }

    pub fn clauses(&self) -> &[Clause<R::Column>] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn condition(&self) -> Condition {
        self.clauses
            .iter()
            .fold(Condition::all(), |condition, clause| {
                condition.add(clause_condition::<R>(clause))
            })
    }
}

fn column_expr<R: Resource>(column: R::Column) -> SimpleExpr {
    Expr::col((R::default(), column)).into()
}

fn clause_condition<R: Resource>(clause: &Clause<R::Column>) -> Condition {
    match clause.field.target {
        Target::Column(column) => clause.filter.condition(column_expr::<R>(column)),
        Target::Reverse { table, foreign_key } => {
            let id = Expr::expr(column_expr::<R>(R::id_column()));

            let condition = match &clause.filter {
                Filter::Specified(true) => id.in_subquery(referencing(table, foreign_key, None)),
                Filter::Specified(false) => {
                    id.not_in_subquery(referencing(table, foreign_key, None))
                }
                filter => {
                    let child_id = Expr::col((Alias::new(table), Alias::new("id"))).into();
                    id.in_subquery(referencing(
                        table,
                        foreign_key,
                        Some(filter.condition(child_id)),
                    ))
                }
            };

            Condition::all().add(condition)
        }
    }
}

/// `SELECT foreign_key FROM table WHERE foreign_key IS NOT NULL [AND filter]`
fn referencing(table: &str, foreign_key: &str, filter: Option<Condition>) -> SelectStatement {
    let fk = (Alias::new(table), Alias::new(foreign_key));
    let mut condition = Condition::all().add(Expr::col(fk.clone()).is_not_null());

    if let Some(filter) = filter {
        condition = condition.add(filter);
    }

    Query::select()
        .column(fk)
        .from(Alias::new(table))
        .cond_where(condition)
        .to_owned()
}

/// `sort=field[,asc|desc]`, repeatable. Falls back to ascending id.
pub fn parse_sort<R: Resource>(params: &[(String, String)]) -> Result<Vec<(R::Column, Order)>, CriteriaError> {
    let mut sort = Vec::new();

    for (_, value) in params.iter().filter(|(key, _)| key == "sort") {
        let mut parts = value.split(',').map(str::trim);
        let name = parts.next().unwrap_or_default();
        let order = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => Order::Asc,
            Some("desc") => Order::Desc,
            Some(_) => return Err(CriteriaError::InvalidSort(value.clone())),
        };

        let column = R::field(name)
            .and_then(|field| field.column().copied())
            .ok_or_else(|| CriteriaError::InvalidSort(name.to_string()))?;

        sort.push((column, order));
    }

    if sort.is_empty() {
        sort.push((R::id_column(), Order::Asc));
    }

    Ok(sort)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn parse(params: &[(String, String)], max_size: u64) -> Result<Self, CriteriaError> {
        let read = |param: &str, default: u64| -> Result<u64, CriteriaError> {
            match params.iter().rev().find(|(key, _)| key == param) {
                Some((_, value)) => value.trim().parse().map_err(|_| CriteriaError::InvalidPage {
                    param: param.to_string(),
                    value: value.clone(),
                }),
                None => Ok(default),
            }
        };

        Ok(Self {
            page: read("page", 0)?,
            size: clamp_page_size(read("size", DEFAULT_PAGE_SIZE)?, max_size),
        })
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Everything a list request carries besides the entity type.
pub struct ListQuery<R: Resource> {
    pub criteria: Criteria<R>,
    pub sort: Vec<(R::Column, Order)>,
    pub page: PageRequest,
}

impl<R: Resource> ListQuery<R> {
    pub fn parse(params: &[(String, String)], max_size: u64) -> Result<Self, CriteriaError> {
        Ok(Self {
            criteria: Criteria::parse(params)?,
            sort: parse_sort::<R>(params)?,
            page: PageRequest::parse(params, max_size)?,
        })
    }
}
