/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Declarative description of an exposed entity.
//!
//! Filtering, validation, mirroring and routing are generic over
//! [`Resource`]; an entity only lists its fields here.

use sea_orm::{EntityTrait, ModelTrait, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Long,
    Double,
    Instant,
}

impl FieldKind {
    pub fn is_ordered(self) -> bool {
        self != FieldKind::Text
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Target<C> {
    Column(C),
    /// One-to-many back-reference: rows of `table` whose `foreign_key`
    /// points at this entity.
    Reverse {
        table: &'static str,
        foreign_key: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Field<C> {
    /// JSON and query-string name.
    pub name: &'static str,
    pub kind: FieldKind,
    pub target: Target<C>,
    pub required: bool,
}

impl<C> Field<C> {
    pub const fn required(name: &'static str, kind: FieldKind, column: C) -> Self {
        Self {
            name,
            kind,
            target: Target::Column(column),
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind, column: C) -> Self {
        Self {
            name,
            kind,
            target: Target::Column(column),
            required: false,
        }
    }

    /// Many-to-one relation stored as a nullable foreign key column.
    pub const fn relation(name: &'static str, column: C) -> Self {
        Self::optional(name, FieldKind::Long, column)
    }

    pub const fn reverse(name: &'static str, table: &'static str, foreign_key: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Long,
            target: Target::Reverse { table, foreign_key },
            required: false,
        }
    }

    pub fn column(&self) -> Option<&C> {
        match &self.target {
            Target::Column(column) => Some(column),
            Target::Reverse { .. } => None,
        }
    }
}

pub trait Resource: EntityTrait + Send + Sync {
    /// Path segment below `/api/`, e.g. `centres`.
    const PATH: &'static str;
    /// Singular name used for the search index and alert headers.
    const NAME: &'static str;
    const LABEL: &'static str;

    fn id_column() -> Self::Column;

    fn fields() -> Vec<Field<Self::Column>>;

    fn field(name: &str) -> Option<Field<Self::Column>> {
        Self::fields().into_iter().find(|field| field.name == name)
    }

    fn id_of(model: &Self::Model) -> Option<i64> {
        match model.get(Self::id_column()) {
            Value::BigInt(id) => id,
            Value::Int(id) => id.map(i64::from),
            _ => None,
        }
    }
}
