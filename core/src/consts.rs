/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 2000;
pub const REINDEX_BATCH_SIZE: u64 = 500;

/// Query parameters that are never interpreted as filters.
pub const RESERVED_PARAMS: [&str; 6] = ["sort", "page", "size", "query", "distinct", "eagerload"];

pub const APPLICATION_NAME: &str = "suivi";
