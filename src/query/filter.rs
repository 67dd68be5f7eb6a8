//! Typed predicates over a sequence table.
//!
//! Callers narrow a resolved assembly's sequences by role, unit, and
//! length. The predicate is an explicit structure evaluated directly
//! against in-memory entries - there is no query-string assembly, so a
//! role like `no_such_role` simply matches nothing instead of being a
//! syntax hazard. Categories combine with AND; the values within a
//! category with OR. Filtering never reorders: output keeps the sequence
//! table's insertion order.

use std::str::FromStr;

use crate::core::sequence::SequenceEntry;
use crate::query::QueryError;

/// Comparison operator of a length predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

/// A length comparison, parsed from `<op><integer>` (e.g., `">133137821"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    pub op: LengthOp,
    pub value: u64,
}

impl LengthFilter {
    #[must_use]
    pub fn matches(&self, length: u64) -> bool {
        match self.op {
            LengthOp::Lt => length < self.value,
            LengthOp::Le => length <= self.value,
            LengthOp::Gt => length > self.value,
            LengthOp::Ge => length >= self.value,
            LengthOp::Eq => length == self.value,
        }
    }
}

impl FromStr for LengthFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expression = s.trim();
        let invalid = || QueryError::InvalidLengthFilter {
            expression: s.to_string(),
        };

        // Two-character operators must be tried first
        let (op, rest) = if let Some(rest) = expression.strip_prefix("<=") {
            (LengthOp::Le, rest)
        } else if let Some(rest) = expression.strip_prefix(">=") {
            (LengthOp::Ge, rest)
        } else if let Some(rest) = expression.strip_prefix("==") {
            (LengthOp::Eq, rest)
        } else if let Some(rest) = expression.strip_prefix('<') {
            (LengthOp::Lt, rest)
        } else if let Some(rest) = expression.strip_prefix('>') {
            (LengthOp::Gt, rest)
        } else {
            return Err(invalid());
        };

        let value = rest.trim().parse::<u64>().map_err(|_| invalid())?;
        Ok(Self { op, value })
    }
}

/// Role/unit/length predicates over one assembly's sequence table.
///
/// `None` in a category means "no constraint"; the default filter passes
/// every entry.
#[derive(Debug, Clone, Default)]
pub struct SequenceFilter {
    /// Roles to keep (OR within the set), e.g. `["assembled"]`
    pub roles: Option<Vec<String>>,
    /// Units to keep (OR within the set), e.g. `["non-nuclear"]`
    pub units: Option<Vec<String>>,
    /// Length comparison applied to every entry
    pub length: Option<LengthFilter>,
}

impl SequenceFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.units = Some(units.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: LengthFilter) -> Self {
        self.length = Some(length);
        self
    }

    /// Whether one entry passes all supplied predicates
    #[must_use]
    pub fn matches(&self, entry: &SequenceEntry) -> bool {
        if let Some(roles) = &self.roles {
            if !roles.iter().any(|role| *role == entry.role) {
                return false;
            }
        }
        if let Some(units) = &self.units {
            if !units.iter().any(|unit| *unit == entry.unit) {
                return false;
            }
        }
        if let Some(length) = &self.length {
            if !length.matches(entry.length) {
                return false;
            }
        }
        true
    }

    /// Filter a sequence table, preserving its order.
    ///
    /// Zero matches is an empty Vec, never an error.
    #[must_use]
    pub fn apply<'a>(&self, sequences: &'a [SequenceEntry]) -> Vec<&'a SequenceEntry> {
        sequences.iter().filter(|entry| self.matches(entry)).collect()
    }
}
