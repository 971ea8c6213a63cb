//! Optional-filter SELECT composition.
//!
//! Every read endpoint is one statement whose WHERE clause is the conjunction
//! of a few fixed predicates and zero or more optional equality filters taken
//! from the query string. Filter values are always bound as parameters.

use serde::{Deserialize, Deserializer};
use sqlx::{Any, QueryBuilder};
use std::fmt::Display;
use std::str::FromStr;

/// Query-string value meaning "no constraint" on enumerable filters.
pub const ALL_SENTINEL: &str = "All";

/// An optional equality filter.
///
/// Absent, blank, and `"All"` all deserialize to [`Filter::Any`]; anything else
/// must parse as `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    Any,
    Eq(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::Any
    }
}

impl<T> Filter<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Filter::Any => None,
            Filter::Eq(v) => Some(v),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Filter::Any)
    }
}

impl<T> FromStr for Filter<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_SENTINEL {
            return Ok(Filter::Any);
        }
        trimmed
            .parse::<T>()
            .map(Filter::Eq)
            .map_err(|e| format!("invalid filter value '{}': {}", trimmed, e))
    }
}

impl<'de, T> Deserialize<'de> for Filter<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(Filter::Any),
            Some(raw) => raw.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// A value bound into a composed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Int(i64),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Int(v)
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Text(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

enum Predicate {
    Fixed(&'static str),
    Equals(&'static str, BindValue),
}

/// Builder for a single filtered SELECT.
pub struct SelectStatement {
    select: &'static str,
    predicates: Vec<Predicate>,
    group_by: Option<&'static str>,
    order_by: Option<&'static str>,
    limit: Option<u32>,
}

impl SelectStatement {
    /// `select` is everything up to (not including) WHERE: columns, FROM and JOINs.
    pub fn new(select: &'static str) -> Self {
        Self {
            select,
            predicates: Vec::new(),
            group_by: None,
            order_by: None,
            limit: None,
        }
    }

    /// Predicate that always applies, written as literal SQL.
    pub fn require(mut self, predicate: &'static str) -> Self {
        self.predicates.push(Predicate::Fixed(predicate));
        self
    }

    /// Adds `column = ?` when the filter is present.
    pub fn filter<T>(mut self, column: &'static str, filter: &Filter<T>) -> Self
    where
        T: Clone + Into<BindValue>,
    {
        if let Filter::Eq(value) = filter {
            self.predicates
                .push(Predicate::Equals(column, value.clone().into()));
        }
        self
    }

    pub fn group_by(mut self, columns: &'static str) -> Self {
        self.group_by = Some(columns);
        self
    }

    pub fn order_by(mut self, columns: &'static str) -> Self {
        self.order_by = Some(columns);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of optional filters that made it into the statement.
    pub fn bound_filters(&self) -> usize {
        self.predicates
            .iter()
            .filter(|p| matches!(p, Predicate::Equals(..)))
            .count()
    }

    pub fn build(self) -> QueryBuilder<'static, Any> {
        let mut builder = QueryBuilder::<Any>::new(self.select);

        for (i, predicate) in self.predicates.into_iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            match predicate {
                Predicate::Fixed(sql) => {
                    builder.push(sql);
                }
                Predicate::Equals(column, value) => {
                    builder.push(column).push(" = ");
                    match value {
                        BindValue::Int(v) => builder.push_bind(v),
                        BindValue::Text(v) => builder.push_bind(v),
                    };
                }
            }
        }

        if let Some(group_by) = self.group_by {
            builder.push(" GROUP BY ").push(group_by);
        }
        if let Some(order_by) = self.order_by {
            builder.push(" ORDER BY ").push(order_by);
        }
        if let Some(limit) = self.limit {
            builder.push(" LIMIT ").push(limit);
        }

        builder
    }
}
