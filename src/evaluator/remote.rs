//! Translation of filters into remote store queries
//!
//! Clauses follow the PostgREST operator set (`in`, `eq`, `gte`, `lte`,
//! `ov`, `like`) so a query renders directly as a request query string.

use crate::filter::{bounded, present, Filter};
use smallvec::SmallVec;
use std::fmt;

/// Columns of the farmer table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FirstName,
    LastName,
    Gender,
    Age,
    District,
    State,
    Religion,
    CasteCategory,
    MaritalStatus,
    LandOwned,
    CropTypes,
    Crops,
    IrrigationFacility,
    AssociatedWithFpo,
    FpoName,
    Source,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::FirstName => "first_name",
            Column::LastName => "last_name",
            Column::Gender => "gender",
            Column::Age => "age",
            Column::District => "district",
            Column::State => "state",
            Column::Religion => "religion",
            Column::CasteCategory => "caste_category",
            Column::MaritalStatus => "marital_status",
            Column::LandOwned => "land_owned",
            Column::CropTypes => "crop_types",
            Column::Crops => "crops",
            Column::IrrigationFacility => "irrigation_facility",
            Column::AssociatedWithFpo => "associated_with_fpo",
            Column::FpoName => "fpo_name",
            Column::Source => "source",
        }
    }
}

/// Clause operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Column value is one of a list
    In,
    /// Equal
    Eq,
    /// Greater than or equal
    Gte,
    /// Less than or equal
    Lte,
    /// Array column shares at least one element with a list
    Overlaps,
    /// Pattern match, `%` for any run and `_` for one character
    Like,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::In => "in",
            Op::Eq => "eq",
            Op::Gte => "gte",
            Op::Lte => "lte",
            Op::Overlaps => "ov",
            Op::Like => "like",
        }
    }
}

/// Clause operand
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Number(f64),
    TextList(Vec<String>),
}

/// One `column op value` condition; a query is the conjunction of its clauses
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub column: Column,
    pub op: Op,
    pub value: Value,
}

/// A select over one table with conjunctive clauses
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteQuery {
    pub table: String,
    pub clauses: SmallVec<[Clause; 8]>,
}

impl RemoteQuery {
    /// Select every row of `table`
    pub fn select_all(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            clauses: SmallVec::new(),
        }
    }

    fn push(mut self, column: Column, op: Op, value: Value) -> Self {
        self.clauses.push(Clause { column, op, value });
        self
    }

    pub fn in_list(self, column: Column, values: &[String]) -> Self {
        self.push(column, Op::In, Value::TextList(values.to_vec()))
    }

    pub fn eq(self, column: Column, value: Value) -> Self {
        self.push(column, Op::Eq, value)
    }

    pub fn gte(self, column: Column, value: f64) -> Self {
        self.push(column, Op::Gte, Value::Number(value))
    }

    pub fn lte(self, column: Column, value: f64) -> Self {
        self.push(column, Op::Lte, Value::Number(value))
    }

    pub fn overlaps(self, column: Column, values: &[String]) -> Self {
        self.push(column, Op::Overlaps, Value::TextList(values.to_vec()))
    }

    pub fn like(self, column: Column, pattern: &str) -> Self {
        self.push(column, Op::Like, Value::Text(pattern.to_string()))
    }

    /// PostgREST query string, e.g. `select=*&district=in.("Nagpur")&age=gte.18`
    pub fn to_query_string(&self) -> String {
        let mut out = String::from("select=*");
        for clause in &self.clauses {
            out.push('&');
            out.push_str(&clause.to_string());
        }
        out
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}.", self.column.as_str(), self.op.as_str())?;
        match (&self.op, &self.value) {
            (Op::In, Value::TextList(values)) => write!(f, "({})", quoted(values)),
            (Op::Overlaps, Value::TextList(values)) => write!(f, "{{{}}}", quoted(values)),
            (Op::Like, Value::Text(pattern)) => f.write_str(&pattern.replace('%', "*")),
            (_, value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::TextList(values) => write!(f, "({})", quoted(values)),
        }
    }
}

fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the remote query equivalent to in-memory [`apply`](crate::evaluator::apply)
///
/// Every field the in-memory predicate checks gets exactly one clause per
/// bound, so the two strategies select the same rows.
pub fn translate(filter: &Filter, table: &str) -> RemoteQuery {
    let mut query = RemoteQuery::select_all(table);

    if let Some(demo) = &filter.demographics {
        if !demo.district.is_empty() {
            query = query.in_list(Column::District, &demo.district);
        }
        if !demo.state.is_empty() {
            query = query.in_list(Column::State, &demo.state);
        }
        if let Some(gender) = present(&demo.gender) {
            query = query.eq(Column::Gender, Value::Text(gender.to_string()));
        }
        if let Some(religion) = present(&demo.religion) {
            query = query.eq(Column::Religion, Value::Text(religion.to_string()));
        }
        if let Some(caste) = present(&demo.caste_category) {
            query = query.eq(Column::CasteCategory, Value::Text(caste.to_string()));
        }
        if let Some(status) = present(&demo.marital_status) {
            query = query.eq(Column::MaritalStatus, Value::Text(status.to_string()));
        }
        if let Some(age) = bounded(&demo.age) {
            if let Some(min) = age.min {
                query = query.gte(Column::Age, f64::from(min));
            }
            if let Some(max) = age.max {
                query = query.lte(Column::Age, f64::from(max));
            }
        }
    }

    if let Some(crop) = &filter.crop_data {
        if let Some(irrigation) = crop.irrigation_facility {
            query = query.eq(Column::IrrigationFacility, Value::Bool(irrigation));
        }
        if let Some(land) = bounded(&crop.land_owned) {
            if let Some(min) = land.min {
                query = query.gte(Column::LandOwned, min);
            }
            if let Some(max) = land.max {
                query = query.lte(Column::LandOwned, max);
            }
        }
        if !crop.crop_types.is_empty() {
            query = query.overlaps(Column::CropTypes, &crop.crop_types);
        }
        if !crop.crops.is_empty() {
            query = query.overlaps(Column::Crops, &crop.crops);
        }
    }

    if let Some(org) = &filter.organization {
        if let Some(associated) = org.associated_with_fpo {
            query = query.eq(Column::AssociatedWithFpo, Value::Bool(associated));
        }
        if let Some(name) = present(&org.fpo_name) {
            query = query.eq(Column::FpoName, Value::Text(name.to_string()));
        }
    }

    if let Some(name) = filter.source.as_ref().and_then(|s| present(&s.name)) {
        query = query.eq(Column::Source, Value::Text(name.to_string()));
    }

    query
}
