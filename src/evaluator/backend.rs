//! Remote store rows and query backends

use crate::error::{FarmerSearchError, Result};
use crate::evaluator::{Clause, Column, Op, RemoteQuery, Value};
use crate::records::{FarmerRecord, Gender};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Executes a [`RemoteQuery`] against a backing store
///
/// Implementations return every matching row in table order, or fail as a
/// whole. An empty vector always means "no matches".
#[async_trait]
pub trait QueryBackend: Send + Sync {
    async fn execute(&self, query: &RemoteQuery) -> Result<Vec<FarmerRow>>;
}

/// Row identifier, numeric or textual depending on the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(id) => write!(f, "{}", id),
            RowId::Text(id) => f.write_str(id),
        }
    }
}

/// A farmer row as stored remotely; optional columns may be null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerRow {
    pub id: RowId,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub gender: Gender,
    pub age: u32,
    pub district: String,
    pub state: String,
    pub religion: Option<String>,
    pub caste_category: Option<String>,
    pub marital_status: Option<String>,
    pub land_owned: f64,
    pub crop_types: Option<Vec<String>>,
    pub crops: Option<Vec<String>>,
    pub irrigation_facility: bool,
    pub associated_with_fpo: bool,
    pub fpo_name: Option<String>,
    pub source: String,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl FarmerRow {
    /// Convert into a record; null text becomes empty, null lists become empty
    pub fn into_record(self) -> FarmerRecord {
        let name = if self.last_name.is_empty() {
            self.first_name
        } else {
            format!("{} {}", self.first_name, self.last_name)
        };
        FarmerRecord {
            id: self.id.to_string(),
            name,
            contact: self.contact,
            gender: self.gender,
            age: self.age,
            district: self.district,
            state: self.state,
            religion: self.religion.unwrap_or_default(),
            caste_category: self.caste_category.unwrap_or_default(),
            marital_status: self.marital_status.unwrap_or_default(),
            land_owned: self.land_owned,
            crop_types: self.crop_types.unwrap_or_default(),
            crops: self.crops.unwrap_or_default(),
            irrigation_facility: self.irrigation_facility,
            associated_with_fpo: self.associated_with_fpo,
            fpo_name: self.fpo_name,
            source: self.source,
        }
    }

    /// Store a record as a row, splitting the name at the first space
    ///
    /// A name whose only space is trailing stays whole in `first_name`, so
    /// `into_record` always gives the name back unchanged.
    pub fn from_record(record: &FarmerRecord) -> Self {
        let (first_name, last_name) = match record.name.split_once(' ') {
            Some((first, last)) if !last.is_empty() => (first, last),
            _ => (record.name.as_str(), ""),
        };
        Self {
            id: RowId::Text(record.id.clone()),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            contact: record.contact.clone(),
            gender: record.gender,
            age: record.age,
            district: record.district.clone(),
            state: record.state.clone(),
            religion: non_empty(&record.religion),
            caste_category: non_empty(&record.caste_category),
            marital_status: non_empty(&record.marital_status),
            land_owned: record.land_owned,
            crop_types: Some(record.crop_types.clone()),
            crops: Some(record.crops.clone()),
            irrigation_facility: record.irrigation_facility,
            associated_with_fpo: record.associated_with_fpo,
            fpo_name: record.fpo_name.clone(),
            source: record.source.clone(),
        }
    }

    /// Column value, `None` for SQL null
    pub fn column(&self, column: Column) -> Option<Value> {
        let text = |s: &str| Some(Value::Text(s.to_string()));
        match column {
            Column::FirstName => text(&self.first_name),
            Column::LastName => text(&self.last_name),
            Column::Gender => text(self.gender.as_str()),
            Column::Age => Some(Value::Number(f64::from(self.age))),
            Column::District => text(&self.district),
            Column::State => text(&self.state),
            Column::Religion => self.religion.as_deref().and_then(text),
            Column::CasteCategory => self.caste_category.as_deref().and_then(text),
            Column::MaritalStatus => self.marital_status.as_deref().and_then(text),
            Column::LandOwned => Some(Value::Number(self.land_owned)),
            Column::CropTypes => self.crop_types.clone().map(Value::TextList),
            Column::Crops => self.crops.clone().map(Value::TextList),
            Column::IrrigationFacility => Some(Value::Bool(self.irrigation_facility)),
            Column::AssociatedWithFpo => Some(Value::Bool(self.associated_with_fpo)),
            Column::FpoName => self.fpo_name.as_deref().and_then(text),
            Column::Source => text(&self.source),
        }
    }
}

impl Clause {
    /// Evaluate against a row with SQL semantics: null never satisfies a clause
    pub fn matches(&self, row: &FarmerRow) -> bool {
        let Some(actual) = row.column(self.column) else {
            return false;
        };

        match (self.op, &actual, &self.value) {
            (Op::In, Value::Text(v), Value::TextList(list)) => list.contains(v),
            (Op::Eq, Value::Text(a), Value::Text(b)) => a == b,
            (Op::Eq, Value::Bool(a), Value::Bool(b)) => a == b,
            (Op::Eq, Value::Number(a), Value::Number(b)) => a == b,
            (Op::Gte, Value::Number(a), Value::Number(b)) => a >= b,
            (Op::Lte, Value::Number(a), Value::Number(b)) => a <= b,
            (Op::Overlaps, Value::TextList(a), Value::TextList(b)) => a.iter().any(|v| b.contains(v)),
            (Op::Like, Value::Text(a), Value::Text(pattern)) => like(a, pattern),

            // Type mismatches are not coerced
            _ => false,
        }
    }
}

/// SQL LIKE: `%` matches any run, `_` exactly one character
fn like(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    // reachable[j]: pattern[..i] matches text[..j]
    let mut reachable = vec![false; text.len() + 1];
    reachable[0] = true;
    for p in &pattern {
        let mut next = vec![false; text.len() + 1];
        match p {
            '%' => {
                let mut any = false;
                for j in 0..=text.len() {
                    any |= reachable[j];
                    next[j] = any;
                }
            }
            _ => {
                for j in 1..=text.len() {
                    next[j] = reachable[j - 1] && (*p == '_' || *p == text[j - 1]);
                }
            }
        }
        reachable = next;
    }
    reachable[text.len()]
}

/// A backend holding rows in memory, evaluating clauses itself
///
/// Stands in for the remote store in tests and offline deployments.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    table: String,
    rows: Vec<FarmerRow>,
}

impl MemoryBackend {
    pub fn new(table: impl Into<String>, rows: Vec<FarmerRow>) -> Self {
        Self {
            table: table.into(),
            rows,
        }
    }

    pub fn from_records(table: impl Into<String>, records: &[FarmerRecord]) -> Self {
        Self::new(table, records.iter().map(FarmerRow::from_record).collect())
    }

    /// Load rows from a JSON array as returned by the REST endpoint
    pub fn from_json(table: impl Into<String>, json: &str) -> Result<Self> {
        let rows: Vec<FarmerRow> = serde_json::from_str(json)?;
        Ok(Self::new(table, rows))
    }

    pub fn rows(&self) -> &[FarmerRow] {
        &self.rows
    }
}

#[async_trait]
impl QueryBackend for MemoryBackend {
    async fn execute(&self, query: &RemoteQuery) -> Result<Vec<FarmerRow>> {
        if query.table != self.table {
            return Err(FarmerSearchError::FetchFailed(format!(
                "relation \"{}\" does not exist",
                query.table
            )));
        }

        Ok(self
            .rows
            .iter()
            .filter(|row| query.clauses.iter().all(|clause| clause.matches(row)))
            .cloned()
            .collect())
    }
}
