// src/records.rs
// Boundary normalization. Server responses differ per page (budget centers
// carry `code`, project estimates carry the code in `title`, revenue
// estimates in `suffix`), so each source maps into CodeRow right after
// fetch and nothing below this module branches on record shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::CodeRow;

fn raw_value<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

// --- Budget centers ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCenterRecord {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_amount: Option<f64>,
}

impl BudgetCenterRecord {
    pub fn into_row(self) -> CodeRow {
        let raw = raw_value(&self);
        CodeRow {
            code: self.code,
            label: self.description.unwrap_or_default(),
            raw,
        }
    }
}

// --- Project budget estimates (title carries the code) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEstimateRecord {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub months: Option<Map<String, Value>>,
}

impl ProjectEstimateRecord {
    pub fn into_row(self) -> CodeRow {
        let raw = raw_value(&self);
        CodeRow {
            code: self.title,
            label: self.description.unwrap_or_default(),
            raw,
        }
    }
}

// --- Revenue estimates (suffix carries the code) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEstimateRecord {
    pub suffix: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub months: Option<Map<String, Value>>,
}

impl RevenueEstimateRecord {
    pub fn into_row(self) -> CodeRow {
        let raw = raw_value(&self);
        CodeRow {
            code: self.suffix,
            label: self.description.unwrap_or_default(),
            raw,
        }
    }
}

// --- Batch helpers, one per data source ---

pub fn budget_center_rows(records: Vec<BudgetCenterRecord>) -> Vec<CodeRow> {
    records.into_iter().map(BudgetCenterRecord::into_row).collect()
}

pub fn project_estimate_rows(records: Vec<ProjectEstimateRecord>) -> Vec<CodeRow> {
    records.into_iter().map(ProjectEstimateRecord::into_row).collect()
}

pub fn revenue_estimate_rows(records: Vec<RevenueEstimateRecord>) -> Vec<CodeRow> {
    records.into_iter().map(RevenueEstimateRecord::into_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn budget_center_maps_code_and_description() {
        let row = BudgetCenterRecord {
            code: "OB-12".to_string(),
            description: Some("هزینه‌های جاری".to_string()),
            last_amount: Some(1500.0),
        }
        .into_row();
        assert_eq!(row.code, "OB-12");
        assert_eq!(row.label, "هزینه‌های جاری");
        assert_eq!(row.raw["last_amount"], 1500.0);
    }

    #[test]
    fn estimate_title_and_revenue_suffix_become_the_code() {
        let estimate = ProjectEstimateRecord {
            title: "12.3".to_string(),
            description: None,
            months: None,
        }
        .into_row();
        assert_eq!(estimate.code, "12.3");
        assert_eq!(estimate.label, "");

        let revenue = RevenueEstimateRecord {
            suffix: "7.1".to_string(),
            description: Some("درآمد".to_string()),
            months: None,
        }
        .into_row();
        assert_eq!(revenue.code, "7.1");
        assert_eq!(revenue.raw["suffix"], "7.1");
    }

    #[test]
    fn raw_round_trips_the_source_record() {
        let rec = BudgetCenterRecord {
            code: "1".to_string(),
            description: None,
            last_amount: None,
        };
        let row = rec.clone().into_row();
        let back: BudgetCenterRecord = serde_json::from_value(row.raw).expect("raw deserializes");
        assert_eq!(back, rec);
    }
}
