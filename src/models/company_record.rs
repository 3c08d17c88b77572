use std::collections::HashMap;

use csv::StringRecord;

/// A single row of the company dataset.
///
/// Fields are accessed by column name. The classifier only ever reads
/// `description`, `category`, `niche`, and `business_tags`; any other
/// columns ride along untouched and are written back verbatim by the batch
/// layer. Records are read-only inputs to classification.
#[derive(Debug, Clone, Default)]
pub struct CompanyRecord {
    fields: HashMap<String, String>,
}

impl CompanyRecord {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Builds a record from a csv header row and the matching data row.
    /// Cells beyond the header count are dropped; missing trailing cells
    /// leave their fields absent.
    pub fn from_csv_row(headers: &StringRecord, row: &StringRecord) -> Self {
        let mut fields = HashMap::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            fields.insert(header.to_string(), value.to_string());
        }
        Self { fields }
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|value| value.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    pub fn category(&self) -> Option<&str> {
        self.get("category")
    }

    pub fn niche(&self) -> Option<&str> {
        self.get("niche")
    }

    /// The raw, still-serialized `business_tags` value.
    pub fn business_tags(&self) -> Option<&str> {
        self.get("business_tags")
    }
}
