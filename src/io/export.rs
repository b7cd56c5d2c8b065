use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::ExpenseService;
use crate::domain::{ExpenseEntry, Summary};

/// Session snapshot for full export. Written out only, never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub entries: Vec<ExpenseEntry>,
    pub summary: Summary,
}

/// Exporter for dumping the current session to various formats
pub struct Exporter<'a> {
    service: &'a ExpenseService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a ExpenseService) -> Self {
        Self { service }
    }

    /// Export entries to CSV format
    pub fn export_entries_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["position", "id", "category", "amount", "recorded_at"])?;

        let mut count = 0;
        for (position, entry) in self.service.entries().iter().enumerate() {
            csv_writer.write_record(&[
                (position + 1).to_string(),
                entry.id.to_string(),
                entry.category.clone(),
                entry.amount.to_string(),
                entry.recorded_at.to_rfc3339(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the summary to CSV format as metric/value rows
    pub fn export_summary_csv<W: Write>(&self, writer: W) -> Result<Summary> {
        let summary = ExpenseService::compute_summary(self.service.entries());
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["metric", "category", "value"])?;
        csv_writer.write_record(["total", "", summary.total.to_string().as_str()])?;
        csv_writer.write_record(["average", "", summary.average.to_string().as_str()])?;
        csv_writer.write_record(["count", "", summary.count.to_string().as_str()])?;

        for (rank, entry) in summary.top.iter().enumerate() {
            csv_writer.write_record(&[
                format!("top_{}", rank + 1),
                entry.category.clone(),
                entry.amount.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(summary)
    }

    /// Export entries and summary as a JSON snapshot
    pub fn export_full_json<W: Write>(&self, mut writer: W) -> Result<SessionSnapshot> {
        let entries = self.service.entries().to_vec();
        let summary = ExpenseService::compute_summary(&entries);

        let snapshot = SessionSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            entries,
            summary,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }

    /// Export entries as a JSON array
    pub fn export_entries_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let entries = self.service.entries();
        let json = serde_json::to_string_pretty(entries)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(entries.len())
    }

    /// Export the summary as a JSON object
    pub fn export_summary_json<W: Write>(&self, mut writer: W) -> Result<Summary> {
        let summary = ExpenseService::compute_summary(self.service.entries());
        let json = serde_json::to_string_pretty(&summary)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(summary)
    }
}
