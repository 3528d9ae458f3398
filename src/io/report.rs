use std::collections::BTreeMap;

use async_trait::async_trait;
use csv_async::AsyncWriter;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::compat::TokioAsyncWriteCompatExt;

use super::error::IoError;
use crate::domain::StationStats;
use crate::engine::RunSummary;

/// Writes a finished run to an output, stations sorted by name
#[async_trait]
pub trait Report: Send + Sync {
    async fn write<W>(&self, summary: &RunSummary, writer: W) -> Result<(), IoError>
    where
        W: AsyncWrite + Unpin + Send;
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// `{Station=min/mean/max, ...}`
    #[default]
    Text,
    /// `station,min,mean,max,count,sum` with a header row
    Csv,
    /// Pretty JSON document including line counters
    Json,
}

impl ReportFormat {
    /// Write the summary in this format
    pub async fn write<W>(self, summary: &RunSummary, writer: W) -> Result<(), IoError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        match self {
            ReportFormat::Text => TextReport.write(summary, writer).await,
            ReportFormat::Csv => CsvReport.write(summary, writer).await,
            ReportFormat::Json => JsonReport.write(summary, writer).await,
        }
    }
}

/// Mean rounded to one decimal, halves away from zero
fn rounded_mean(stats: &StationStats) -> f64 {
    (stats.mean() * 10.0).round() / 10.0
}

/// One-line `{Abha=-2/18.0/45, ...}` report
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport;

#[async_trait]
impl Report for TextReport {
    async fn write<W>(&self, summary: &RunSummary, mut writer: W) -> Result<(), IoError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let entries: Vec<String> = summary
            .table
            .sorted()
            .into_iter()
            .map(|(station, stats)| {
                format!(
                    "{}={}/{:.1}/{}",
                    station,
                    stats.min(),
                    rounded_mean(stats),
                    stats.max()
                )
            })
            .collect();

        let line = format!("{{{}}}\n", entries.join(", "));
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}

/// CSV report with a header row
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReport;

#[async_trait]
impl Report for CsvReport {
    async fn write<W>(&self, summary: &RunSummary, writer: W) -> Result<(), IoError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let mut csv_writer = AsyncWriter::from_writer(writer.compat_write());
        csv_writer
            .write_record(&["station", "min", "mean", "max", "count", "sum"])
            .await?;

        for (station, stats) in summary.table.sorted() {
            csv_writer
                .write_record(&[
                    station.to_string(),
                    stats.min().to_string(),
                    format!("{:.1}", rounded_mean(stats)),
                    stats.max().to_string(),
                    stats.count().to_string(),
                    stats.sum().to_string(),
                ])
                .await?;
        }

        csv_writer.flush().await?;
        Ok(())
    }
}

/// JSON report including the processed and rejected line counters
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport;

#[derive(Serialize)]
struct JsonDocument<'a> {
    lines_processed: u64,
    lines_rejected: u64,
    stations: BTreeMap<&'a str, JsonStation>,
}

#[derive(Serialize)]
struct JsonStation {
    min: i64,
    mean: f64,
    max: i64,
    count: u64,
    sum: i128,
}

#[async_trait]
impl Report for JsonReport {
    async fn write<W>(&self, summary: &RunSummary, mut writer: W) -> Result<(), IoError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let stations = summary
            .table
            .iter()
            .map(|(station, stats)| {
                (
                    station,
                    JsonStation {
                        min: stats.min(),
                        mean: rounded_mean(stats),
                        max: stats.max(),
                        count: stats.count(),
                        sum: stats.sum(),
                    },
                )
            })
            .collect();

        let document = JsonDocument {
            lines_processed: summary.lines_processed,
            lines_rejected: summary.lines_rejected,
            stations,
        };

        let mut bytes = serde_json::to_vec_pretty(&document)?;
        bytes.push(b'\n');
        writer.write_all(&bytes).await?;
        writer.flush().await?;
        Ok(())
    }
}
