use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::profile::{MetricWeights, ScoringProfile};
use crate::model::scores::ScoreReport;

pub mod json;
pub mod text;

/// One scored input as it appears in the reports.
#[derive(Debug, Clone, Serialize)]
pub struct ImageScore {
    pub name: String,
    pub decoded: bool,
    #[serde(flatten)]
    pub report: ScoreReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedStats {
    pub name: &'static str,
    pub median: f64,
    pub p90: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub simd_backend: String,
    pub n_images: usize,
    pub n_decoded: usize,
    pub n_failed: usize,
    pub weights: MetricWeights,
    pub reference_side: u32,
    pub metrics: Vec<NamedStats>,
    pub best: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn quality_band(score: f64) -> &'static str {
    if score >= 60.0 {
        "vivid"
    } else if score >= 35.0 {
        "balanced"
    } else if score >= 15.0 {
        "muted"
    } else {
        "flat"
    }
}

/// Statistics cover decoded images only; failed inputs are counted separately.
pub fn build_summary(entries: &[ImageScore], profile: &ScoringProfile) -> SummaryData {
    let decoded: Vec<&ImageScore> = entries.iter().filter(|e| e.decoded).collect();
    let column = |f: fn(&ScoreReport) -> f64| -> Vec<f64> {
        decoded.iter().map(|e| f(&e.report)).collect()
    };
    let stats = |name: &'static str, values: Vec<f64>| NamedStats {
        name,
        median: median(&values),
        p90: p90(&values),
    };
    let metrics = vec![
        stats("colorfulness", column(|r| r.colorfulness)),
        stats("saturation", column(|r| r.saturation)),
        stats("contrast", column(|r| r.contrast)),
        stats("edge_density", column(|r| r.edge_density)),
        stats("score", column(|r| r.score)),
    ];
    let best = decoded
        .iter()
        .max_by(|a, b| {
            a.report
                .score
                .total_cmp(&b.report.score)
                .then_with(|| b.name.cmp(&a.name))
        })
        .map(|e| e.name.clone());

    SummaryData {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        simd_backend: crate::simd::backend_name().to_string(),
        n_images: entries.len(),
        n_decoded: decoded.len(),
        n_failed: entries.len() - decoded.len(),
        weights: profile.weights,
        reference_side: profile.reference_side,
        metrics,
        best,
    }
}

pub fn write_reports(
    entries: &[ImageScore],
    profile: &ScoringProfile,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_text(&out_dir.join("scores.tsv"), &text::render_scores_tsv(entries))?;
    write_text(
        &out_dir.join("scores.jsonl"),
        &json::render_scores_jsonl(entries)?,
    )?;

    let summary = build_summary(entries, profile);
    write_text(
        &out_dir.join("summary.json"),
        &json::render_summary_json(&summary)?,
    )?;
    write_text(
        &out_dir.join("report.txt"),
        &text::render_report_text(&summary),
    )?;

    tracing::info!(dir = %out_dir.display(), images = entries.len(), "reports written");
    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
