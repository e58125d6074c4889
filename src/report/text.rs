use crate::report::{ImageScore, SummaryData, format_f64_3, quality_band};

pub const TSV_HEADER: [&str; 7] = [
    "image",
    "decoded",
    "colorfulness",
    "saturation",
    "contrast",
    "edge_density",
    "score",
];

/// Rows sorted by image name so reruns diff cleanly.
pub fn render_scores_tsv(entries: &[ImageScore]) -> String {
    let mut out = TSV_HEADER.join("\t");
    out.push('\n');

    let mut order = (0..entries.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| match entries[a].name.cmp(&entries[b].name) {
        std::cmp::Ordering::Equal => a.cmp(&b),
        other => other,
    });

    for idx in order {
        let e = &entries[idx];
        let r = &e.report;
        let row = [
            e.name.clone(),
            if e.decoded { "1" } else { "0" }.to_string(),
            format_f64_3(r.colorfulness),
            format_f64_3(r.saturation),
            format_f64_3(r.contrast),
            format_f64_3(r.edge_density),
            format_f64_3(r.score),
        ];
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out
}

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Aesthetic Score Report\n");
    out.push_str("======================\n\n");
    out.push_str(&format!(
        "{} {} (simd: {})\n",
        data.tool, data.version, data.simd_backend
    ));
    out.push_str(&format!(
        "Images: {} scored, {} decoded, {} failed\n",
        data.n_images, data.n_decoded, data.n_failed
    ));
    out.push_str(&format!(
        "Reference frame: {0}x{0}\n",
        data.reference_side
    ));
    let w = &data.weights;
    out.push_str(&format!(
        "Weights: colorfulness={}, saturation={}, contrast={}, edge_density={}\n\n",
        w.colorfulness, w.saturation, w.contrast, w.edge_density
    ));

    out.push_str("Metric medians (p90)\n");
    for m in &data.metrics {
        out.push_str(&format!(
            "  {:<13} {} ({})\n",
            m.name,
            format_f64_3(m.median),
            format_f64_3(m.p90)
        ));
    }

    let median_score = data
        .metrics
        .iter()
        .find(|m| m.name == "score")
        .map(|m| m.median)
        .unwrap_or(0.0);
    out.push_str(&format!(
        "\nOverall: {}\n",
        if data.n_decoded == 0 {
            "no decodable images"
        } else {
            quality_band(median_score)
        }
    ));
    if let Some(best) = &data.best {
        out.push_str(&format!("Top image: {}\n", best));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
