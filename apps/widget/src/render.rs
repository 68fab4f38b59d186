//! Text and JSON frames for the terminal host.

use btcwidget_market_data::{DisplayModel, Trend};

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Widest sparkline drawn, in characters.
const SPARK_WIDTH: usize = 42;

/// Block sparkline of a zero-floored series, averaged down to `width` columns.
pub fn sparkline(series: &[f64], width: usize) -> String {
    if series.is_empty() || width == 0 {
        return String::new();
    }

    let columns: Vec<f64> = if series.len() <= width {
        series.to_vec()
    } else {
        (0..width)
            .map(|col| {
                let start = col * series.len() / width;
                let end = ((col + 1) * series.len() / width).max(start + 1);
                let bucket = &series[start..end];
                bucket.iter().sum::<f64>() / bucket.len() as f64
            })
            .collect()
    };

    let peak = columns.iter().copied().fold(0.0_f64, f64::max);
    columns
        .iter()
        .map(|v| {
            if peak <= 0.0 {
                BLOCKS[0]
            } else {
                let level = ((v / peak) * (BLOCKS.len() - 1) as f64).round() as usize;
                BLOCKS[level.min(BLOCKS.len() - 1)]
            }
        })
        .collect()
}

pub fn render_text(model: &DisplayModel) -> String {
    let arrow = match model.trend {
        Trend::Up => '▲',
        Trend::Down => '▼',
    };

    let mut lines = vec![
        format!("{} ({})  {}", model.title, model.symbol, model.price),
        format!("{}  {} {}", model.caption, arrow, model.change),
    ];
    if let Some(chart) = &model.chart {
        let line = sparkline(chart, SPARK_WIDTH);
        if !line.is_empty() {
            lines.push(line);
        }
    }
    if let Some(note) = &model.status_note {
        lines.push(format!("[{}]", note));
    }
    lines.join("\n")
}

pub fn render_json(model: &DisplayModel) -> serde_json::Result<String> {
    serde_json::to_string(model)
}
