//! Headless widget host.
//!
//! Plays the part of the platform timeline host: show a placeholder, ask for
//! a timeline, present its entry, sleep until the reload time, repeat. Ticks
//! are serialized; Ctrl-C abandons an in-flight refresh without committing it.

use btcwidget_market_data::{
    CoinGeckoProvider, DisplayModel, EntryStatus, RefreshPolicy, TimelineEntry,
    WidgetTimelineProvider,
};
use chrono::Utc;
use std::io::Write;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::config::{Config, OutputFormat};
use crate::render::{render_json, render_text};

pub async fn run(config: Config) -> anyhow::Result<()> {
    run_with_output(config, &mut std::io::stdout()).await
}

/// Host loop writing frames to `out`, one per line group.
pub async fn run_with_output<W: Write>(config: Config, out: &mut W) -> anyhow::Result<()> {
    let provider = CoinGeckoProvider::new(&config.feed)?;
    let policy = RefreshPolicy::from_std(config.feed.refresh_interval);
    let mut timelines = WidgetTimelineProvider::new(provider, policy);

    info!(
        "Widget host started: {} in {}, refresh every {}s",
        config.feed.asset.display_name,
        config.feed.asset.vs_currency,
        config.feed.refresh_interval.as_secs()
    );

    if !config.once {
        let placeholder = timelines.placeholder(Utc::now());
        present(
            &config,
            &DisplayModel::build(&placeholder, timelines.asset(), config.family),
            out,
        )?;
    }

    loop {
        let now = Utc::now();
        let timeline = tokio::select! {
            timeline = timelines.get_timeline(now) => timeline,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted during refresh, shutting down");
                return Ok(());
            }
        };

        if let Some(entry) = timeline.current() {
            log_entry(entry);
            present(
                &config,
                &DisplayModel::from_entry(entry, timelines.asset(), config.family),
                out,
            )?;
        }

        if config.once {
            return Ok(());
        }

        let reload_at = timeline.reload_at();
        let wait = (reload_at - Utc::now()).to_std().unwrap_or(Duration::ZERO);
        debug!("Next refresh at {} (in {}s)", reload_at, wait.as_secs());

        tokio::select! {
            _ = tokio::time::sleep(wait) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down");
                return Ok(());
            }
        }
    }
}

fn log_entry(entry: &TimelineEntry) {
    match entry.status {
        EntryStatus::Fresh => info!(
            price = entry.snapshot.current_price,
            change_7d = entry.snapshot.price_change_percent_7d,
            "Refreshed snapshot"
        ),
        EntryStatus::Stale(kind) => warn!(
            reason = kind.label(),
            observed_at = %entry.snapshot.observed_at,
            "Refresh failed, showing last known snapshot"
        ),
        EntryStatus::Unavailable(kind) => warn!(
            reason = kind.label(),
            "Refresh failed, no snapshot available yet"
        ),
    }
}

fn present<W: Write>(config: &Config, model: &DisplayModel, out: &mut W) -> anyhow::Result<()> {
    let frame = match config.output {
        OutputFormat::Text => render_text(model),
        OutputFormat::Json => render_json(model)?,
    };
    writeln!(out, "{}", frame)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use std::collections::HashMap;

    const MARKETS_PATH: &str = "/api/v3/coins/markets";

    const SAMPLE: &str = r#"[{
        "price_change_percentage_7d_in_currency": -3.2,
        "current_price": 61234.5,
        "sparkline_in_7d": {"price": [100, 95, 110]}
    }]"#;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}{}", addr, MARKETS_PATH)
    }

    fn once_config(endpoint: String, output: &str) -> Config {
        let vars: HashMap<&str, String> = HashMap::from([
            ("BTCWIDGET_ENDPOINT", endpoint),
            ("BTCWIDGET_ONCE", "1".to_string()),
            ("BTCWIDGET_TIMEOUT_MS", "1000".to_string()),
            ("BTCWIDGET_OUTPUT", output.to_string()),
        ]);
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[tokio::test]
    async fn once_renders_single_fresh_frame() {
        let router = Router::new().route(MARKETS_PATH, get(|| async { SAMPLE }));
        let endpoint = spawn_server(router).await;

        let mut out = Vec::new();
        run_with_output(once_config(endpoint, "text"), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Bitcoin (BTC)  $61,234.50\nThis week  ▼ -3.2%\n▃▁█\n");
    }

    #[tokio::test]
    async fn once_without_data_renders_unavailable_placeholder() {
        let router = Router::new().route(
            MARKETS_PATH,
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let endpoint = spawn_server(router).await;

        let mut out = Vec::new();
        run_with_output(once_config(endpoint, "text"), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Bitcoin (BTC)  $0.00\n"));
        assert!(text.ends_with("[no data yet (network error)]\n"));
        assert_eq!(text.matches("Bitcoin (BTC)").count(), 1);
    }

    #[tokio::test]
    async fn once_json_frame() {
        let router = Router::new().route(MARKETS_PATH, get(|| async { SAMPLE }));
        let endpoint = spawn_server(router).await;

        let mut out = Vec::new();
        run_with_output(once_config(endpoint, "json"), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let json: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(json["price"], "$61,234.50");
        assert_eq!(json["change"], "-3.2%");
        assert!(json.get("status_note").is_none());
    }
}
