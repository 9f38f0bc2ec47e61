//! Server-rendered dashboard page.
//!
//! One tile per quote record. The region tags the tile border color and the
//! trend tags the price color. The page reloads itself on the refresh
//! interval, and a small script re-polls `/data` with the same query string
//! in between and patches the tiles in place.

use std::fmt::Write;
use std::time::Duration;

use tickerboard_market_data::{QuoteBoard, QuoteRecord, Region, RegionFilter};

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; padding: 40px; background-color: #f4f6f8; }
    h1 { text-align: center; color: #2c3e50; }
    form { display: flex; justify-content: center; gap: 10px; margin-top: 20px; }
    form input, form select, form button { font-size: 14px; padding: 6px 10px; }
    .container { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 20px; margin-top: 30px; }
    .tile { background-color: #ffffff; padding: 20px; border-radius: 12px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05); transition: transform 0.2s ease; border-left: 6px solid #ccc; }
    .tile:hover { transform: translateY(-4px); }
    .asx { border-left-color: #3498db; }
    .us { border-left-color: #2ecc71; }
    .title { font-size: 18px; color: #333333; margin-bottom: 8px; }
    .symbol { font-size: 14px; color: #7f8c8d; }
    .price { font-size: 22px; font-weight: bold; margin-top: 10px; }
    .up { color: #27ae60; }
    .down { color: #e74c3c; }
    .flat { color: #888888; }
    .percent { font-size: 14px; margin-left: 6px; }
    .empty { text-align: center; color: #7f8c8d; margin-top: 30px; }
"#;

const SCRIPT: &str = r#"
    async function refreshQuotes() {
        try {
            const res = await fetch('/data' + window.location.search);
            if (!res.ok) return;
            const data = await res.json();
            document.querySelectorAll('.tile').forEach((tile) => {
                const info = data[tile.dataset.name];
                if (!info) return;
                const price = tile.querySelector('.price');
                price.className = 'price ' + info.trend;
                price.querySelector('.value').textContent =
                    typeof info.price === 'number' ? info.price.toFixed(2) : info.price;
                price.querySelector('.percent').textContent = '(' + info.percent_change + ')';
            });
        } catch (e) {
            console.warn('quote refresh failed', e);
        }
    }
"#;

pub fn render_dashboard(
    board: &QuoteBoard,
    query: &str,
    region: RegionFilter,
    refresh: Duration,
) -> String {
    let refresh_secs = refresh.as_secs().max(1);
    let mut html = String::with_capacity(4096 + board.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("    <meta charset=\"utf-8\">\n");
    html.push_str("    <title>Stock Prices</title>\n");
    let _ = writeln!(
        html,
        "    <meta http-equiv=\"refresh\" content=\"{}\">",
        refresh_secs
    );
    let _ = writeln!(html, "    <style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str("    <h1>Real-Time Stock Prices (Delayed)</h1>\n");

    render_search_form(&mut html, query, region);

    if board.is_empty() {
        html.push_str("    <p class=\"empty\">No symbols match.</p>\n");
    } else {
        html.push_str("    <div class=\"container\">\n");
        for (entry, record) in board.iter() {
            render_tile(&mut html, &entry.name, record);
        }
        html.push_str("    </div>\n");
    }

    let _ = writeln!(
        html,
        "    <script>{}    setInterval(refreshQuotes, {});\n    </script>",
        SCRIPT,
        poll_interval_ms(refresh_secs)
    );
    html.push_str("</body>\n</html>\n");
    html
}

/// Polls land halfway between full reloads.
fn poll_interval_ms(refresh_secs: u64) -> u64 {
    refresh_secs * 500
}

fn render_search_form(html: &mut String, query: &str, region: RegionFilter) {
    html.push_str("    <form method=\"get\" action=\"/\">\n");
    let _ = writeln!(
        html,
        "        <input type=\"search\" name=\"q\" placeholder=\"Search name or symbol\" value=\"{}\">",
        escape_html(query)
    );
    html.push_str("        <select name=\"filter\">\n");
    for (option, label) in [
        (RegionFilter::All, "All"),
        (RegionFilter::Only(Region::Asx), "ASX"),
        (RegionFilter::Only(Region::Us), "US"),
    ] {
        let selected = if option == region { " selected" } else { "" };
        let _ = writeln!(
            html,
            "            <option value=\"{}\"{}>{}</option>",
            option, selected, label
        );
    }
    html.push_str("        </select>\n");
    html.push_str("        <button type=\"submit\">Filter</button>\n");
    html.push_str("    </form>\n");
}

fn render_tile(html: &mut String, name: &str, record: &QuoteRecord) {
    let name = escape_html(name);
    let _ = writeln!(
        html,
        "        <div class=\"tile {}\" data-name=\"{}\">",
        record.region.as_str(),
        name
    );
    let _ = writeln!(html, "            <div class=\"title\">{}</div>", name);
    let _ = writeln!(
        html,
        "            <div class=\"symbol\">{}</div>",
        escape_html(&record.symbol)
    );
    let _ = writeln!(
        html,
        "            <div class=\"price {}\">$<span class=\"value\">{}</span><span class=\"percent\">({})</span></div>",
        record.trend, record.price, record.percent_change
    );
    html.push_str("        </div>\n");
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tickerboard_market_data::{
        PercentChange, PriceState, Trend, WatchlistEntry,
    };

    fn record(symbol: &str, price: PriceState, percent: PercentChange, trend: Trend) -> QuoteRecord {
        QuoteRecord {
            symbol: symbol.to_string(),
            price,
            previous_close: None,
            percent_change: percent,
            trend,
            region: Region::from_symbol(symbol),
            failure: None,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"AT&T"</b>'"#),
            "&lt;b&gt;&quot;AT&amp;T&quot;&lt;/b&gt;&#39;"
        );
    }

    #[test]
    fn renders_tiles_with_region_and_trend_classes() {
        let mut board = QuoteBoard::new();
        board.push(
            WatchlistEntry::new("BHP (ASX)", "BHP.AX"),
            record(
                "BHP.AX",
                PriceState::Value(dec!(45.00)),
                PercentChange::Value(dec!(2.27)),
                Trend::Up,
            ),
        );
        board.push(
            WatchlistEntry::new("Tesla (US)", "TSLA"),
            record("TSLA", PriceState::Error, PercentChange::NotAvailable, Trend::Flat),
        );

        let html = render_dashboard(&board, "", RegionFilter::All, Duration::from_secs(60));

        assert!(html.contains(r#"<div class="tile asx" data-name="BHP (ASX)">"#));
        assert!(html.contains(r#"<div class="price up">$<span class="value">45.00</span><span class="percent">(+2.27%)</span></div>"#));
        assert!(html.contains(r#"<div class="tile us" data-name="Tesla (US)">"#));
        assert!(html.contains(r#"<div class="price flat">$<span class="value">Error</span><span class="percent">(N/A)</span></div>"#));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="60">"#));
        assert!(!html.contains("<noscript>"));
        assert!(html.contains("setInterval(refreshQuotes, 15000)"));
    }

    #[test]
    fn keeps_search_state_in_form() {
        let html = render_dashboard(
            &QuoteBoard::new(),
            "<bhp>",
            RegionFilter::Only(Region::Asx),
            Duration::from_secs(30),
        );
        assert!(html.contains(r#"value="&lt;bhp&gt;""#));
        assert!(html.contains(r#"<option value="asx" selected>ASX</option>"#));
        assert!(html.contains(r#"<option value="all">All</option>"#));
        assert!(html.contains("No symbols match."));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="30">"#));
        assert!(html.contains("setInterval(refreshQuotes, 30000)"));
    }
}
