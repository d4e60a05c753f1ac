//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart function lives in `assets/js/multi-series-chart.js` and is
//! evaluated as a global (no ES modules) once D3 itself has loaded. This
//! module serializes projections and calls that global.

use gdp_tidy::projection::{ChartMeta, Series};

// Embed the D3 chart JS at compile time
static MULTI_SERIES_CHART_JS: &str = include_str!("../assets/js/multi-series-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GDP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding inside a single-quoted JS string literal.
pub fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script is stashed on `window` and evaluated at global scope by
/// indirect eval once `d3` exists, then the render function is promoted to
/// `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!(
        "window.__gdpChartScripts = {};",
        serde_json::to_string(MULTI_SERIES_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__gdpChartsReady || window.__gdpChartsInit) { return; }
            window.__gdpChartsInit = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__gdpChartScripts);
                    delete window.__gdpChartScripts;
                    if (typeof renderMultiSeriesChart !== 'undefined') window.renderMultiSeriesChart = renderMultiSeriesChart;
                    window.__gdpChartsReady = true;
                    console.log('GDP charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render one line per series.
///
/// Polls until D3, the chart script, and the container element all exist.
pub fn render_multi_series_chart(container_id: &str, series: &[Series], meta: &ChartMeta) {
    log::debug!("[GDP] render {} series into #{}", series.len(), container_id);
    let data_json = escape_for_js(&serde_json::to_string(series).unwrap_or_default());
    let meta_json = escape_for_js(&serde_json::to_string(meta).unwrap_or_default());
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gdpChartsReady &&
                    typeof window.renderMultiSeriesChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderMultiSeriesChart('{container_id}', '{data_json}', '{meta_json}');
                    }} catch(e) {{ console.error('[GDP] renderMultiSeriesChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_for_js() {
        assert_eq!(escape_for_js(r#"{"a":"Cote d'Ivoire"}"#), r#"{"a":"Cote d\'Ivoire"}"#);
        assert_eq!(escape_for_js("[1,\n2]"), "[1,2]");
        assert_eq!(escape_for_js(r#""a\"b""#), r#""a\\"b""#);
    }
}
