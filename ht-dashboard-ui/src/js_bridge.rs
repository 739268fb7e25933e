//! Typed wrappers around the SciChart glue via `js_sys::eval()`.
//!
//! `assets/js/health-chart.js` is embedded at compile time and evaluated at
//! global scope once the `SciChart` global has loaded. Render calls poll until
//! the glue is ready and the container element exists, so they can be issued
//! before the DOM has caught up.
//!
//! Each container carries a generation number in `window.__htGenerations`.
//! Every render and destroy claims a new one; a render whose generation is
//! no longer current stops polling, or deletes its own surface if SciChart
//! finishes creating it late.

use crate::browser::describe;
use ht_core::error::{DashboardError, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

static HEALTH_CHART_JS: &str = include_str!("../assets/js/health-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HealthTrace JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `value` as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Wait for SciChart, point it at its WASM asset and install the glue.
///
/// Call once at app startup. The glue's function declarations are evaluated
/// through an indirect eval so they land on `window`.
pub fn init_charts(wasm_url: &str) {
    let store_js = format!("window.__htChartScripts = {};", js_string(HEALTH_CHART_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            var waitForSciChart = setInterval(function() {{
                if (typeof SciChart !== 'undefined') {{
                    clearInterval(waitForSciChart);
                    SciChart.SciChartSurface.configure({{ wasmUrl: {wasm_url} }});
                    (0, eval)(window.__htChartScripts);
                    delete window.__htChartScripts;
                    if (typeof renderHealthChart !== 'undefined') window.renderHealthChart = renderHealthChart;
                    if (typeof destroyHealthChart !== 'undefined') window.destroyHealthChart = destroyHealthChart;
                    window.__htChartsReady = true;
                    console.log('HealthTrace charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        wasm_url = js_string(wasm_url),
    );
    let _ = js_sys::eval(&init_js);
}

/// Polls (100 ms apart) a render waits for SciChart and its container.
const RENDER_WAIT_ATTEMPTS: u32 = 300;

/// Draw `spec_json` into `container_id`, replacing any chart already there.
///
/// Resolves once the surface is drawn, or once a newer render or destroy
/// for the same container has taken over. A rejection from the glue, or a
/// container that never appears, is a [`DashboardError::Chart`].
pub async fn render_chart(container_id: &str, spec_json: &str) -> Result<()> {
    let id = js_string(container_id);
    let spec = js_string(spec_json);
    let render_js = format!(
        r#"
        (new Promise(function(resolve, reject) {{
            var generations = window.__htGenerations || (window.__htGenerations = {{}});
            var generation = (generations[{id}] || 0) + 1;
            generations[{id}] = generation;
            var attempts = 0;
            var poll = setInterval(function() {{
                if (generations[{id}] !== generation) {{
                    clearInterval(poll);
                    resolve(false);
                }} else if (window.__htChartsReady &&
                    typeof window.renderHealthChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    window.renderHealthChart({id}, {spec}, generation).then(resolve, reject);
                }} else if (++attempts >= {max_attempts}) {{
                    clearInterval(poll);
                    reject(new Error('SciChart or #' + {id} + ' never became available'));
                }}
            }}, 100);
        }}))
        "#,
        max_attempts = RENDER_WAIT_ATTEMPTS,
    );
    let promise = js_sys::eval(&render_js)
        .map_err(|e| DashboardError::Chart(describe(&e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| DashboardError::Chart("render did not return a promise".to_string()))?;
    let drawn = JsFuture::from(promise)
        .await
        .map_err(|e| DashboardError::Chart(describe(&e)))?;
    if drawn.as_bool() == Some(false) {
        log::debug!("Render into {} superseded", container_id);
    }
    Ok(())
}

/// Delete the chart surface in `container_id`, if any, and cancel any
/// render still pending for it.
pub fn destroy_chart(container_id: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        r#"
        var generations = window.__htGenerations || (window.__htGenerations = {{}});
        generations[{id}] = (generations[{id}] || 0) + 1;
        if (window.destroyHealthChart) window.destroyHealthChart({id});
        "#,
    ));
}
