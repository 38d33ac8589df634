//! 解析結果パネル

use ks_detect_common::{confidence_percent, AnalysisResult};
use leptos::prelude::*;

#[component]
pub fn ResultPanel(result: AnalysisResult) -> impl IntoView {
    let percent = confidence_percent(result.confidence);

    view! {
        <div class="result-panel">
            <div class="result-box">
                <h3>"Result"</h3>
                <p class="prediction">{result.prediction}</p>
                <p class="confidence">{format!("Confidence: {}%", percent)}</p>
            </div>
            {(!result.recommendations.is_empty()).then(|| view! { <h4>"Recommendations"</h4> })}
            <ul class="recommendations">
                {result
                    .recommendations
                    .iter()
                    .map(|rec| view! { <li>{rec.clone()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
