//! Result Display Component
//!
//! Renders the prediction result: AQI score, severity chip, pollutant
//! chart, summary cards, and the band legend. Renders nothing while no
//! result is present.

use leptos::*;

use crate::aqi::ALL_BANDS;
use crate::components::chart::PollutantChart;
use crate::state::global::{GlobalState, Prediction};

/// Prediction result card
#[component]
pub fn ResultDisplay() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            state.result.get().map(|result| view! {
                <ResultCard result=result />
            })
        }}
    }
}

#[component]
fn ResultCard(result: Prediction) -> impl IntoView {
    let color = result.display_color();
    let level = result.display_level();
    let chart_result = result.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6 max-w-2xl mx-auto mt-8">
            <h2 class="text-xl font-semibold mb-4">"Air Quality Prediction Result"</h2>

            // AQI score and severity chip
            <div class="text-center mb-6">
                <div
                    class="text-5xl font-bold"
                    style=format!("color: {}", color)
                >
                    {format!("{:.0}", result.aqi)}
                </div>
                <span
                    class="inline-block mt-2 px-4 py-1 rounded-full text-white font-bold"
                    style=format!("background-color: {}", color)
                >
                    {level}
                </span>
            </div>

            // Pollutant bar chart
            <h3 class="text-lg font-semibold mb-2">"Pollutant Levels"</h3>
            <PollutantChart prediction=chart_result />

            // Summary cards
            <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 mt-4">
                {result.pollutants().into_iter().map(|(name, value, unit)| view! {
                    <div class="bg-gray-700 rounded-lg p-3">
                        <div class="text-sm text-gray-400">{name}</div>
                        <div class="text-lg font-semibold">
                            {format!("{:.1} {}", value, unit)}
                        </div>
                    </div>
                }).collect_view()}
            </div>

            // Band legend
            <AqiGuide />
        </section>
    }
}

/// Static legend of the six severity bands
#[component]
fn AqiGuide() -> impl IntoView {
    view! {
        <div class="bg-gray-900 rounded-lg p-4 mt-6">
            <div class="text-sm font-semibold text-gray-300 mb-2">"AQI Guide"</div>
            <ul class="space-y-1">
                {ALL_BANDS.into_iter().map(|band| view! {
                    <li class="flex items-center space-x-2 text-sm text-gray-400">
                        <span
                            class="w-3 h-3 rounded-full shrink-0"
                            style=format!("background-color: {}", band.color())
                        />
                        <span>
                            {format!("{}: {} - {}", band.range_label(), band.level(), band.description())}
                        </span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
