//! App Root Component
//!
//! Top-level container owning the predict flow and the page layout.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api;
use crate::components::{Header, PredictionForm, ResultDisplay};
use crate::state::global::{provide_global_state, GlobalState, SensorReading};

/// Health re-check period
const HEALTH_POLL_MS: u32 = 30_000;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch model info once and start the health poll on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();

        let state_for_info = state.clone();
        spawn_local(async move {
            match api::fetch_model_info().await {
                Ok(info) => {
                    state_for_info.model_info.set(Some(info));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch model info: {}", e).into());
                }
            }
        });

        check_health(state.clone());

        let state_for_poll = state;
        Interval::new(HEALTH_POLL_MS, move || {
            check_health(state_for_poll.clone());
        })
        .forget();
    });

    // Predict flow: one request in flight at a time (the form disables
    // its submit button while loading is set)
    let state_for_predict = state.clone();
    let on_predict = Callback::new(move |reading: SensorReading| {
        spawn_local(run_prediction(state_for_predict.clone(), reading));
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <PredictionForm on_predict=on_predict />
                <ResultDisplay />
            </main>

            // Footer with service status
            <Footer />
        </div>
    }
}

/// Submit one reading and record the outcome: previous result and error
/// are cleared up front, and loading resolves regardless of how the call
/// ends.
pub async fn run_prediction(state: GlobalState, reading: SensorReading) {
    state.loading.set(true);
    state.error.set(None);
    state.result.set(None);

    match api::predict(&reading).await {
        Ok(prediction) => {
            state.result.set(Some(prediction));
        }
        Err(e) => {
            state.error.set(Some(e));
        }
    }

    state.loading.set(false);
}

/// Run one health check and record the outcome
fn check_health(state: GlobalState) {
    spawn_local(async move {
        match api::fetch_health().await {
            Ok(health) => {
                state.health.set(Some(health));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Health check failed: {}", e).into());
                state.health.set(None);
            }
        }
        state
            .last_checked
            .set(Some(chrono::Utc::now().timestamp_millis()));
    });
}

/// Footer component showing prediction service status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Service status
                <div class="flex items-center space-x-2">
                    {move || {
                        match (state.last_checked.get(), state.health.get()) {
                            (None, _) => view! {
                                <span class="text-gray-400">"Checking service..."</span>
                            }.into_view(),
                            (Some(_), Some(h)) if h.status == "healthy" => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>
                                        {if h.model_loaded {
                                            "Service online"
                                        } else {
                                            "Service online (mock model)"
                                        }}
                                    </span>
                                </span>
                            }.into_view(),
                            _ => view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Service unreachable"</span>
                                </span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Model type
                <div class="text-gray-400">
                    {move || {
                        state.model_info.get()
                            .map(|m| format!("Model: {}", m.model_type))
                            .unwrap_or_default()
                    }}
                </div>

                // API base URL setting
                <ApiUrlSetting />

                // Last health check time
                <div class="text-gray-400">
                    {move || {
                        state.last_checked.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Checked: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not checked".to_string())
                    }}
                </div>
            </div>
        </footer>
    }
}

/// Inline editor for the prediction service base URL. Saving persists the
/// URL and immediately re-checks the service against it.
#[component]
fn ApiUrlSetting() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let state_for_save = state.clone();
    let on_save = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        check_health(state_for_save.clone());
    };

    view! {
        <div class="flex items-center space-x-2">
            <label class="text-gray-400">"API URL"</label>
            <input
                type="text"
                prop:value=move || api_url.get()
                on:input=move |ev| set_api_url.set(event_target_value(&ev))
                class="w-56 bg-gray-700 rounded px-2 py-1 text-sm
                       border border-gray-600 focus:border-blue-500 focus:outline-none"
            />
            <button
                on:click=on_save
                class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded text-sm transition-colors"
            >
                "Save"
            </button>
        </div>
    }
}
