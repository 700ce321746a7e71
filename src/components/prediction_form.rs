//! Prediction Form Component
//!
//! Ten-field form for entering sensor readings. Blank or unparseable
//! fields submit as 0; out-of-range values are only discouraged by the
//! browser-native min/max/step hints, never rejected.

use leptos::*;

use crate::components::loading::InlineLoading;
use crate::state::global::{parse_reading_value, GlobalState, SensorReading};

/// Static description of one form field
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
}

/// The ten sensor fields, in `SensorReading` order
pub static FIELDS: [FieldDef; 10] = [
    FieldDef { key: "pm25", label: "PM2.5 (μg/m³)", min: Some(0.0), max: None, step: 0.1 },
    FieldDef { key: "pm10", label: "PM10 (μg/m³)", min: Some(0.0), max: None, step: 0.1 },
    FieldDef { key: "so2", label: "SO2 (μg/m³)", min: Some(0.0), max: None, step: 0.1 },
    FieldDef { key: "no2", label: "NO2 (μg/m³)", min: Some(0.0), max: None, step: 0.1 },
    FieldDef { key: "co", label: "CO (mg/m³)", min: Some(0.0), max: None, step: 0.01 },
    FieldDef { key: "o3", label: "O3 (μg/m³)", min: Some(0.0), max: None, step: 0.1 },
    FieldDef { key: "temperature", label: "Temperature (°C)", min: None, max: None, step: 0.1 },
    FieldDef { key: "humidity", label: "Humidity (%)", min: Some(0.0), max: Some(100.0), step: 0.1 },
    FieldDef { key: "wind_speed", label: "Wind Speed (m/s)", min: Some(0.0), max: None, step: 0.1 },
    FieldDef { key: "pressure", label: "Pressure (hPa)", min: Some(0.0), max: None, step: 0.1 },
];

/// Sensor reading entry form
#[component]
pub fn PredictionForm(
    /// Invoked with the coerced reading on submit
    #[prop(into)]
    on_predict: Callback<SensorReading>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // One raw string signal per field, in FIELDS order
    let fields: [RwSignal<String>; 10] = std::array::from_fn(|_| create_rw_signal(String::new()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let values = fields.map(|sig| parse_reading_value(&sig.get()));
        on_predict.call(SensorReading::from_values(values));
    };

    let on_clear = move |_| {
        for sig in fields {
            sig.set(String::new());
        }
    };

    let loading = state.loading;

    view! {
        <section class="bg-gray-800 rounded-xl p-6 max-w-2xl mx-auto">
            <h2 class="text-xl font-semibold mb-4">"Enter Air Quality Parameters"</h2>

            // Error banner from the last failed prediction
            {move || {
                state.error.get().map(|msg| view! {
                    <div class="bg-red-900/50 border border-red-600 text-red-200 rounded-lg px-4 py-3 mb-4 text-sm">
                        {msg}
                    </div>
                })
            }}

            <form on:submit=on_submit>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    {FIELDS
                        .iter()
                        .zip(fields)
                        .map(|(def, sig)| view! { <FieldInput def=def value=sig /> })
                        .collect_view()}
                </div>

                <div class="flex justify-center space-x-3 mt-6">
                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="px-6 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg font-semibold
                               transition-colors flex items-center space-x-2"
                    >
                        {move || if loading.get() {
                            view! {
                                <InlineLoading />
                                <span>"Predicting..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Predict Air Quality"</span>
                            }.into_view()
                        }}
                    </button>

                    <button
                        type="button"
                        on:click=on_clear
                        disabled=move || loading.get()
                        class="px-6 py-3 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-600
                               border border-gray-600 rounded-lg font-semibold transition-colors"
                    >
                        "Clear"
                    </button>
                </div>
            </form>
        </section>
    }
}

/// A single labeled numeric input
#[component]
fn FieldInput(
    def: &'static FieldDef,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{def.label}</label>
            <input
                type="number"
                name=def.key
                min=def.min
                max=def.max
                step=def.step
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-blue-500 focus:outline-none"
            />
        </div>
    }
}
