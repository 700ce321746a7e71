//! Browser Tests
//!
//! DOM- and network-dependent behavior, run in a headless browser via
//! `wasm-pack test --headless --chrome`. Pure logic is covered by the
//! host-runnable unit tests next to each module.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen_test::*;

use crate::api;
use crate::app::run_prediction;
use crate::components::ResultDisplay;
use crate::state::global::{provide_global_state, GlobalState, Prediction, SensorReading};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_state() -> GlobalState {
    GlobalState {
        result: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        health: create_rw_signal(None),
        last_checked: create_rw_signal(None),
        model_info: create_rw_signal(None),
    }
}

fn sample_prediction(aqi: f64) -> Prediction {
    Prediction {
        aqi,
        level: None,
        color: None,
        pm25: 12.0,
        pm10: 30.0,
        so2: 5.0,
        no2: 20.0,
        co: 0.8,
        o3: 40.0,
    }
}

#[wasm_bindgen_test]
fn api_base_round_trips_through_storage() {
    api::set_api_base("http://example.com:9000/");
    assert_eq!(api::get_api_base(), "http://example.com:9000");

    api::set_api_base(api::DEFAULT_API_BASE);
    assert_eq!(api::get_api_base(), api::DEFAULT_API_BASE);
}

#[wasm_bindgen_test]
fn no_result_renders_nothing_until_result_set() {
    document().body().unwrap().set_inner_html("");

    let captured: Rc<RefCell<Option<GlobalState>>> = Rc::new(RefCell::new(None));
    let cap = Rc::clone(&captured);

    mount_to_body(move || {
        provide_global_state();
        let state = use_context::<GlobalState>().expect("GlobalState not found");
        *cap.borrow_mut() = Some(state);
        view! { <ResultDisplay /> }
    });

    // No result: no card in the DOM
    assert!(document().query_selector("section").unwrap().is_none());

    let state = captured.borrow().clone().unwrap();
    state.result.set(Some(sample_prediction(42.0)));

    // Result set: the card appears
    let section = document().query_selector("section").unwrap();
    assert!(section.is_some());
}

#[wasm_bindgen_test]
async fn failed_predict_sets_error_and_resolves_loading() {
    // Nothing listens here; the request fails on the first attempt
    api::set_api_base("http://127.0.0.1:9");

    let runtime = create_runtime();
    let state = fresh_state();

    run_prediction(state.clone(), SensorReading::from_values([0.0; 10])).await;

    assert!(state.error.get_untracked().is_some());
    assert!(state.result.get_untracked().is_none());
    assert!(!state.loading.get_untracked());

    runtime.dispose();
    api::set_api_base(api::DEFAULT_API_BASE);
}
