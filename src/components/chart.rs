//! Chart Component
//!
//! Pollutant bar chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::Prediction;

/// Bar fill color
const BAR_COLOR: &str = "#1976d2";

/// Bar chart of the six echoed pollutant readings
#[component]
pub fn PollutantChart(prediction: Prediction) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted; the whole component is recreated
    // when a new prediction replaces the old one.
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &prediction.pollutants());
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="600"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Draw the pollutant bars on canvas
fn draw_bars(canvas: &HtmlCanvasElement, rows: &[(&'static str, f64, &'static str)]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Y scale from 0 to the largest reading, padded; guard against an
    // all-zero submission so bars still have a defined scale
    let max_value = rows.iter().map(|(_, v, _)| *v).fold(0.0, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Draw bars with value above and name below
    let slot_width = chart_width / rows.len() as f64;
    let bar_width = slot_width * 0.6;

    for (i, (name, value, _unit)) in rows.iter().enumerate() {
        let x = margin_left + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let bar_height = (value / y_max) * chart_height;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#d1d5db".into()); // gray-300
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), x, y - 5.0);

        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(name, x, height - 10.0);
    }
}
