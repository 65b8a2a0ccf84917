use dioxus::prelude::*;

use crate::report::presentation::{GaugeGeometry, ScoreBand};

/// Circular score gauge drawn as SVG.
#[component]
pub fn ScoreChart(score: u8, #[props(default = 200)] size: u32) -> Element {
    let gauge = GaugeGeometry::new(score, size);
    let band = ScoreBand::for_gauge(score);
    let center = gauge.center();
    let radius = gauge.radius;
    let stroke_width = gauge.stroke_width;
    let circumference = gauge.circumference;
    let dash_offset = gauge.dash_offset;
    let stroke = band.stroke();
    let text_class = band.text_class();

    rsx! {
        div {
            class: "score-chart relative flex items-center justify-center",
            style: "width: {size}px; height: {size}px;",
            svg {
                "width": "{size}",
                "height": "{size}",
                "viewBox": "0 0 {size} {size}",
                circle {
                    "cx": "{center}",
                    "cy": "{center}",
                    "r": "{radius}",
                    "fill": "none",
                    "stroke": "#e2e8f0",
                    "stroke-width": "{stroke_width}",
                }
                circle {
                    "cx": "{center}",
                    "cy": "{center}",
                    "r": "{radius}",
                    "fill": "none",
                    "stroke": "{stroke}",
                    "stroke-width": "{stroke_width}",
                    "stroke-linecap": "round",
                    "stroke-dasharray": "{circumference}",
                    "stroke-dashoffset": "{dash_offset}",
                    "transform": "rotate(-90 {center} {center})",
                }
            }
            div {
                class: "absolute inset-0 flex flex-col items-center justify-center pointer-events-none",
                span { class: "overall-score text-4xl font-bold {text_class}", "{score}" }
                span { class: "text-xs text-slate-400 uppercase font-medium tracking-wider mt-1", "Overall" }
            }
        }
    }
}
