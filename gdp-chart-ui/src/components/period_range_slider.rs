//! Dual-handle period range control.
//!
//! Two native range inputs share the table's bounds. Moving one handle past
//! the other pins it to the other handle, so the emitted range always has
//! `min <= max`.

use crate::state::AppState;
use dioxus::prelude::*;

const MARKS_LIST_ID: &str = "period-marks";

/// Range slider backed by `AppState::period_range`.
#[component]
pub fn PeriodRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let (Some(bounds), Some(range)) = ((state.period_bounds)(), (state.period_range)()) else {
        return rsx! {};
    };
    let marks = state.marks.read().clone();

    let on_min_change = move |evt: Event<FormData>| {
        if let (Ok(min), Some(current)) = (evt.value().parse::<i32>(), (state.period_range)()) {
            state.period_range.set(Some(current.with_min(min)));
        }
    };

    let on_max_change = move |evt: Event<FormData>| {
        if let (Ok(max), Some(current)) = (evt.value().parse::<i32>(), (state.period_range)()) {
            state.period_range.set(Some(current.with_max(max)));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0 20px 0; width: 100%;",
            datalist {
                id: MARKS_LIST_ID,
                for mark in marks.iter() {
                    option {
                        value: "{mark.period}",
                        label: "{mark.label}",
                    }
                }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                label {
                    style: "font-weight: bold; white-space: nowrap;",
                    "From {range.min}"
                }
                input {
                    r#type: "range",
                    style: "width: 100%;",
                    min: "{bounds.min}",
                    max: "{bounds.max}",
                    value: "{range.min}",
                    list: MARKS_LIST_ID,
                    oninput: on_min_change,
                }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                label {
                    style: "font-weight: bold; white-space: nowrap;",
                    "To {range.max}"
                }
                input {
                    r#type: "range",
                    style: "width: 100%;",
                    min: "{bounds.min}",
                    max: "{bounds.max}",
                    value: "{range.max}",
                    list: MARKS_LIST_ID,
                    oninput: on_max_change,
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                for mark in marks.iter().filter(|m| !m.label.is_empty()) {
                    span { "{mark.label}" }
                }
            }
        }
    }
}
