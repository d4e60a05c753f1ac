//! Loading spinner component.

use dioxus::prelude::*;

/// Shown while the embedded dataset is parsed.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading GDP data..."
        }
    }
}
