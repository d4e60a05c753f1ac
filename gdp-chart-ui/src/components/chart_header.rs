//! Page header with heading and descriptive paragraph.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Page heading
    pub title: String,
    /// What the dataset is and how to use the controls
    #[props(default = String::new())]
    pub description: String,
}

/// Centered heading with an optional description underneath.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 20px; text-align: center;",
            h1 {
                style: "margin: 0 0 12px 0; font-size: 24px; color: #444;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 16px; color: #666;",
                    "{props.description}"
                }
            }
        }
    }
}
