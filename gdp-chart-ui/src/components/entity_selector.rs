//! Multi-select picker for the charted entities.
//!
//! A dropdown adds an entity; each selected entity shows as a chip with a
//! remove button. Chips keep pick order, which is also the legend order.

use crate::state::AppState;
use dioxus::prelude::*;

/// Entity multi-select backed by `AppState::selected_entities`.
#[component]
pub fn EntitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let entities = state.entities.read().clone();
    let selected = state.selected_entities.read().clone();

    let on_add = move |evt: Event<FormData>| {
        let value = evt.value();
        if !value.is_empty() {
            state.selected_entities.write().insert(&value);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; width: 100%;",
            label {
                r#for: "entity-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Countries: "
            }
            select {
                id: "entity-select",
                style: "background-color: #e6e6e6; border-radius: 5px; padding: 4px;",
                onchange: on_add,
                option { value: "", selected: true, "Add a country..." }
                for entity in entities.iter().filter(|e| !selected.contains(e)) {
                    option {
                        value: "{entity}",
                        "{entity}"
                    }
                }
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px; margin-top: 6px;",
                for entity in selected.iter() {
                    EntityChip { key: "{entity}", entity: entity.to_string() }
                }
            }
        }
    }
}

/// One selected entity with a remove button.
#[component]
fn EntityChip(entity: String) -> Element {
    let mut state = use_context::<AppState>();
    let name = entity.clone();

    rsx! {
        span {
            style: "background: #e6e6e6; border-radius: 12px; padding: 2px 8px; font-size: 13px;",
            "{entity} "
            button {
                style: "border: none; background: none; cursor: pointer; color: #666;",
                onclick: move |_| {
                    state.selected_entities.write().remove(&name);
                },
                "×"
            }
        }
    }
}
