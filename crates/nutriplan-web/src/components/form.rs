//! Query, calorie slider and preference checkboxes

use crate::state::AppState;
use nutriplan_core::client_config;
use sycamore::prelude::*;

/// Whether a key pressed in the query field submits the form
fn submits_query(key: &str) -> bool {
    key == "Enter"
}

/// Label text for a calorie slider value, shown exactly as the slider reports it
fn calorie_label(slider_value: &str) -> String {
    slider_value.to_string()
}

#[component]
pub fn PlanForm() -> View {
    let state = use_context::<AppState>();
    let range = client_config().calories;

    let query = state.query;
    let calories = state.calories;
    let generating = state.generating;

    let on_enter = state.clone();
    let on_click = state.clone();

    let checkboxes = state
        .preferences
        .iter()
        .map(|pref| {
            let checked = pref.checked;
            let value = pref.option.value.clone();
            let label = pref.option.label.clone();
            view! {
                div(class="form-check form-check-inline") {
                    label(class="form-check-label") {
                        input(r#type="checkbox", class="form-check-input me-1", value=value, bind:checked=checked)
                        (label)
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    view! {
        div(class="card p-3 mb-4") {
            div(class="input-group mb-3") {
                input(
                    r#type="text",
                    id="query",
                    class="form-control",
                    placeholder="What are you in the mood for?",
                    bind:value=query,
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if submits_query(&ev.key()) {
                            on_enter.generate();
                        }
                    }
                )
                button(
                    id="generate",
                    class="btn btn-primary",
                    on:click=move |_| on_click.generate()
                ) {
                    (move || if generating.get() { "Generating..." } else { "Generate Plan" })
                }
            }

            div(class="mb-3") {
                label(class="form-label") {
                    "Daily calories: "
                    strong(id="calVal") { (move || calories.with(|value| calorie_label(value))) }
                }
                input(
                    r#type="range",
                    id="calories",
                    class="form-range",
                    min=range.min.to_string(),
                    max=range.max.to_string(),
                    step=range.step.to_string(),
                    bind:value=calories
                )
            }

            div(id="filters") {
                (checkboxes)
            }
        }
    }
}
