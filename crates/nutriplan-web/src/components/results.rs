//! Rendered meal plan: header with actions, then one card per meal

use crate::state::AppState;
use nutriplan_core::view::EMPTY_PLACEHOLDER;
use nutriplan_core::{CardTitle, MealCard, PlanHeader, PlanView};
use sycamore::prelude::*;

#[component]
pub fn Results() -> View {
    let state = use_context::<AppState>();
    let plan_view = state.view;

    view! {
        div(id="results") {
            (move || match plan_view.get_clone() {
                PlanView::Idle => view! {},
                PlanView::Empty => view! {
                    p(class="text-center text-muted") { (EMPTY_PLACEHOLDER) }
                },
                PlanView::Plan { header, cards } => {
                    let cards = cards
                        .into_iter()
                        .map(|card| view! { MealCardView(card=card) })
                        .collect::<Vec<_>>();

                    view! {
                        PlanHeaderView(header=header)
                        div(class="row g-4") { (cards) }
                    }
                }
            })
        }
    }
}

#[component(inline_props)]
fn PlanHeaderView(header: PlanHeader) -> View {
    let state = use_context::<AppState>();
    let share = state.clone();

    view! {
        div(class="text-center mb-4") {
            h3 { (header.title()) }
            button(class="btn btn-outline-success btn-sm", on:click=move |_| state.export_pdf()) {
                "Export PDF"
            }
            button(class="btn btn-outline-primary btn-sm ms-2", on:click=move |_| share.share()) {
                "Share"
            }
        }
    }
}

#[component(inline_props)]
fn MealCardView(card: MealCard) -> View {
    let card_class = card.card_class();
    let badge_class = card.badge_class();
    let circle_class = format!("icon-circle {}", card.meal_type.css_class());
    let icon_class = format!("bi {}", card.icon.css_class());
    let meal_type = card.meal_type.as_str();

    let title = match card.title {
        CardTitle::Name(name) => view! { (name) },
        CardTitle::NoMatch => view! { em { (CardTitle::NoMatch.text().to_string()) } },
    };

    let id_line = match card.id_line {
        Some(id) => view! {
            p(class="text-muted small") { "ID: " code { (id) } }
        },
        None => view! {},
    };

    let tags = card
        .tags
        .into_iter()
        .map(|tag| {
            view! {
                span(class=format!("badge {}", tag.css_class)) { (tag.label) }
            }
        })
        .collect::<Vec<_>>();

    let hint = match card.hint {
        Some(hint) => view! {
            p(class="text-danger small mt-2 mb-0") { (hint) }
        },
        None => view! {},
    };

    view! {
        div(class="col-md-4") {
            div(class=card_class) {
                div(class=circle_class) {
                    i(class=icon_class)
                }
                h5 { (meal_type) }
                h6(class="text-primary") { (title) }
                (id_line)
                span(class=badge_class) { (card.calories_badge) }
                div(class="mt-2") { (tags) }
                (hint)
            }
        }
    }
}
