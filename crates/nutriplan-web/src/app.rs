//! Main application component
//!
//! Creates the page state, shares it through context and lays out the form,
//! the notification region and the results.

use crate::components::{NoticeBar, PlanForm, Results};
use crate::state::AppState;
use sycamore::prelude::*;

/// Main application component
#[component]
pub fn App() -> View {
    provide_context(AppState::new());

    view! {
        div(class="container py-4") {
            header(class="text-center mb-4") {
                h1 { "NutriPlan" }
                p(class="text-muted") { "A day of meals, matched to your calories and preferences" }
            }

            main {
                PlanForm()
                NoticeBar()
                Results()
            }
        }
    }
}
