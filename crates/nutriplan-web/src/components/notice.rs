//! Inline notification region, used instead of blocking dialogs

use crate::state::AppState;
use sycamore::prelude::*;

#[component]
pub fn NoticeBar() -> View {
    let state = use_context::<AppState>();
    let notice = state.notice;

    view! {
        div(id="notice") {
            (move || match notice.get_clone() {
                Some(notice) => {
                    let dismiss = state.clone();
                    let copy_text = match notice.copy_text {
                        Some(text) => view! {
                            div(class="mt-2") { code(class="user-select-all") { (text) } }
                        },
                        None => view! {},
                    };

                    view! {
                        div(class=format!("{} d-flex justify-content-between", notice.level.css_class()), role="alert") {
                            div {
                                span { (notice.message) }
                                (copy_text)
                            }
                            button(
                                r#type="button",
                                class="btn-close",
                                on:click=move |_| dismiss.dismiss_notice()
                            )
                        }
                    }
                }
                None => view! {},
            })
        }
    }
}
