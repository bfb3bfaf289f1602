//! Application state using Sycamore signals
//!
//! Form inputs are signals bound straight to their elements. Everything the
//! results and notification regions show comes from the core
//! [`PlanClient`], which pushes a fresh [`ViewState`] into the signals after
//! each change.

use crate::browser::{self, BrowserClipboard, BrowserDownloader};
use crate::http::HttpPlanService;
use nutriplan_core::{
    client_config, ExportOutcome, FormState, Notice, PlanClient, PlanView, PreferenceOption,
    ViewState,
};
use sycamore::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub type WebClient = PlanClient<HttpPlanService, BrowserClipboard, BrowserDownloader>;

/// A preference checkbox and its checked state
#[derive(Clone)]
pub struct PreferenceToggle {
    pub option: PreferenceOption,
    pub checked: Signal<bool>,
}

/// Application state context
#[derive(Clone)]
pub struct AppState {
    // === Form ===
    pub query: Signal<String>,
    /// Calorie slider value, also shown as the slider label
    pub calories: Signal<String>,
    /// Checkboxes in document order
    pub preferences: Vec<PreferenceToggle>,

    // === Output ===
    pub view: Signal<PlanView>,
    pub notice: Signal<Option<Notice>>,
    pub generating: Signal<bool>,

    client: WebClient,
}

impl AppState {
    /// Create state from the embedded client configuration
    pub fn new() -> Self {
        let config = client_config();

        let preferences = config
            .preferences
            .iter()
            .map(|option| PreferenceToggle {
                option: option.clone(),
                checked: create_signal(false),
            })
            .collect();

        let client = PlanClient::new(
            HttpPlanService::new(config.api.clone()),
            BrowserClipboard,
            BrowserDownloader,
            config.export.clone(),
        );

        let view = create_signal(PlanView::default());
        let notice = create_signal(None);
        let generating = create_signal(false);

        client.subscribe(move |state: &ViewState| {
            view.set(state.view.clone());
            notice.set(state.notice.clone());
            generating.set(state.generating);
        });

        Self {
            query: create_signal(String::new()),
            calories: create_signal(config.calories.default.to_string()),
            preferences,
            view,
            notice,
            generating,
            client,
        }
    }

    /// Read the form as it is right now
    pub fn form(&self) -> FormState {
        FormState {
            query: self.query.get_clone(),
            calories: self.calories.get_clone(),
            preferences: self
                .preferences
                .iter()
                .map(|p| (p.option.clone(), p.checked.get()))
                .collect(),
        }
    }

    pub fn generate(&self) {
        let client = self.client.clone();
        let form = self.form();
        spawn_local(async move {
            client.generate(&form).await;
        });
    }

    pub fn export_pdf(&self) {
        let client = self.client.clone();
        spawn_local(async move {
            if client.export_current_plan().await == ExportOutcome::NoPlan {
                log::info!("Export requested before any plan was generated");
            }
        });
    }

    pub fn share(&self) {
        let href = match browser::current_href() {
            Ok(href) => href,
            Err(e) => {
                self.client.share_unavailable(&e);
                return;
            }
        };

        let client = self.client.clone();
        spawn_local(async move {
            client.share_link(&href).await;
        });
    }

    pub fn dismiss_notice(&self) {
        self.client.dismiss_notice();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
