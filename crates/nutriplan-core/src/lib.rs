//! NutriPlan Core Library
//!
//! Platform-independent half of the NutriPlan meal planner front end: the
//! plan data model, the `generate` request, the results view model and the
//! page controller. The browser crate supplies HTTP, clipboard and download
//! implementations of the traits in [`client`].

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod request;
pub mod view;

// Re-export commonly used types
pub use client::{Clipboard, Downloader, ExportOutcome, PlanClient, PlanService};
pub use config::{client_config, ClientConfig};
pub use controller::{Completion, Notice, NoticeLevel, PlanController, ViewState};
pub use error::ClientError;
pub use models::{Meal, MealIcon, MealType, Plan, MISSING_MEAL_ID};
pub use request::{FormState, PlanRequest, PreferenceOption};
pub use view::{CardTitle, MealCard, PlanHeader, PlanView};
