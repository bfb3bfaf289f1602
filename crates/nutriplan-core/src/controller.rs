//! Page state for the meal planner
//!
//! `PlanController` owns the current plan, the rendered view and the inline
//! notice. Generation requests are numbered so a response is only applied if
//! no newer request was started after it; anything older is dropped.

use crate::config::ExportConfig;
use crate::error::ClientError;
use crate::models::Plan;
use crate::request::{FormState, PlanRequest};
use crate::view::PlanView;

/// Severity of an inline notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Bootstrap alert class
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "alert alert-info",
            Self::Success => "alert alert-success",
            Self::Warning => "alert alert-warning",
            Self::Error => "alert alert-danger",
        }
    }
}

/// Non-blocking message shown in the notification region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// Text offered for manual copying when the clipboard is unavailable
    pub copy_text: Option<String>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            copy_text: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn with_copy_text(mut self, text: impl Into<String>) -> Self {
        self.copy_text = Some(text.into());
        self
    }
}

/// Everything the page draws, handed to listeners after each change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub view: PlanView,
    pub notice: Option<Notice>,
    /// The most recent generation request is still in flight
    pub generating: bool,
}

/// Handle for one in-flight generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateTicket {
    pub seq: u64,
    pub request: PlanRequest,
}

/// What happened to a finished generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was started; this response was discarded
    Stale,
}

/// A permitted export: the body to send and where to save the result
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub plan: Plan,
    pub filename: String,
    pub mime: String,
}

pub const EXPORT_WITHOUT_PLAN: &str = "Generate a plan first!";
pub const LINK_COPIED: &str = "Link copied to clipboard!";
pub const COPY_LINK_MANUALLY: &str = "Copy this link:";
pub const SHARE_FAILED: &str = "Could not read the page link.";

#[derive(Debug, Default)]
pub struct PlanController {
    export: ExportConfig,
    current_plan: Option<Plan>,
    state: ViewState,
    latest_seq: u64,
}

impl PlanController {
    pub fn new(export: ExportConfig) -> Self {
        Self {
            export,
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.clone()
    }

    pub fn current_plan(&self) -> Option<&Plan> {
        self.current_plan.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.state.generating
    }

    /// Start a generation request from the current form contents.
    pub fn begin_generate(&mut self, form: &FormState) -> GenerateTicket {
        self.latest_seq += 1;
        self.state.generating = true;

        let request = PlanRequest::from_form(form);
        log::info!(
            "Generating plan #{} (query: '{}', calories: {}, prefs: '{}')",
            self.latest_seq,
            request.query,
            request.calories,
            request.prefs
        );

        GenerateTicket {
            seq: self.latest_seq,
            request,
        }
    }

    /// Apply a finished generation request if it is still the latest one.
    pub fn complete_generate(
        &mut self,
        ticket: &GenerateTicket,
        result: Result<Option<Plan>, ClientError>,
    ) -> Completion {
        if ticket.seq != self.latest_seq {
            log::debug!(
                "Dropping response for plan #{}, #{} is newer",
                ticket.seq,
                self.latest_seq
            );
            return Completion::Stale;
        }

        self.state.generating = false;

        match result {
            Ok(plan) => {
                if let Some(ref plan) = plan {
                    for warning in plan.shape_warnings() {
                        log::warn!("Plan #{}: {}", ticket.seq, warning);
                    }
                }
                self.state.view = PlanView::from_plan(plan.as_ref());
                self.state.notice = None;
                self.current_plan = plan;
            }
            Err(e) => {
                log::warn!("Plan #{} failed: {}", ticket.seq, e);
                self.state.notice = Some(Notice::error(format!(
                    "Could not generate a meal plan. {}",
                    e
                )));
            }
        }

        Completion::Applied
    }

    /// Check that there is a plan to export and describe the export.
    pub fn begin_export(&mut self) -> Result<ExportJob, Notice> {
        match self.current_plan {
            Some(ref plan) => Ok(ExportJob {
                plan: plan.clone(),
                filename: self.export.filename.clone(),
                mime: self.export.mime.clone(),
            }),
            None => {
                let notice = Notice::warning(EXPORT_WITHOUT_PLAN);
                self.state.notice = Some(notice.clone());
                Err(notice)
            }
        }
    }

    pub fn finish_export(&mut self, job: &ExportJob, result: Result<(), ClientError>) {
        self.state.notice = Some(match result {
            Ok(()) => {
                log::info!("Exported plan as {}", job.filename);
                Notice::success(format!("Saved {}", job.filename))
            }
            Err(e) => {
                log::warn!("PDF export failed: {}", e);
                Notice::error(format!("Could not export the PDF. {}", e))
            }
        });
    }

    /// Record the outcome of copying `href` to the clipboard.
    pub fn finish_share(&mut self, href: &str, result: Result<(), String>) {
        self.state.notice = Some(match result {
            Ok(()) => Notice::success(LINK_COPIED),
            Err(e) => {
                log::debug!("Clipboard unavailable: {}", e);
                Notice::new(NoticeLevel::Info, COPY_LINK_MANUALLY).with_copy_text(href)
            }
        });
    }

    /// The page link could not be read, so there is nothing to copy.
    pub fn share_unavailable(&mut self, reason: &str) {
        log::warn!("Cannot share: {}", reason);
        self.state.notice = Some(Notice::error(format!("{} {}", SHARE_FAILED, reason)));
    }

    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
    }
}
