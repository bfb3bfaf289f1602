//! Async orchestration of the page actions
//!
//! `PlanClient` drives the controller through the three user actions
//! (generate, export, share) against injectable service traits. It is
//! single-threaded: clones share one controller through `Rc<RefCell<_>>`, and
//! no borrow is held across an await point.

use crate::config::ExportConfig;
use crate::controller::{Completion, PlanController, ViewState};
use crate::error::ClientError;
use crate::models::Plan;
use crate::request::{FormState, PlanRequest};
use std::cell::RefCell;
use std::rc::Rc;

/// Remote meal plan service
#[allow(async_fn_in_trait)]
pub trait PlanService {
    /// `POST /generate`; `Ok(None)` when the server found no meals at all
    async fn generate(&self, request: &PlanRequest) -> Result<Option<Plan>, ClientError>;

    /// `POST /export_pdf` with the plan as body; returns the document bytes
    async fn export_pdf(&self, plan: &Plan) -> Result<Vec<u8>, ClientError>;
}

/// System clipboard
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Saves a binary payload as a user download
pub trait Downloader {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), String>;
}

/// Result of an export attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved,
    /// Nothing generated yet; no request was sent
    NoPlan,
    Failed,
}

type Listener = Rc<dyn Fn(&ViewState)>;

pub struct PlanClient<S, C, D> {
    service: Rc<S>,
    clipboard: Rc<C>,
    downloader: Rc<D>,
    controller: Rc<RefCell<PlanController>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl<S, C, D> Clone for PlanClient<S, C, D> {
    fn clone(&self) -> Self {
        Self {
            service: Rc::clone(&self.service),
            clipboard: Rc::clone(&self.clipboard),
            downloader: Rc::clone(&self.downloader),
            controller: Rc::clone(&self.controller),
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<S, C, D> PlanClient<S, C, D>
where
    S: PlanService,
    C: Clipboard,
    D: Downloader,
{
    pub fn new(service: S, clipboard: C, downloader: D, export: ExportConfig) -> Self {
        Self {
            service: Rc::new(service),
            clipboard: Rc::new(clipboard),
            downloader: Rc::new(downloader),
            controller: Rc::new(RefCell::new(PlanController::new(export))),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    #[cfg(test)]
    pub(crate) fn service(&self) -> &S {
        &self.service
    }

    #[cfg(test)]
    pub(crate) fn clipboard(&self) -> &C {
        &self.clipboard
    }

    #[cfg(test)]
    pub(crate) fn downloader(&self) -> &D {
        &self.downloader
    }

    /// Register a callback run with the new state after every change.
    pub fn subscribe(&self, listener: impl Fn(&ViewState) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn snapshot(&self) -> ViewState {
        self.controller.borrow().snapshot()
    }

    pub fn current_plan(&self) -> Option<Plan> {
        self.controller.borrow().current_plan().cloned()
    }

    /// Request a plan for the form and render it unless a newer request started meanwhile.
    pub async fn generate(&self, form: &FormState) -> Completion {
        let ticket = self.update(|c| c.begin_generate(form));
        let result = self.service.generate(&ticket.request).await;
        self.update(|c| c.complete_generate(&ticket, result))
    }

    /// Send the current plan to the export endpoint and download the PDF.
    pub async fn export_current_plan(&self) -> ExportOutcome {
        let job = match self.update(|c| c.begin_export()) {
            Ok(job) => job,
            Err(_) => return ExportOutcome::NoPlan,
        };

        let result = match self.service.export_pdf(&job.plan).await {
            Ok(bytes) if bytes.is_empty() => {
                Err(ClientError::Decode("export returned an empty document".to_string()))
            }
            Ok(bytes) => self
                .downloader
                .save(&bytes, &job.filename, &job.mime)
                .map_err(ClientError::Download),
            Err(e) => Err(e),
        };

        let outcome = if result.is_ok() {
            ExportOutcome::Saved
        } else {
            ExportOutcome::Failed
        };
        self.update(|c| c.finish_export(&job, result));
        outcome
    }

    /// Copy `href` to the clipboard, offering it for manual copy on failure.
    ///
    /// Returns whether the clipboard write succeeded.
    pub async fn share_link(&self, href: &str) -> bool {
        let result = self.clipboard.write_text(href).await;
        let copied = result.is_ok();
        self.update(|c| c.finish_share(href, result));
        copied
    }

    /// Report that the page link could not be read for sharing.
    pub fn share_unavailable(&self, reason: &str) {
        self.update(|c| c.share_unavailable(reason));
    }

    pub fn dismiss_notice(&self) {
        self.update(|c| c.dismiss_notice());
    }

    fn update<R>(&self, f: impl FnOnce(&mut PlanController) -> R) -> R {
        let (result, state) = {
            let mut controller = self.controller.borrow_mut();
            let result = f(&mut controller);
            (result, controller.snapshot())
        };

        // Listeners may subscribe or read the client; release our borrow first.
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&state);
        }

        result
    }
}

#[cfg(test)]
mod tests;
