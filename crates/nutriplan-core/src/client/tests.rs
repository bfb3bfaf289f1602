//! Tests for the async page actions, driven on a local executor.

use super::*;
use crate::controller::{
    NoticeLevel, COPY_LINK_MANUALLY, EXPORT_WITHOUT_PLAN, LINK_COPIED, SHARE_FAILED,
};
use crate::models::{Meal, MealType};
use crate::request::PreferenceOption;
use crate::view::PlanView;
use futures::channel::oneshot;
use futures::executor::{block_on, LocalPool};
use futures::task::LocalSpawnExt;
use std::collections::VecDeque;

type GenerateReply = Result<Option<Plan>, ClientError>;

/// Service whose generate responses are released by the test
#[derive(Default)]
struct ScriptedService {
    replies: RefCell<VecDeque<oneshot::Receiver<GenerateReply>>>,
    requests: RefCell<Vec<PlanRequest>>,
    exported: RefCell<Vec<Plan>>,
    pdf: RefCell<Option<Result<Vec<u8>, ClientError>>>,
}

impl ScriptedService {
    fn reply_later(&self) -> oneshot::Sender<GenerateReply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }

    fn reply_now(&self, reply: GenerateReply) {
        let _ = self.reply_later().send(reply);
    }
}

impl PlanService for ScriptedService {
    async fn generate(&self, request: &PlanRequest) -> Result<Option<Plan>, ClientError> {
        self.requests.borrow_mut().push(request.clone());
        let rx = self.replies.borrow_mut().pop_front();
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ClientError::Network("cancelled".to_string()))),
            None => Err(ClientError::Network("no scripted reply".to_string())),
        }
    }

    async fn export_pdf(&self, plan: &Plan) -> Result<Vec<u8>, ClientError> {
        self.exported.borrow_mut().push(plan.clone());
        self.pdf
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Ok(b"%PDF-1.4".to_vec()))
    }
}

#[derive(Default)]
struct FakeClipboard {
    writes: RefCell<Vec<String>>,
    deny: bool,
}

impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        self.writes.borrow_mut().push(text.to_string());
        if self.deny {
            Err("NotAllowedError".to_string())
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
struct FakeDownloader {
    saved: RefCell<Vec<(Vec<u8>, String, String)>>,
}

impl Downloader for FakeDownloader {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
        self.saved
            .borrow_mut()
            .push((bytes.to_vec(), filename.to_string(), mime.to_string()));
        Ok(())
    }
}

type TestClient = PlanClient<ScriptedService, FakeClipboard, FakeDownloader>;

fn client() -> TestClient {
    client_with_clipboard(FakeClipboard::default())
}

fn client_with_clipboard(clipboard: FakeClipboard) -> TestClient {
    PlanClient::new(
        ScriptedService::default(),
        clipboard,
        FakeDownloader::default(),
        ExportConfig::default(),
    )
}

fn plan(dinner: &str) -> Plan {
    Plan::new(vec![
        Meal::new("1", MealType::Breakfast, "Porridge", 350).with_tags(["vegan"]),
        Meal::new("2", MealType::Lunch, "Lentil Soup", 550),
        Meal::new("3", MealType::Dinner, dinner, 800),
    ])
}

fn form() -> FormState {
    FormState::new(" curry ", "1800")
        .with_preference(PreferenceOption::new("vegan", "Vegan"), true)
        .with_preference(PreferenceOption::new("low-carb", "Low carb"), true)
        .with_preference(PreferenceOption::new("healthy", "Healthy"), false)
}

// ========================================================================
// Generate
// ========================================================================

#[test]
fn test_generate_sends_request_and_renders() {
    let client = client();
    client.service().reply_now(Ok(Some(plan("Chili"))));

    let completion = block_on(client.generate(&form()));

    assert_eq!(completion, Completion::Applied);
    let requests = client.service().requests.borrow();
    assert_eq!(requests[0].query, "curry");
    assert_eq!(requests[0].calories, "1800");
    assert_eq!(requests[0].prefs, "vegan,low-carb");

    let state = client.snapshot();
    assert_eq!(state.view.cards().len(), 3);
    assert_eq!(state.view.header().unwrap().total_calories, 1700);
    assert_eq!(client.current_plan(), Some(plan("Chili")));
}

#[test]
fn test_listeners_see_in_flight_then_result() {
    let client = client();
    client.service().reply_now(Ok(Some(plan("Chili"))));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    client.subscribe(move |state| sink.borrow_mut().push(state.generating));

    block_on(client.generate(&form()));

    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn test_overlapping_generates_apply_latest_only() {
    let client = client();
    let first_reply = client.service().reply_later();
    let second_reply = client.service().reply_later();

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let first = client.clone();
    spawner
        .spawn_local(async move {
            first.generate(&form()).await;
        })
        .unwrap();
    pool.run_until_stalled();

    let second = client.clone();
    spawner
        .spawn_local(async move {
            second.generate(&form()).await;
        })
        .unwrap();
    pool.run_until_stalled();

    second_reply.send(Ok(Some(plan("Second")))).unwrap();
    pool.run_until_stalled();
    first_reply.send(Ok(Some(plan("First")))).unwrap();
    pool.run_until_stalled();

    assert_eq!(client.service().requests.borrow().len(), 2);
    assert_eq!(client.current_plan(), Some(plan("Second")));
    assert!(!client.snapshot().generating);
}

#[test]
fn test_generate_failure_shows_error_notice() {
    let client = client();
    client.service().reply_now(Err(ClientError::Server {
        status: 500,
        message: "Internal server error".to_string(),
    }));

    block_on(client.generate(&form()));
    let state = client.snapshot();

    assert_eq!(state.view, PlanView::Idle);
    let notice = state.notice.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("Internal server error"));
}

// ========================================================================
// Export
// ========================================================================

#[test]
fn test_export_without_plan_sends_nothing() {
    let client = client();

    let outcome = block_on(client.export_current_plan());

    assert_eq!(outcome, ExportOutcome::NoPlan);
    assert!(client.service().exported.borrow().is_empty());
    assert_eq!(client.snapshot().notice.unwrap().message, EXPORT_WITHOUT_PLAN);
}

#[test]
fn test_export_resends_plan_and_downloads() {
    let client = client();
    client.service().reply_now(Ok(Some(plan("Chili"))));
    block_on(client.generate(&form()));

    let outcome = block_on(client.export_current_plan());

    assert_eq!(outcome, ExportOutcome::Saved);
    assert_eq!(*client.service().exported.borrow(), vec![plan("Chili")]);
    let saved = client.downloader().saved.borrow();
    assert_eq!(saved[0].0, b"%PDF-1.4".to_vec());
    assert_eq!(saved[0].1, "nutriplan_meal_plan.pdf");
    assert_eq!(saved[0].2, "application/pdf");
}

#[test]
fn test_export_empty_document_is_failure() {
    let client = client();
    client.service().reply_now(Ok(Some(plan("Chili"))));
    block_on(client.generate(&form()));
    *client.service().pdf.borrow_mut() = Some(Ok(Vec::new()));

    let outcome = block_on(client.export_current_plan());

    assert_eq!(outcome, ExportOutcome::Failed);
    assert!(client.downloader().saved.borrow().is_empty());
    assert_eq!(client.snapshot().notice.unwrap().level, NoticeLevel::Error);
}

// ========================================================================
// Share
// ========================================================================

#[test]
fn test_share_writes_href_before_notice() {
    let client = client();
    let href = "https://nutriplan.test/?q=curry#plan";

    let clipboard_writes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clipboard_writes);
    let observer = client.clone();
    client.subscribe(move |state| {
        if state.notice.is_some() {
            sink.borrow_mut()
                .extend(observer.clipboard().writes.borrow().iter().cloned());
        }
    });

    assert!(block_on(client.share_link(href)));

    assert_eq!(*clipboard_writes.borrow(), vec![href.to_string()]);
    assert_eq!(client.snapshot().notice.unwrap().message, LINK_COPIED);
}

#[test]
fn test_share_denied_offers_manual_copy() {
    let client = client_with_clipboard(FakeClipboard {
        deny: true,
        ..Default::default()
    });

    assert!(!block_on(client.share_link("https://nutriplan.test/")));

    let notice = client.snapshot().notice.unwrap();
    assert_eq!(notice.message, COPY_LINK_MANUALLY);
    assert_eq!(notice.copy_text.as_deref(), Some("https://nutriplan.test/"));

    client.dismiss_notice();
    assert!(client.snapshot().notice.is_none());
}

#[test]
fn test_share_without_location_notifies_error() {
    let client = client();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    client.subscribe(move |state| sink.borrow_mut().push(state.notice.clone()));

    client.share_unavailable("No window");

    assert!(client.clipboard().writes.borrow().is_empty());
    let notices = seen.borrow();
    let notice = notices[0].as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.starts_with(SHARE_FAILED));
}
