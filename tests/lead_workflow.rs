//! Submission workflow scenarios, driven the way the contact form drives them.

use std::cell::RefCell;

use alicerce::analytics::{AnalyticsEvent, AnalyticsSink, FORM_LEAD_SUCCESS};
use alicerce::models::{ContactSubmission, OutboundPayload};
use alicerce::validation::Field;
use alicerce::workflow::{
    LeadForm, Notification, Notifier, SubmitBlocked, SubmitError, SubmitOutcome, SubmitState,
    Variant, SEND_FAILED_MESSAGE,
};

#[derive(Default)]
struct Toasts(RefCell<Vec<Notification>>);

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}

#[derive(Default)]
struct Queue(RefCell<Vec<AnalyticsEvent>>);

impl AnalyticsSink for Queue {
    fn push(&self, event: AnalyticsEvent) {
        self.0.borrow_mut().push(event);
    }
}

fn fill_ana(form: &mut LeadForm) {
    form.set(Field::Name, "Ana Souza".into());
    form.set(Field::Email, "ana@ex.com".into());
    form.set(Field::Phone, "11987654321".into());
    form.set(Field::ProjectType, "residencial".into());
    form.set(Field::Message, "Preciso de um projeto residencial novo.".into());
}

#[test]
fn ana_souza_scenario_succeeds() {
    let (toasts, queue) = (Toasts::default(), Queue::default());
    let mut form = LeadForm::new();
    fill_ana(&mut form);

    assert_eq!(form.value(Field::Phone), "(11) 98765-4321");

    let snapshot = form.begin_submit().unwrap();
    assert_eq!(form.state(), SubmitState::Submitting);

    let payload = OutboundPayload::new(&snapshot, chrono::Utc::now());
    assert_eq!(payload.project_type, "residencial");
    assert_eq!(payload.phone, "(11) 98765-4321");
    assert!(!payload.timestamp.is_empty());

    let outcome = form.finish_submit(Ok(()), &toasts, &queue);

    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(queue.0.borrow().as_slice(), &[AnalyticsEvent::lead_success()]);
    assert_eq!(queue.0.borrow()[0].event, FORM_LEAD_SUCCESS);

    let shown = toasts.0.borrow();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].variant, Variant::Success);

    assert_eq!(form.record(), &ContactSubmission::default());
    assert_eq!(form.state(), SubmitState::Idle);
    assert_eq!(form.error(Field::Name), None);
}

#[test]
fn rejected_delivery_keeps_record() {
    let (toasts, queue) = (Toasts::default(), Queue::default());
    let mut form = LeadForm::new();
    fill_ana(&mut form);
    let before = form.record().clone();

    form.begin_submit().unwrap();
    let outcome = form.finish_submit(
        Err(SubmitError::Endpoint("webhook rejected the lead with status 500".into())),
        &toasts,
        &queue,
    );

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(queue.0.borrow().is_empty());

    let shown = toasts.0.borrow();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].variant, Variant::Destructive);
    assert_eq!(shown[0].description, SEND_FAILED_MESSAGE);
    assert!(!shown[0].description.contains("500"));

    assert_eq!(form.record(), &before);
    assert_eq!(form.state(), SubmitState::Idle);
}

#[test]
fn retry_after_failure_is_allowed() {
    let (toasts, queue) = (Toasts::default(), Queue::default());
    let mut form = LeadForm::new();
    fill_ana(&mut form);

    form.begin_submit().unwrap();
    form.finish_submit(Err(SubmitError::Endpoint("timeout".into())), &toasts, &queue);

    form.begin_submit().unwrap();
    assert_eq!(form.finish_submit(Ok(()), &toasts, &queue), SubmitOutcome::Delivered);
    assert_eq!(queue.0.borrow().len(), 1);
    assert_eq!(toasts.0.borrow().len(), 2);
}

#[test]
fn second_submit_while_in_flight_is_blocked() {
    let mut form = LeadForm::new();
    fill_ana(&mut form);

    form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
    assert!(form.is_submitting());
}

#[test]
fn invalid_record_never_enters_submitting() {
    let mut form = LeadForm::new();
    fill_ana(&mut form);
    form.set(Field::Name, "Al".into());

    match form.begin_submit() {
        Err(SubmitBlocked::Invalid(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.get(Field::Name).is_some());
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert_eq!(form.state(), SubmitState::Idle);
}

#[test]
fn other_project_type_needs_description() {
    let mut form = LeadForm::new();
    fill_ana(&mut form);
    form.set(Field::ProjectType, "outro".into());

    assert!(matches!(form.begin_submit(), Err(SubmitBlocked::Invalid(_))));
    assert_eq!(form.error(Field::OtherProjectType), Some("Please specify the project type"));

    form.set(Field::OtherProjectType, "Galpão logístico".into());
    let snapshot = form.begin_submit().unwrap();
    let payload = OutboundPayload::new(&snapshot, chrono::Utc::now());
    assert_eq!(payload.project_type, "Galpão logístico");
}
