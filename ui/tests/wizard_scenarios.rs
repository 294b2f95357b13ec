//! End-to-end walks through the leasing and contact wizards with an
//! in-memory sink in place of the HTTP client.

use std::cell::RefCell;
use std::fmt;

use futures::executor::block_on;
use serde_json::Value;
use ui::core::forms::wizard::{SUBMIT_ERROR_KEY, SUBMIT_SUCCESS_KEY};
use ui::core::forms::{
    FieldIssue, FieldValue, FormSink, FormWizard, StepChange, SubmitBlocked, CONTACT_FORM,
    LEASING_FORM,
};
use ui::core::notify::NoticeKind;

#[derive(Debug)]
struct Refused;

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("server said no")
    }
}

#[derive(Default)]
struct RecordingSink {
    fail: bool,
    sent: RefCell<Vec<Value>>,
}

impl FormSink for RecordingSink {
    type Error = Refused;

    async fn send(&self, payload: &Value) -> Result<(), Refused> {
        self.sent.borrow_mut().push(payload.clone());
        if self.fail {
            Err(Refused)
        } else {
            Ok(())
        }
    }
}

fn filled_leasing_wizard() -> FormWizard {
    let mut wizard = FormWizard::new(LEASING_FORM);
    let answers: &[&[(&str, &str)]] = &[
        &[
            ("company_name", "Oud House Trading"),
            ("company_email", "leasing@oudhouse.example"),
            ("company_phone", "+966 11 555 0100"),
        ],
        &[
            ("contact_name", "Sara Al-Harbi"),
            ("contact_email", "sara@oudhouse.example"),
            ("contact_phone", "(011) 555-0101"),
        ],
        &[
            ("brand_name", "Oud House"),
            ("brand_description", "Perfumes and incense from the peninsula."),
        ],
        &[("category", "health-and-beauty")],
        &[("target_market", "families"), ("age_group", "25-34")],
        &[("preferred_location", "ground-floor")],
    ];

    for (index, step) in answers.iter().enumerate() {
        assert_eq!(wizard.step(), index);
        for (name, text) in step.iter() {
            assert!(wizard.set_text(name, *text), "unknown field {name}");
        }
        if index + 1 < answers.len() {
            assert_eq!(
                wizard.go_next(),
                StepChange::Advanced {
                    from: index,
                    to: index + 1
                }
            );
        }
    }
    assert!(wizard.is_final_step());
    wizard
}

#[test]
fn missing_email_blocks_the_first_step() {
    let mut wizard = FormWizard::new(LEASING_FORM);
    wizard.set_text("company_name", "Oud House Trading");
    wizard.set_text("company_phone", "+966 11 555 0100");

    assert!(!wizard.can_advance());
    assert_eq!(
        wizard.go_next(),
        StepChange::Blocked {
            issues: vec![FieldIssue::Missing("company_email")]
        }
    );
    assert_eq!(wizard.step(), 0);

    wizard.set_text("company_email", "not an email");
    assert_eq!(
        wizard.go_next(),
        StepChange::Blocked {
            issues: vec![FieldIssue::Malformed("company_email")]
        }
    );
    assert_eq!(wizard.step(), 0);
}

#[test]
fn successful_submit_resets_the_form() {
    let mut wizard = filled_leasing_wizard();
    wizard.set_field(
        "brand_logo",
        FieldValue::File {
            name: "logo.png".into(),
            size: 2048,
        },
    );
    let sink = RecordingSink::default();

    let notice = block_on(wizard.submit(&sink)).expect("submit allowed");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message_key, SUBMIT_SUCCESS_KEY);

    let sent = sink.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["company_email"], "leasing@oudhouse.example");
    assert_eq!(sent[0]["brand_logo"], "logo.png");
    assert_eq!(sent[0]["company_website"], "");

    assert_eq!(wizard.step(), 0);
    assert!(!wizard.is_submitting());
    assert!(wizard
        .data()
        .iter()
        .all(|(_, value)| value.is_blank()));
}

#[test]
fn failed_submit_keeps_what_was_typed() {
    let mut wizard = filled_leasing_wizard();
    let sink = RecordingSink {
        fail: true,
        ..RecordingSink::default()
    };

    let notice = block_on(wizard.submit(&sink)).expect("submit allowed");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message_key, SUBMIT_ERROR_KEY);
    assert_eq!(notice.detail.as_deref(), Some("server said no"));

    assert!(wizard.is_final_step());
    assert!(!wizard.is_submitting());
    assert_eq!(wizard.data().text("brand_name"), "Oud House");

    // Retrying after a failure is allowed.
    let retry = RecordingSink::default();
    let notice = block_on(wizard.submit(&retry)).expect("retry allowed");
    assert_eq!(notice.kind, NoticeKind::Success);
}

#[test]
fn second_submit_while_in_flight_is_refused() {
    let mut wizard = filled_leasing_wizard();
    let payload = wizard.begin_submit().expect("first submit");
    assert_eq!(payload["category"], "health-and-beauty");
    assert!(wizard.is_submitting());

    assert_eq!(wizard.begin_submit(), Err(SubmitBlocked::AlreadySubmitting));

    wizard.finish_submit(Ok::<(), Refused>(()));
    assert!(!wizard.is_submitting());
}

#[test]
fn submit_before_the_last_step_is_refused() {
    let mut wizard = FormWizard::new(LEASING_FORM);
    assert_eq!(wizard.begin_submit(), Err(SubmitBlocked::NotOnFinalStep));
}

#[test]
fn select_values_outside_the_options_are_malformed() {
    let mut wizard = filled_leasing_wizard();
    wizard.set_text("preferred_location", "rooftop");
    match wizard.begin_submit() {
        Err(SubmitBlocked::Invalid { step, issues }) => {
            assert_eq!(step, 5);
            assert_eq!(issues, vec![FieldIssue::Malformed("preferred_location")]);
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn contact_form_is_a_single_step() {
    let mut wizard = FormWizard::new(CONTACT_FORM);
    assert!(wizard.is_final_step());
    assert_eq!(wizard.go_next(), StepChange::AtFinalStep);

    wizard.set_text("name", "Layla");
    wizard.set_text("email", "layla@example.com");
    wizard.set_text("phone", "0501234567");
    wizard.set_text("message", "Do you have kiosks available?");

    let sink = RecordingSink::default();
    let notice = block_on(wizard.submit(&sink)).expect("submit allowed");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(sink.sent.borrow()[0]["subject"], "");
}
