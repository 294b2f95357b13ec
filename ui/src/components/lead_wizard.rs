//! Multi-step lead form and the single-step contact form built on it.

use api::client::CONTACT_FORM_PATH;
use api::{ApiError, Locale};
use dioxus::prelude::*;

use crate::core::forms::{
    ApiFormSink, FieldKind, FieldSpec, FieldValue, FormSchema, FormSink, FormWizard, StepChange,
    CONTACT_FORM,
};
use crate::i18n::{field_label_key, option_label_key, tr};
use crate::services::{push_notice, use_content_client, use_notices};
use crate::t;

/// Renders `schema` one step at a time and posts the collected record to
/// `endpoint` on the last step.
///
/// `on_reanimate` lets a parent replay its own entry animation whenever the
/// visitor moves to another step.
#[component]
pub fn LeadWizard(
    schema: FormSchema,
    endpoint: &'static str,
    locale: ReadOnlySignal<Locale>,
    #[props(default)] on_reanimate: Option<EventHandler<()>>,
) -> Element {
    let mut wizard = use_signal(|| FormWizard::new(schema));
    let notices = use_notices();
    let client = use_content_client();

    let step = wizard.read().step();
    let step_count = wizard.read().step_count();
    let spec = wizard.read().current_step();
    let is_final = wizard.read().is_final_step();
    let can_advance = wizard.read().can_advance();
    let submitting = wizard.read().is_submitting();
    let step_number = step + 1;

    let notify_parent = move || {
        if let Some(handler) = on_reanimate {
            handler.call(());
        }
    };

    let on_next = move |_| {
        let change = wizard.write().go_next();
        match change {
            StepChange::Advanced { from, to } => {
                tracing::debug!(form = schema.id, from, to, "step advanced");
                notify_parent();
            }
            StepChange::Blocked { issues } => {
                tracing::debug!(form = schema.id, ?issues, "step blocked");
            }
            StepChange::AtFinalStep => {}
        }
    };

    let on_previous = move |_| {
        if wizard.write().go_previous() {
            notify_parent();
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match wizard.write().begin_submit() {
            Ok(payload) => payload,
            Err(blocked) => {
                tracing::debug!(form = schema.id, ?blocked, "submit refused");
                return;
            }
        };
        let sink = client
            .clone()
            .map(|client| ApiFormSink::new(client, locale(), endpoint));
        spawn(async move {
            let outcome = match sink {
                Some(sink) => sink.send(&payload).await,
                None => Err(ApiError::Config {
                    message: "content API client is not configured".to_string(),
                }),
            };
            let succeeded = outcome.is_ok();
            let notice = wizard.write().finish_submit(outcome);
            push_notice(notices, notice);
            if succeeded {
                notify_parent();
            }
        });
    };

    rsx! {
        form {
            class: "wizard",
            novalidate: true,
            onsubmit: on_submit,
            if step_count > 1 {
                div { class: "wizard__progress",
                    span { class: "wizard__counter",
                        {t!("form-step-counter", current = step_number, total = step_count)}
                    }
                    ol { class: "wizard__dots",
                        for index in 0..step_count {
                            li {
                                key: "{index}",
                                class: if index <= step { "wizard__dot wizard__dot--done" } else { "wizard__dot" },
                            }
                        }
                    }
                }
            }
            // Keyed by step so the entry animation replays on every move.
            fieldset { key: "{step}", class: "wizard__step wizard__step--enter",
                legend { class: "wizard__title", {tr(spec.title_key)} }
                for field in spec.fields.iter() {
                    FieldInput { key: "{field.name}", field: *field, wizard }
                }
            }
            div { class: "wizard__actions",
                if step > 0 {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: submitting,
                        onclick: on_previous,
                        {t!("form-previous")}
                    }
                }
                if is_final {
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: submitting || !wizard.read().is_step_valid(step),
                        if submitting { {t!("form-submitting")} } else { {t!("form-submit")} }
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: !can_advance,
                        onclick: on_next,
                        {t!("form-next")}
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(field: FieldSpec, wizard: Signal<FormWizard>) -> Element {
    let name = field.name;
    let input_id = format!("field-{name}");
    let label = tr(&field_label_key(name));
    let value = wizard.read().data().text(name).to_string();
    let mut wizard = wizard;

    let on_text = move |evt: FormEvent| {
        wizard.write().set_text(name, evt.value());
    };

    let control = match field.kind {
        FieldKind::LongText => rsx! {
            textarea {
                id: "{input_id}",
                name: "{name}",
                rows: 4,
                required: field.required,
                value: "{value}",
                oninput: on_text,
            }
        },
        FieldKind::Select(options) => rsx! {
            select {
                id: "{input_id}",
                name: "{name}",
                required: field.required,
                value: "{value}",
                oninput: on_text,
                option { value: "", disabled: true, selected: value.is_empty(), {t!("form-select-placeholder")} }
                for choice in options.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: value == *choice,
                        {tr(&option_label_key(name, choice))}
                    }
                }
            }
        },
        FieldKind::File => rsx! {
            input {
                id: "{input_id}",
                name: "{name}",
                r#type: "file",
                accept: "image/*",
                onchange: move |evt: FormEvent| {
                    let Some(engine) = evt.files() else {
                        return;
                    };
                    let Some(file_name) = engine.files().into_iter().next() else {
                        return;
                    };
                    spawn(async move {
                        let size = engine.file_size(&file_name).await.unwrap_or(0);
                        wizard.write().set_field(name, FieldValue::File { name: file_name, size });
                    });
                },
            }
            if !value.is_empty() {
                span { class: "wizard__file-name", "{value}" }
            }
        },
        kind => rsx! {
            input {
                id: "{input_id}",
                name: "{name}",
                r#type: input_type(kind),
                required: field.required,
                value: "{value}",
                oninput: on_text,
            }
        },
    };

    rsx! {
        div { class: if field.required { "wizard__field wizard__field--required" } else { "wizard__field" },
            label { r#for: "{input_id}", "{label}" }
            {control}
        }
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Phone => "tel",
        FieldKind::Url => "url",
        _ => "text",
    }
}

/// The contact page form: a single step, same flow and notices.
#[component]
pub fn ContactForm(locale: ReadOnlySignal<Locale>) -> Element {
    rsx! {
        LeadWizard { schema: CONTACT_FORM, endpoint: CONTACT_FORM_PATH, locale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_types_follow_field_kind() {
        assert_eq!(input_type(FieldKind::Email), "email");
        assert_eq!(input_type(FieldKind::Phone), "tel");
        assert_eq!(input_type(FieldKind::Url), "url");
        assert_eq!(input_type(FieldKind::Text), "text");
    }
}
