//! Pure per-field and per-step checks.

use super::data::{FieldValue, FormData};
use super::schema::{FieldKind, FieldSpec, StepSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Missing(&'static str),
    Malformed(&'static str),
}

impl FieldIssue {
    pub fn field(&self) -> &'static str {
        match self {
            FieldIssue::Missing(name) | FieldIssue::Malformed(name) => name,
        }
    }
}

pub fn check_field(spec: &FieldSpec, value: Option<&FieldValue>) -> Option<FieldIssue> {
    let blank = value.map(FieldValue::is_blank).unwrap_or(true);
    if blank {
        return spec.required.then_some(FieldIssue::Missing(spec.name));
    }
    let text = value.map(FieldValue::as_text).unwrap_or("").trim();
    let well_formed = match spec.kind {
        FieldKind::Email => looks_like_email(text),
        FieldKind::Phone => looks_like_phone(text),
        FieldKind::Select(options) => options.contains(&text),
        _ => true,
    };
    (!well_formed).then_some(FieldIssue::Malformed(spec.name))
}

pub fn step_issues(step: &StepSpec, data: &FormData) -> Vec<FieldIssue> {
    step.fields
        .iter()
        .filter_map(|spec| check_field(spec, data.get(spec.name)))
        .collect()
}

pub fn is_step_valid(step: &StepSpec, data: &FormData) -> bool {
    step.fields
        .iter()
        .all(|spec| check_field(spec, data.get(spec.name)).is_none())
}

pub fn looks_like_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !text.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

pub fn looks_like_phone(text: &str) -> bool {
    let digits = text.chars().filter(char::is_ascii_digit).count();
    digits >= 6
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("sales@manzil.example"));
        assert!(looks_like_email("a.b@c.co"));
        assert!(!looks_like_email("sales@manzil"));
        assert!(!looks_like_email("@manzil.example"));
        assert!(!looks_like_email("a b@c.co"));
        assert!(!looks_like_email("a@b@c.co"));
    }

    #[test]
    fn phone_shapes() {
        assert!(looks_like_phone("+966 (11) 555-0101"));
        assert!(!looks_like_phone("12345"));
        assert!(!looks_like_phone("call me"));
    }

    #[test]
    fn optional_blank_fields_pass() {
        let spec = FieldSpec::optional("company_website", FieldKind::Url);
        assert_eq!(check_field(&spec, None), None);
        let spec = FieldSpec::optional("age_group", FieldKind::Select(&["18-24"]));
        assert_eq!(
            check_field(&spec, Some(&FieldValue::Text("99".into()))),
            Some(FieldIssue::Malformed("age_group"))
        );
    }
}
