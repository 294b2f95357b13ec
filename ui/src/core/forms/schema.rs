//! Static descriptions of the lead forms: which steps, which fields, which are required.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    Phone,
    Url,
    Select(&'static [&'static str]),
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the submitted JSON object; also the translation key suffix.
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    /// Translation key of the step heading.
    pub title_key: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    pub id: &'static str,
    pub steps: &'static [StepSpec],
}

impl FormSchema {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }
}

pub const CATEGORIES: &[&str] = &[
    "fashion",
    "food-and-beverage",
    "entertainment",
    "health-and-beauty",
    "services",
    "electronics",
];

pub const TARGET_MARKETS: &[&str] = &["families", "youth", "professionals", "tourists"];

pub const AGE_GROUPS: &[&str] = &["18-24", "25-34", "35-44", "45-plus"];

pub const LOCATIONS: &[&str] = &["ground-floor", "first-floor", "food-court", "outdoor-plaza"];

pub const LEASING_FORM: FormSchema = FormSchema {
    id: "leasing",
    steps: &[
        StepSpec {
            title_key: "leasing-step-company",
            fields: &[
                FieldSpec::required("company_name", FieldKind::Text),
                FieldSpec::required("company_email", FieldKind::Email),
                FieldSpec::required("company_phone", FieldKind::Phone),
                FieldSpec::optional("company_website", FieldKind::Url),
            ],
        },
        StepSpec {
            title_key: "leasing-step-contact",
            fields: &[
                FieldSpec::required("contact_name", FieldKind::Text),
                FieldSpec::optional("contact_position", FieldKind::Text),
                FieldSpec::required("contact_email", FieldKind::Email),
                FieldSpec::required("contact_phone", FieldKind::Phone),
            ],
        },
        StepSpec {
            title_key: "leasing-step-brand",
            fields: &[
                FieldSpec::required("brand_name", FieldKind::Text),
                FieldSpec::required("brand_description", FieldKind::LongText),
                FieldSpec::optional("brand_logo", FieldKind::File),
            ],
        },
        StepSpec {
            title_key: "leasing-step-categories",
            fields: &[
                FieldSpec::required("category", FieldKind::Select(CATEGORIES)),
                FieldSpec::optional("sub_category", FieldKind::Text),
            ],
        },
        StepSpec {
            title_key: "leasing-step-market",
            fields: &[
                FieldSpec::required("target_market", FieldKind::Select(TARGET_MARKETS)),
                FieldSpec::optional("age_group", FieldKind::Select(AGE_GROUPS)),
            ],
        },
        StepSpec {
            title_key: "leasing-step-location",
            fields: &[
                FieldSpec::required("preferred_location", FieldKind::Select(LOCATIONS)),
                FieldSpec::optional("unit_size", FieldKind::Text),
                FieldSpec::optional("notes", FieldKind::LongText),
            ],
        },
    ],
};

pub const CONTACT_FORM: FormSchema = FormSchema {
    id: "contact",
    steps: &[StepSpec {
        title_key: "contact-form-title",
        fields: &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::required("email", FieldKind::Email),
            FieldSpec::required("phone", FieldKind::Phone),
            FieldSpec::optional("subject", FieldKind::Text),
            FieldSpec::required("message", FieldKind::LongText),
        ],
    }],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn leasing_has_six_steps_in_order() {
        let titles: Vec<_> = LEASING_FORM.steps.iter().map(|s| s.title_key).collect();
        assert_eq!(
            titles,
            [
                "leasing-step-company",
                "leasing-step-contact",
                "leasing-step-brand",
                "leasing-step-categories",
                "leasing-step-market",
                "leasing-step-location",
            ]
        );
    }

    #[test]
    fn field_names_are_unique_per_form() {
        for schema in [LEASING_FORM, CONTACT_FORM] {
            let mut seen = HashSet::new();
            for field in schema.fields() {
                assert!(seen.insert(field.name), "duplicate field {}", field.name);
            }
        }
    }
}
