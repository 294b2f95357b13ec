//! Lead forms: schemas, collected data, validation and the step wizard.

pub mod data;
pub mod schema;
pub mod sink;
pub mod validation;
pub mod wizard;

pub use data::{FieldValue, FormData};
pub use schema::{FieldKind, FieldSpec, FormSchema, StepSpec, CONTACT_FORM, LEASING_FORM};
pub use sink::ApiFormSink;
pub use validation::FieldIssue;
pub use wizard::{FormSink, FormWizard, StepChange, SubmitBlocked};
