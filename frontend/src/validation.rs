//! Schema-driven validation for the lead forms.
//!
//! Empty values count as absent: a required field reports its "required"
//! message, an optional one passes without running its other rules. For a
//! present value the first failing rule wins.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-()]+$").expect("valid phone pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Missing(&'static str),
    #[error("{0}")]
    TooShort(&'static str),
    #[error("{0}")]
    Malformed(&'static str),
    #[error("{0}")]
    NotAllowed(&'static str),
}

#[derive(Debug, Clone)]
pub enum Rule {
    MinLen(usize, &'static str),
    Email(&'static str),
    Phone(&'static str),
    OneOf(&'static [&'static str], &'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Rule::MinLen(min, message) => {
                if value.chars().count() < *min {
                    return Err(ValidationError::TooShort(message));
                }
            }
            Rule::Email(message) => {
                if !EMAIL_RE.is_match(value) {
                    return Err(ValidationError::Malformed(message));
                }
            }
            Rule::Phone(message) => {
                if !PHONE_RE.is_match(value) {
                    return Err(ValidationError::Malformed(message));
                }
            }
            Rule::OneOf(allowed, message) => {
                if !allowed.iter().any(|option| *option == value) {
                    return Err(ValidationError::NotAllowed(message));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub initial: &'static str,
    pub required: Option<&'static str>,
    pub rules: Vec<Rule>,
}

impl Field {
    pub fn optional(name: &'static str) -> Self {
        Self {
            name,
            initial: "",
            required: None,
            rules: Vec::new(),
        }
    }

    pub fn required(name: &'static str, message: &'static str) -> Self {
        Self {
            required: Some(message),
            ..Self::optional(name)
        }
    }

    pub fn initial(mut self, value: &'static str) -> Self {
        self.initial = value;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return match self.required {
                Some(message) => Err(ValidationError::Missing(message)),
                None => Ok(()),
            };
        }
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }
}

#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<Field>,
}

pub type FieldErrors = BTreeMap<&'static str, ValidationError>;

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn validate(&self, values: &BTreeMap<&'static str, String>) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|field| {
                let value = values.get(field.name).map(String::as_str).unwrap_or("");
                field.check(value).err().map(|err| (field.name, err))
            })
            .collect()
    }
}

/// Home page "get in touch" form.
pub static CONTACT_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        Field::required("first_name", "First name is required"),
        Field::required("last_name", "Last name is required"),
        Field::required("company", "Company is required"),
        Field::required("job_title", "Job title is required"),
        Field::required("country", "Country is required"),
        Field::optional("phone_number"),
        Field::required("email", "Work email is required")
            .rule(Rule::Email("Invalid email address")),
    ])
});

pub const PLANS: &[&str] = &["news", "projects"];

/// "Book a demo" lead form.
pub static DEMO_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        Field::required("first_name", "First name is required")
            .rule(Rule::MinLen(2, "First name must be at least 2 characters")),
        Field::required("last_name", "Last name is required")
            .rule(Rule::MinLen(2, "Last name must be at least 2 characters")),
        Field::required("company", "Company is required")
            .rule(Rule::MinLen(2, "Company name must be at least 2 characters")),
        Field::required("job_title", "Job title is required")
            .rule(Rule::MinLen(2, "Job title must be at least 2 characters")),
        Field::required("country", "Country is required"),
        Field::required("phone_code", "Phone code is required").initial("US"),
        Field::optional("phone_number")
            .rule(Rule::Phone("Please enter a valid phone number"))
            .rule(Rule::MinLen(10, "Phone number must be at least 10 digits")),
        Field::required("email", "Work email is required")
            .rule(Rule::Email("Please enter a valid email address")),
        Field::required("plan", "Plan selection is required")
            .rule(Rule::OneOf(PLANS, "Please select a plan")),
    ])
});

/// Values plus touched bookkeeping for one form instance.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: &'static Schema,
    values: BTreeMap<&'static str, String>,
    touched: BTreeSet<&'static str>,
    submitted: bool,
}

impl PartialEq for FormState {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema)
            && self.values == other.values
            && self.touched == other.touched
            && self.submitted == other.submitted
    }
}

impl FormState {
    pub fn new(schema: &'static Schema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|field| (field.name, field.initial.to_string()))
            .collect();
        Self {
            schema,
            values,
            touched: BTreeSet::new(),
            submitted: false,
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Unknown field names are ignored.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(field) {
            *slot = value.into();
            self.submitted = false;
        }
    }

    pub fn touch(&mut self, field: &str) {
        if let Some(field) = self.schema.fields().iter().find(|f| f.name == field) {
            self.touched.insert(field.name);
        }
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn errors(&self) -> FieldErrors {
        self.schema.validate(&self.values)
    }

    /// Error to show next to a field: only once the user has been there.
    pub fn visible_error(&self, field: &str) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().get(field).map(ToString::to_string)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Marks every field touched and returns the values if they pass.
    pub fn submit(&mut self) -> Result<BTreeMap<&'static str, String>, FieldErrors> {
        self.touched = self.schema.fields().iter().map(|f| f.name).collect();
        let errors = self.errors();
        if !errors.is_empty() {
            self.submitted = false;
            return Err(errors);
        }
        self.submitted = true;
        Ok(self.values.clone())
    }

    pub fn reset(&mut self) {
        *self = FormState::new(self.schema);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_demo() -> FormState {
        let mut form = FormState::new(&DEMO_SCHEMA);
        form.set("first_name", "Ada");
        form.set("last_name", "Obi");
        form.set("company", "Obi Builders");
        form.set("job_title", "CTO");
        form.set("country", "NG");
        form.set("email", "ada@obibuilders.ng");
        form.set("plan", "projects");
        form
    }

    #[test]
    fn empty_demo_form_reports_required_messages() {
        let form = FormState::new(&DEMO_SCHEMA);
        let errors = form.errors();
        assert_eq!(
            errors.get("first_name"),
            Some(&ValidationError::Missing("First name is required"))
        );
        assert_eq!(
            errors.get("plan").map(ToString::to_string).as_deref(),
            Some("Plan selection is required")
        );
        // phone code defaults to US, phone number is optional
        assert!(!errors.contains_key("phone_code"));
        assert!(!errors.contains_key("phone_number"));
        assert_eq!(form.value("phone_code"), "US");
    }

    #[test]
    fn filled_demo_form_passes() {
        let mut form = filled_demo();
        assert!(form.errors().is_empty());
        let values = form.submit().expect("valid form");
        assert_eq!(values["plan"], "projects");
        assert!(form.is_submitted());
    }

    #[test]
    fn short_names_fail_min_length() {
        let mut form = filled_demo();
        form.set("first_name", "A");
        assert_eq!(
            form.errors().get("first_name"),
            Some(&ValidationError::TooShort("First name must be at least 2 characters"))
        );
    }

    #[test]
    fn phone_number_checks_pattern_then_length() {
        let mut form = filled_demo();
        form.set("phone_number", "080-abc");
        assert_eq!(
            form.errors().get("phone_number").map(ToString::to_string).as_deref(),
            Some("Please enter a valid phone number")
        );
        form.set("phone_number", "0803 123");
        assert_eq!(
            form.errors().get("phone_number").map(ToString::to_string).as_deref(),
            Some("Phone number must be at least 10 digits")
        );
        form.set("phone_number", "(0803) 123-4567");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn plan_must_be_known() {
        let mut form = filled_demo();
        form.set("plan", "enterprise");
        assert_eq!(
            form.errors().get("plan"),
            Some(&ValidationError::NotAllowed("Please select a plan"))
        );
    }

    #[test]
    fn contact_form_checks_email_shape() {
        let mut form = FormState::new(&CONTACT_SCHEMA);
        form.set("email", "not-an-email");
        assert_eq!(
            form.errors().get("email").map(ToString::to_string).as_deref(),
            Some("Invalid email address")
        );
        form.set("email", "someone@example.com");
        assert!(!form.errors().contains_key("email"));
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut form = FormState::new(&CONTACT_SCHEMA);
        assert_eq!(form.visible_error("company"), None);
        form.touch("company");
        assert_eq!(form.visible_error("company").as_deref(), Some("Company is required"));
        form.touch("no_such_field");
        assert!(!form.is_touched("no_such_field"));
    }

    #[test]
    fn failed_submit_touches_everything() {
        let mut form = FormState::new(&CONTACT_SCHEMA);
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(form.is_touched("phone_number"));
        assert_eq!(form.visible_error("last_name").as_deref(), Some("Last name is required"));
        assert!(!form.is_submitted());
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut form = filled_demo();
        form.touch("email");
        form.reset();
        assert_eq!(form, FormState::new(&DEMO_SCHEMA));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let field = Field::required("company", "Company is required");
        assert_eq!(field.check("   "), Err(ValidationError::Missing("Company is required")));
    }
}
