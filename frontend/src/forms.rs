use std::collections::BTreeMap;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Non-space run, @, non-space run, dot, non-space run. Unanchored.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Message,
    FirstName,
    LastName,
    Phone,
    Company,
    ProjectType,
    Budget,
    Timeline,
    Description,
    Goals,
    TargetAudience,
    Inspiration,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Message => "message",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::ProjectType => "projectType",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
            Field::Description => "description",
            Field::Goals => "goals",
            Field::TargetAudience => "targetAudience",
            Field::Inspiration => "inspiration",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0}")]
    Missing(&'static str),
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("{message}")]
    TooShort { min_len: usize, message: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    Optional,
    Required(&'static str),
    Email,
    Text {
        min_len: usize,
        missing: &'static str,
        too_short: &'static str,
    },
}

impl Rule {
    fn check(&self, value: &str) -> Option<FieldError> {
        let trimmed = value.trim();
        match *self {
            Rule::Optional => None,
            Rule::Required(message) => trimmed.is_empty().then(|| FieldError::Missing(message)),
            Rule::Email => {
                if trimmed.is_empty() {
                    Some(FieldError::Missing("Email is required"))
                } else if !EMAIL_PATTERN.is_match(value) {
                    Some(FieldError::InvalidEmail)
                } else {
                    None
                }
            }
            Rule::Text { min_len, missing, too_short } => {
                if trimmed.is_empty() {
                    Some(FieldError::Missing(missing))
                } else if trimmed.chars().count() < min_len {
                    Some(FieldError::TooShort { min_len, message: too_short })
                } else {
                    None
                }
            }
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Rule::Optional)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub field: Field,
    pub rule: Rule,
    pub max_len: Option<usize>,
}

impl FieldSpec {
    const fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule, max_len: None }
    }

    const fn max(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(Field::Name, Rule::Required("Name is required")),
    FieldSpec::new(Field::Email, Rule::Email),
    FieldSpec::new(Field::Mobile, Rule::Optional),
    FieldSpec::new(
        Field::Message,
        Rule::Text {
            min_len: 10,
            missing: "Message is required",
            too_short: "Message must be at least 10 characters",
        },
    )
    .max(500),
];

const PROJECT_INQUIRY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(Field::FirstName, Rule::Required("First name is required")),
    FieldSpec::new(Field::LastName, Rule::Required("Last name is required")),
    FieldSpec::new(Field::Email, Rule::Email),
    FieldSpec::new(Field::Phone, Rule::Optional),
    FieldSpec::new(Field::Company, Rule::Optional),
    FieldSpec::new(Field::ProjectType, Rule::Required("Please select a project type")),
    FieldSpec::new(Field::Budget, Rule::Optional),
    FieldSpec::new(Field::Timeline, Rule::Optional),
    FieldSpec::new(
        Field::Description,
        Rule::Text {
            min_len: 20,
            missing: "Project description is required",
            too_short: "Please provide more details (minimum 20 characters)",
        },
    )
    .max(1000),
    FieldSpec::new(Field::Goals, Rule::Optional).max(500),
    FieldSpec::new(Field::TargetAudience, Rule::Optional).max(300),
    FieldSpec::new(Field::Inspiration, Rule::Optional).max(300),
];

pub const PROJECT_TYPES: &[(&str, &str)] = &[
    ("web-development", "Web Development"),
    ("app-development", "Mobile App Development"),
    ("ecommerce", "E-Commerce Platform"),
    ("saas", "SaaS Application"),
    ("digital-marketing", "Digital Marketing"),
    ("branding-design", "Branding & Design"),
    ("consultation", "Consultation"),
    ("other", "Other"),
];

pub const BUDGETS: &[(&str, &str)] = &[
    ("under-10k", "Under $10,000"),
    ("10k-25k", "$10,000 - $25,000"),
    ("25k-50k", "$25,000 - $50,000"),
    ("50k-100k", "$50,000 - $100,000"),
    ("over-100k", "Over $100,000"),
    ("discuss", "Let's discuss"),
];

pub const TIMELINES: &[(&str, &str)] = &[
    ("asap", "ASAP (Rush project)"),
    ("1-3months", "1-3 months"),
    ("3-6months", "3-6 months"),
    ("6-12months", "6-12 months"),
    ("flexible", "Flexible timeline"),
];

/// Field set, validation rules and timings of one inquiry form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    /// Simulated round trip before the confirmation shows, in ms.
    pub submit_delay: u32,
    /// How long the confirmation stays up before the form resets, in ms.
    pub reset_delay: u32,
}

impl FormConfig {
    pub fn contact() -> Self {
        Self {
            name: "contact",
            fields: CONTACT_FIELDS,
            submit_delay: 2000,
            reset_delay: 3000,
        }
    }

    pub fn project_inquiry() -> Self {
        Self {
            name: "project-inquiry",
            fields: PROJECT_INQUIRY_FIELDS,
            submit_delay: 2000,
            reset_delay: 5000,
        }
    }

    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field == field)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InquiryForm {
    config: FormConfig,
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, FieldError>,
    phase: Phase,
}

impl InquiryForm {
    pub fn new(config: FormConfig) -> Self {
        let values = config
            .fields
            .iter()
            .map(|spec| (spec.field, String::new()))
            .collect();
        Self {
            config,
            values,
            errors: BTreeMap::new(),
            phase: Phase::Editing,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    #[cfg(test)]
    pub fn char_count(&self, field: Field) -> usize {
        self.value(field).chars().count()
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    #[cfg(test)]
    pub fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    /// Overwrites one field and drops its stale error without re-validating.
    /// Fields this form does not have are ignored.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let Some(spec) = self.config.spec(field) else {
            debug!("{} form: ignoring unknown field {}", self.config.name, field.key());
            return;
        };
        let mut value = value.into();
        if let Some(max_len) = spec.max_len {
            if value.chars().count() > max_len {
                value = value.chars().take(max_len).collect();
            }
        }
        self.values.insert(field, value);
        self.errors.remove(&field);
    }

    /// Recomputes the whole error set. True when every rule passes.
    pub fn validate(&mut self) -> bool {
        self.errors = self
            .config
            .fields
            .iter()
            .filter_map(|spec| {
                spec.rule
                    .check(self.value(spec.field))
                    .map(|error| (spec.field, error))
            })
            .collect();
        self.errors.is_empty()
    }

    /// Starts the simulated submission. Returns false and stays in
    /// `Editing` when validation fails; ignored outside `Editing`.
    pub fn submit(&mut self) -> bool {
        if self.phase != Phase::Editing {
            debug!("{} form: submit ignored while {:?}", self.config.name, self.phase);
            return false;
        }
        if !self.validate() {
            info!(
                "{} form: submit rejected with {} error(s)",
                self.config.name,
                self.errors.len()
            );
            return false;
        }
        info!("{} form: submitting", self.config.name);
        debug!("{} form payload: {}", self.config.name, self.payload());
        self.phase = Phase::Submitting;
        true
    }

    /// Delay until the next automatic transition, if one is due.
    pub fn pending_delay(&self) -> Option<u32> {
        match self.phase {
            Phase::Editing => None,
            Phase::Submitting => Some(self.config.submit_delay),
            Phase::Submitted => Some(self.config.reset_delay),
        }
    }

    /// Applies the transition whose timer just elapsed.
    pub fn advance(&mut self) {
        match self.phase {
            Phase::Editing => {}
            Phase::Submitting => {
                info!("{} form: submitted", self.config.name);
                self.phase = Phase::Submitted;
            }
            Phase::Submitted => {
                info!("{} form: reset", self.config.name);
                self.reset();
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// What a real backend would have received: the non-empty fields.
    pub fn payload(&self) -> serde_json::Value {
        let map = self
            .values
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(field, value)| (field.key().to_string(), serde_json::Value::from(value.trim())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_with(fields: &[(Field, &str)]) -> InquiryForm {
        let mut form = InquiryForm::new(FormConfig::contact());
        for (field, value) in fields {
            form.update_field(*field, *value);
        }
        form
    }

    fn valid_inquiry() -> InquiryForm {
        let mut form = InquiryForm::new(FormConfig::project_inquiry());
        form.update_field(Field::FirstName, "Lee");
        form.update_field(Field::LastName, "Park");
        form.update_field(Field::Email, "lee@park.dev");
        form.update_field(Field::ProjectType, "saas");
        form.update_field(Field::Description, "A booking platform for yoga studios");
        form
    }

    #[test]
    fn each_required_contact_field_blocks_submission_alone() {
        let complete = [
            (Field::Name, "Ann"),
            (Field::Email, "ann@x.com"),
            (Field::Message, "Please build me a website"),
        ];
        for blank in [Field::Name, Field::Email, Field::Message] {
            let mut form = contact_with(&complete);
            form.update_field(blank, "   ");
            assert!(!form.submit());
            assert_eq!(form.phase(), Phase::Editing);
            assert_eq!(form.errors().len(), 1, "only {:?} should fail", blank);
            assert!(form.error(blank).is_some());
        }
    }

    #[test]
    fn each_required_inquiry_field_blocks_submission_alone() {
        for blank in [
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::ProjectType,
            Field::Description,
        ] {
            let mut form = valid_inquiry();
            form.update_field(blank, "");
            assert!(!form.submit());
            assert_eq!(form.phase(), Phase::Editing);
            assert_eq!(form.errors().keys().copied().collect::<Vec<_>>(), vec![blank]);
        }
    }

    #[test]
    fn complete_forms_validate_clean() {
        let mut form = contact_with(&[
            (Field::Name, "Ann"),
            (Field::Email, "ann@x.com"),
            (Field::Message, "Hello there!"),
        ]);
        assert!(form.validate());
        assert!(form.errors().is_empty());

        let mut form = valid_inquiry();
        assert!(form.validate());
    }

    #[test]
    fn email_pattern() {
        for (email, ok) in [("a@b.co", true), ("not-an-email", false), ("", false), ("a@b", false)] {
            let mut form = contact_with(&[
                (Field::Name, "Ann"),
                (Field::Email, email),
                (Field::Message, "Long enough message"),
            ]);
            assert_eq!(form.validate(), ok, "{email:?}");
        }
        let mut form = contact_with(&[(Field::Email, "not-an-email")]);
        form.validate();
        assert_eq!(form.error(Field::Email), Some(&FieldError::InvalidEmail));
        let mut form = contact_with(&[]);
        form.validate();
        assert_eq!(form.error(Field::Email), Some(&FieldError::Missing("Email is required")));
    }

    #[test]
    fn minimum_length_counts_trimmed_characters() {
        let mut form = contact_with(&[
            (Field::Name, "Ann"),
            (Field::Email, "ann@x.com"),
            (Field::Message, "  123456789  "),
        ]);
        assert!(!form.validate());
        assert_eq!(
            form.error(Field::Message).map(ToString::to_string).as_deref(),
            Some("Message must be at least 10 characters")
        );
        form.update_field(Field::Message, "  1234567890  ");
        assert!(form.validate());

        let mut form = valid_inquiry();
        form.update_field(Field::Description, "x".repeat(19));
        assert!(!form.validate());
        form.update_field(Field::Description, "é".repeat(20));
        assert!(form.validate());
    }

    #[test]
    fn update_clears_only_its_own_error() {
        let mut form = contact_with(&[]);
        form.validate();
        assert_eq!(form.errors().len(), 3);

        form.update_field(Field::Email, "still bad");
        assert!(form.error(Field::Email).is_none());
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Message).is_some());
        assert_eq!(form.value(Field::Email), "still bad");
    }

    #[test]
    fn optional_fields_never_error_but_are_truncated() {
        let mut form = valid_inquiry();
        form.update_field(Field::Phone, "???");
        form.update_field(Field::Budget, "");
        form.update_field(Field::TargetAudience, "a".repeat(400));
        assert!(form.validate());
        assert_eq!(form.char_count(Field::TargetAudience), 300);

        form.update_field(Field::Description, "ü".repeat(1200));
        assert_eq!(form.char_count(Field::Description), 1000);
    }

    #[test]
    fn contact_scenario_runs_full_lifecycle() {
        let mut form = contact_with(&[
            (Field::Name, "Ann"),
            (Field::Email, "ann@x.com"),
            (Field::Message, "Please build me a website for my bakery"),
        ]);
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.pending_delay(), None);

        assert!(form.submit());
        assert_eq!(form.phase(), Phase::Submitting);
        assert_eq!(form.pending_delay(), Some(2000));

        form.advance();
        assert_eq!(form.phase(), Phase::Submitted);
        assert!(form.errors().is_empty());
        assert_eq!(form.pending_delay(), Some(3000));

        form.advance();
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Message), "");
        assert!(form.errors().is_empty());
        assert_eq!(form.pending_delay(), None);
    }

    #[test]
    fn inquiry_scenario_reports_all_errors_at_once() {
        let mut form = InquiryForm::new(FormConfig::project_inquiry());
        form.update_field(Field::FirstName, "");
        form.update_field(Field::LastName, "Lee");
        form.update_field(Field::Email, "bad-email");
        form.update_field(Field::Description, "short");

        assert!(!form.submit());
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.error(Field::FirstName), Some(&FieldError::Missing("First name is required")));
        assert_eq!(form.error(Field::Email), Some(&FieldError::InvalidEmail));
        assert!(matches!(
            form.error(Field::Description),
            Some(FieldError::TooShort { min_len: 20, .. })
        ));
        assert!(form.error(Field::ProjectType).is_some());
        assert!(form.error(Field::LastName).is_none());
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn inquiry_form_holds_confirmation_longer() {
        let mut form = valid_inquiry();
        assert!(form.submit());
        form.advance();
        assert_eq!(form.pending_delay(), Some(5000));
    }

    #[test]
    fn submit_is_ignored_outside_editing() {
        let mut form = valid_inquiry();
        assert!(form.submit());
        assert!(!form.submit());
        assert_eq!(form.phase(), Phase::Submitting);
        form.advance();
        assert!(!form.submit());
        assert_eq!(form.phase(), Phase::Submitted);
    }

    #[test]
    fn advance_in_editing_changes_nothing() {
        let mut form = contact_with(&[(Field::Name, "Ann")]);
        form.advance();
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.value(Field::Name), "Ann");
    }

    #[test]
    fn payload_skips_blank_fields() {
        let form = contact_with(&[(Field::Name, " Ann "), (Field::Email, "ann@x.com")]);
        assert_eq!(
            form.payload(),
            serde_json::json!({ "name": "Ann", "email": "ann@x.com" })
        );
    }

    #[test]
    fn fields_outside_the_form_are_ignored() {
        let mut form = contact_with(&[(Field::Name, "Ann"), (Field::Budget, "stray")]);
        assert_eq!(form.value(Field::Budget), "");
        assert_eq!(form.payload(), serde_json::json!({ "name": "Ann" }));

        form.update_field(Field::ProjectType, "saas");
        assert!(!form.validate());
        assert!(form.error(Field::ProjectType).is_none());
        assert!(form.payload().get("projectType").is_none());
    }
}
