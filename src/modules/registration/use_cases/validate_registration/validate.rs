// Pure validation of the registration form.
//
// Responsibilities
// - Check every field is filled in, then check the email and phone formats.
// - Run every check so all failing fields surface at once.
// - Never touch the form. Callers apply the report to the error slots.

use crate::modules::registration::core::fields::Field;
use crate::modules::registration::use_cases::validate_registration::report::{
    ValidationError, ValidationReport,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("phone pattern compiles"));

/// The email pattern is matched against the raw value, so surrounding
/// whitespace makes an address invalid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE.is_match(&compact)
}

pub fn validate(values: &BTreeMap<Field, String>) -> ValidationReport {
    let value = |field: Field| values.get(&field).map(String::as_str).unwrap_or_default();
    let mut report = ValidationReport::default();

    for field in Field::ALL {
        if value(field).trim().is_empty() {
            report.reject(field, ValidationError::Required);
        }
    }

    let email = value(Field::Email);
    if !email.trim().is_empty() && !is_valid_email(email) {
        report.reject(Field::Email, ValidationError::InvalidEmail);
    }

    let phone = value(Field::Phone);
    if !phone.trim().is_empty() && !is_valid_phone(phone) {
        report.reject(Field::Phone, ValidationError::InvalidPhone);
    }

    report
}

#[cfg(test)]
mod validate_registration_tests {
    use super::*;
    use crate::modules::registration::core::form::RegistrationForm;
    use crate::tests::fixtures::forms::filled_form;
    use rstest::{fixture, rstest};

    #[fixture]
    fn form() -> RegistrationForm {
        filled_form()
    }

    #[rstest]
    fn it_should_accept_a_filled_form(form: RegistrationForm) {
        let report = validate(form.values());
        assert!(report.is_valid());
        assert!(report.field_validity().values().all(|valid| *valid));
    }

    #[rstest]
    fn it_should_report_every_blank_field_at_once() {
        let report = validate(RegistrationForm::new().values());
        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 5);
        assert!(
            report
                .errors()
                .values()
                .all(|error| *error == ValidationError::Required)
        );
    }

    #[rstest]
    fn it_should_report_exactly_the_blank_field(
        mut form: RegistrationForm,
        #[values(Field::Name, Field::Phone, Field::Email, Field::TeamName, Field::UtrNumber)]
        field: Field,
    ) {
        form.set_value(field, "   ");
        let report = validate(form.values());

        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.error(field), Some(ValidationError::Required));
        assert!(!report.field_validity()[&field]);
    }

    #[rstest]
    fn it_should_drop_the_error_once_the_field_is_filled(mut form: RegistrationForm) {
        let original = form.value(Field::TeamName).to_string();
        form.set_value(Field::TeamName, "");
        validate(form.values()).apply_to(&mut form);
        assert!(form.error(Field::TeamName).is_some());

        form.set_value(Field::TeamName, original);
        validate(form.values()).apply_to(&mut form);
        assert!(form.error(Field::TeamName).is_none());
        assert!(form.visible_errors().is_empty());
    }

    #[rstest]
    #[case("a@b.c", true)]
    #[case("ada@example.com", true)]
    #[case("a b@c.d", false)]
    #[case("ab@c", false)]
    #[case("@c.d", false)]
    #[case(" a@b.c", false)]
    fn it_should_check_the_email_shape(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid);
    }

    #[rstest]
    #[case("+14155551234", true)]
    #[case("4155551234", true)]
    #[case("415 555 1234", true)]
    #[case(" +44 20 7946 0958 ", true)]
    #[case("123", false)]
    #[case("12345678901234567", false)]
    #[case("415-555-1234", false)]
    #[case("++14155551234", false)]
    fn it_should_check_the_phone_shape(#[case] phone: &str, #[case] valid: bool) {
        assert_eq!(is_valid_phone(phone), valid);
    }

    #[rstest]
    fn it_should_report_format_errors_together(mut form: RegistrationForm) {
        form.set_value(Field::Email, "ab@c");
        form.set_value(Field::Phone, "123");
        form.set_value(Field::Name, "");

        let report = validate(form.values());

        assert_eq!(report.errors().len(), 3);
        assert_eq!(report.error(Field::Email), Some(ValidationError::InvalidEmail));
        assert_eq!(report.error(Field::Phone), Some(ValidationError::InvalidPhone));
        assert_eq!(report.error(Field::Name), Some(ValidationError::Required));
    }

    #[rstest]
    fn it_should_show_messages_in_the_error_slots(mut form: RegistrationForm) {
        form.set_value(Field::Email, "a b@c.d");
        form.show_error(Field::UtrNumber, "stale");

        validate(form.values()).apply_to(&mut form);

        let errors = form.visible_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Email], "Please enter a valid email address");
    }
}
