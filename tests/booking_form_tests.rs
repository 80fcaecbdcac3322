use turfbook::booking::{BookingForm, Field, FieldError, FormPhase};

fn filled_form() -> BookingForm {
    let mut form = BookingForm::new(1);
    form.update_field(Field::Name, "Rahul Patel");
    form.update_field(Field::Phone, "+91 98765 43210");
    form.update_field(Field::Date, "2025-06-01");
    form.update_field(Field::Slot, "06:00 AM");
    form
}

#[test]
fn submit_with_all_invalid_fields_collects_every_error() {
    let mut form = BookingForm::new(1);
    form.update_field(Field::Phone, "123");

    assert_eq!(form.submit(), FormPhase::Editing);
    assert_eq!(form.error(Field::Name), Some(FieldError::Required));
    assert_eq!(form.error(Field::Phone), Some(FieldError::InvalidFormat));
    assert_eq!(form.error(Field::Date), Some(FieldError::Required));
    assert_eq!(form.error(Field::Slot), Some(FieldError::Required));
    assert_eq!(form.errors().len(), 4);
}

#[test]
fn valid_submission_transitions_and_echoes_fields() {
    let mut form = filled_form();
    assert_eq!(form.submit(), FormPhase::Submitted);
    assert!(form.errors().is_empty());

    // Confirmation view echoes slot and date verbatim.
    assert_eq!(form.fields().slot, "06:00 AM");
    assert_eq!(form.fields().date, "2025-06-01");
}

#[test]
fn editing_a_field_clears_only_that_fields_error() {
    let mut form = BookingForm::new(1);
    form.update_field(Field::Phone, "123");
    assert_eq!(form.submit(), FormPhase::Editing);
    assert_eq!(form.errors().len(), 4);

    form.update_field(Field::Phone, "9876543210");
    assert_eq!(form.error(Field::Phone), None);
    assert_eq!(form.error(Field::Name), Some(FieldError::Required));
    assert_eq!(form.error(Field::Date), Some(FieldError::Required));
    assert_eq!(form.error(Field::Slot), Some(FieldError::Required));
}

#[test]
fn resubmit_replaces_the_error_set_exactly() {
    let mut form = BookingForm::new(1);
    assert_eq!(form.submit(), FormPhase::Editing);
    assert_eq!(form.errors().len(), 4);

    form.update_field(Field::Name, "Rahul Patel");
    form.update_field(Field::Phone, "+91 98765 43210");
    assert_eq!(form.submit(), FormPhase::Editing);

    // Fields that now pass have their prior error cleared by revalidation.
    assert_eq!(form.error(Field::Name), None);
    assert_eq!(form.error(Field::Phone), None);
    assert_eq!(form.errors().len(), 2);
}

#[test]
fn values_are_preserved_across_failed_attempts() {
    let mut form = BookingForm::new(1);
    form.update_field(Field::Name, "Rahul Patel");
    form.update_field(Field::Phone, "123");
    assert_eq!(form.submit(), FormPhase::Editing);

    assert_eq!(form.fields().name, "Rahul Patel");
    assert_eq!(form.fields().phone, "123");
}

#[test]
fn whitespace_only_name_fails_required() {
    let mut form = filled_form();
    form.update_field(Field::Name, "   ");
    assert_eq!(form.submit(), FormPhase::Editing);
    assert_eq!(form.error(Field::Name), Some(FieldError::Required));
}

#[test]
fn phone_rule_requires_ten_characters_after_optional_plus() {
    let mut form = filled_form();

    form.update_field(Field::Phone, "+123456789");
    assert_eq!(form.submit(), FormPhase::Editing);
    assert_eq!(form.error(Field::Phone), Some(FieldError::InvalidFormat));

    form.update_field(Field::Phone, "+1234567890");
    assert_eq!(form.submit(), FormPhase::Submitted);
}
