use formwright_types::{Field, FieldKind};

/// A three-field contact form: name and email are required, phone is optional.
///
/// Ids are fixed so tests can address fields directly.
pub fn contact_form() -> Vec<Field> {
    vec![
        Field::with_id("name", FieldKind::Text)
            .with_label("Full Name")
            .with_placeholder("Enter your full name")
            .required(),
        Field::with_id("email", FieldKind::Email)
            .with_label("Email")
            .with_placeholder("you@example.com")
            .required(),
        Field::with_id("phone", FieldKind::Text)
            .with_label("Phone")
            .with_placeholder("Optional"),
    ]
}
