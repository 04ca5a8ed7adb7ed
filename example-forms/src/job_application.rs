use formwright_types::{Field, FieldKind};

/// Maximum number of years of experience the form asks about.
pub const MAX_YEARS: u32 = 50;

/// A job application form mixing every field kind.
pub fn job_application() -> Vec<Field> {
    vec![
        Field::with_id("applicant", FieldKind::Text)
            .with_label("Applicant name")
            .required(),
        Field::with_id("contact", FieldKind::Email)
            .with_label("Contact email")
            .with_placeholder("name@company.com")
            .required(),
        Field::with_id("years", FieldKind::Number)
            .with_label("Years of experience")
            .with_placeholder(format!("0 - {MAX_YEARS}"))
            .required(),
        Field::with_id("salary", FieldKind::Number)
            .with_label("Expected salary")
            .with_placeholder("Leave blank to discuss"),
        Field::with_id("portfolio", FieldKind::Text)
            .with_label("Portfolio URL"),
    ]
}
