//! Ready-made field lists for tests and demos.

pub mod contact;
pub mod job_application;

pub use contact::contact_form;
pub use job_application::job_application;

use formwright_types::Field;

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 2] = ["contact", "job"];

/// Look up an example form by name.
pub fn by_name(name: &str) -> Option<Vec<Field>> {
    match name {
        "contact" => Some(contact_form()),
        "job" => Some(job_application()),
        _ => None,
    }
}
