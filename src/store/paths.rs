//! Database Path Construction
//!
//! Documents live in a slash-separated tree. Path segments built from
//! free-form input (plant type names in particular) are percent-encoded so
//! that names with spaces, slashes, or reserved characters address the
//! intended node instead of splitting into extra path levels.

/// Path to the threshold record for a plant type
pub fn plant_type(plant_type: &str) -> String {
    format!("plantTypes/{}", urlencoding::encode(plant_type))
}

/// Path to a user profile document
pub fn user(id: u64) -> String {
    format!("users/{id}")
}
