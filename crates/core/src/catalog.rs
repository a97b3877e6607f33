//! Catalog and back-office enumerations with their validators.
//!
//! Categories and statuses are stored as plain text columns; the values
//! below are the only ones the API accepts. None of the status sets has
//! transition rules: any valid value may replace any other.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Tour categories
// ---------------------------------------------------------------------------

pub const TOUR_CATEGORY_WINE: &str = "wine";
pub const TOUR_CATEGORY_CULINARY: &str = "culinary";
pub const TOUR_CATEGORY_CULTURAL: &str = "cultural";
pub const TOUR_CATEGORY_ADVENTURE: &str = "adventure";

pub const VALID_TOUR_CATEGORIES: &[&str] = &[
    TOUR_CATEGORY_WINE,
    TOUR_CATEGORY_CULINARY,
    TOUR_CATEGORY_CULTURAL,
    TOUR_CATEGORY_ADVENTURE,
];

// ---------------------------------------------------------------------------
// Product categories
// ---------------------------------------------------------------------------

pub const PRODUCT_CATEGORY_WINE: &str = "wine";
pub const PRODUCT_CATEGORY_FOOD: &str = "food";
pub const PRODUCT_CATEGORY_CRAFTS: &str = "crafts";
pub const PRODUCT_CATEGORY_SOUVENIRS: &str = "souvenirs";

pub const VALID_PRODUCT_CATEGORIES: &[&str] = &[
    PRODUCT_CATEGORY_WINE,
    PRODUCT_CATEGORY_FOOD,
    PRODUCT_CATEGORY_CRAFTS,
    PRODUCT_CATEGORY_SOUVENIRS,
];

// ---------------------------------------------------------------------------
// Contact statuses
// ---------------------------------------------------------------------------

pub const CONTACT_STATUS_NEW: &str = "new";
pub const CONTACT_STATUS_RESPONDED: &str = "responded";
pub const CONTACT_STATUS_CLOSED: &str = "closed";

pub const VALID_CONTACT_STATUSES: &[&str] = &[
    CONTACT_STATUS_NEW,
    CONTACT_STATUS_RESPONDED,
    CONTACT_STATUS_CLOSED,
];

// ---------------------------------------------------------------------------
// Booking statuses
// ---------------------------------------------------------------------------

pub const BOOKING_STATUS_PENDING: &str = "pending";
pub const BOOKING_STATUS_CONFIRMED: &str = "confirmed";
pub const BOOKING_STATUS_CANCELLED: &str = "cancelled";

pub const VALID_BOOKING_STATUSES: &[&str] = &[
    BOOKING_STATUS_PENDING,
    BOOKING_STATUS_CONFIRMED,
    BOOKING_STATUS_CANCELLED,
];

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

fn validate_one_of(kind: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {kind} '{value}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

pub fn validate_tour_category(value: &str) -> Result<(), CoreError> {
    validate_one_of("tour category", value, VALID_TOUR_CATEGORIES)
}

pub fn validate_product_category(value: &str) -> Result<(), CoreError> {
    validate_one_of("product category", value, VALID_PRODUCT_CATEGORIES)
}

pub fn validate_contact_status(value: &str) -> Result<(), CoreError> {
    validate_one_of("contact status", value, VALID_CONTACT_STATUSES)
}

pub fn validate_booking_status(value: &str) -> Result<(), CoreError> {
    validate_one_of("booking status", value, VALID_BOOKING_STATUSES)
}

/// Validate a URL slug: lowercase ASCII letters, digits and single hyphens,
/// not starting or ending with a hyphen.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits and hyphens"
        )))
    }
}
