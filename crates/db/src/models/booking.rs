//! Tour booking model and DTOs.

use kartuli_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A booking row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub tour_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub number_of_people: i32,
    /// Free text as entered by the customer (not parsed as a date).
    pub preferred_date: String,
    pub special_requests: Option<String>,
    pub status: String,
    pub total_price: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a booking request.
///
/// The total price is not part of the input: it is computed from the tour's
/// current price when the row is inserted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub tour_id: DbId,
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 40, message = "Phone number is required"))]
    pub phone: String,
    #[validate(range(min = 1, max = 100, message = "Number of people must be between 1 and 100"))]
    pub number_of_people: i32,
    #[validate(length(min = 1, message = "Preferred date is required"))]
    pub preferred_date: String,
    #[validate(length(max = 2000, message = "Special requests are too long"))]
    pub special_requests: Option<String>,
}
