//! Repository for the `bookings` table.

use kartuli_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, CreateBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tour_id, first_name, last_name, email, phone, number_of_people, \
                        preferred_date, special_requests, status, \
                        total_price::TEXT AS total_price, created_at, updated_at";

/// Provides storage for tour bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a booking priced from the tour's current price.
    ///
    /// `total_price` is `tours.price * number_of_people`, computed in the same
    /// statement. Returns `None` when `tour_id` does not reference a tour.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (
                tour_id, first_name, last_name, email, phone, number_of_people,
                preferred_date, special_requests, total_price)
             SELECT t.id, $2, $3, $4, $5, $6, $7, $8, t.price * $6
             FROM tours t
             WHERE t.id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.tour_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.number_of_people)
            .bind(&input.preferred_date)
            .bind(&input.special_requests)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bookings, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    /// Overwrite the status of a booking. The caller validates `status`.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
