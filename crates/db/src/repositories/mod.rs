//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_post_repo;
pub mod booking_repo;
pub mod cart_repo;
pub mod contact_repo;
pub mod product_repo;
pub mod region_repo;
pub mod session_repo;
pub mod tour_repo;
pub mod user_repo;

pub use blog_post_repo::BlogPostRepo;
pub use booking_repo::BookingRepo;
pub use cart_repo::CartRepo;
pub use contact_repo::ContactRepo;
pub use product_repo::ProductRepo;
pub use region_repo::RegionRepo;
pub use session_repo::SessionRepo;
pub use tour_repo::TourRepo;
pub use user_repo::UserRepo;
