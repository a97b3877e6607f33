pub mod admin;
pub mod auth;
pub mod blog;
pub mod booking;
pub mod cart;
pub mod contact;
pub mod product;
pub mod region;
pub mod tour;
