//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod hotel_repo;
pub mod reservation_repo;
pub mod room_repo;
pub mod user_repo;

pub use customer_repo::CustomerRepo;
pub use hotel_repo::HotelRepo;
pub use reservation_repo::ReservationRepo;
pub use room_repo::RoomRepo;
pub use user_repo::UserRepo;
