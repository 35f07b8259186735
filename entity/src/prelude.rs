pub use super::admin_user::Entity as AdminUser;
pub use super::app_user::Entity as AppUser;
pub use super::booking::Entity as Booking;
pub use super::city::Entity as City;
pub use super::darshan_type::Entity as DarshanType;
pub use super::jyotirlinga::Entity as Jyotirlinga;
pub use super::quote::Entity as Quote;
pub use super::time_slot::Entity as TimeSlot;
