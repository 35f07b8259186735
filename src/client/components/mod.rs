pub mod booking_form;
pub mod navbar;
pub mod page;

pub use booking_form::BookingForm;
pub use navbar::Navbar;
pub use page::Page;
