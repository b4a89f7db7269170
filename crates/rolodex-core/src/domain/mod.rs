pub mod birthday;
pub mod book;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use book::{AddressBook, BirthdayEntry};
pub use name::Name;
pub use phone::{Phone, PHONE_LEN};
pub use record::Record;
