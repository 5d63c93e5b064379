pub mod contact;
pub mod phone;

pub use contact::Contact;
pub use phone::normalize_phone_for_dialing;
