pub mod carrier;
pub mod domain;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod sms;

pub use carrier::{CarrierMatch, CarrierTrie};
pub use domain::*;
pub use error::CoreError;
pub use filter::filter_contacts;
pub use normalize::fold_for_match;
pub use sms::{encode, EncodedSms};
