//! Domain types for fraud checking
//!
//! - `money`: currency codes and charge amounts
//! - `card`: the credit card under test
//! - `status`: check outcomes and the decision rule
//! - `request`: the card/charge pair submitted for a check

pub mod card;
pub mod money;
pub mod request;
pub mod status;

pub use card::CreditCard;
pub use money::{Currency, Money};
pub use request::FraudCheckRequest;
pub use status::{decide, AvStatus, CvvStatus, FraudStatus, OverallStatus};
