//! Participant record model shared by the FedACH and Fedwire directories.
//!
//! A [`Participant`] carries the fields both formats have in common (routing
//! number and customer name) and a [`Details`] payload holding the fields only
//! one of the formats reports.

mod types;

pub use types::{AchDetails, AchLocation, Details, Participant, WireDetails, WireLocation};
