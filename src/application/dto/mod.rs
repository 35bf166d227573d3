pub mod contact;
pub mod slugs;

pub use contact::{ContactOutcome, ContactReceipt, EmailDispatchResult};
pub use slugs::SlugDto;
