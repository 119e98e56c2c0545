//! Privacy rights intake.
//!
//! This is a placeholder: requests are logged and acknowledged with a fresh
//! correlation id, but nothing is stored, deduplicated or forwarded. The
//! same body posted twice gets two different ids.

mod request_id;
mod router;
mod service;

pub use request_id::{ClockedRequestIds, RequestId, RequestIdSource, REQUEST_ID_SUFFIX_LEN};
pub use router::{privacy_request_handler, privacy_router, PRIVACY_REQUEST_PATH};
pub use service::{PrivacyIntake, PrivacyReceipt, PRIVACY_ACKNOWLEDGEMENT};
