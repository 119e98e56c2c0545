use std::fmt;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

pub const REQUEST_ID_SUFFIX_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Correlation id of the form `PR-<epoch millis>-<9 base36 chars>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn compose(epoch_millis: i64, suffix: &str) -> Self {
        Self(format!("PR-{epoch_millis}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait RequestIdSource: Send + Sync {
    fn next_request_id(&self) -> RequestId;
}

/// Wall clock plus random suffix. Ids are unique in practice, not by
/// construction; nothing records which ids were issued.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockedRequestIds;

impl RequestIdSource for ClockedRequestIds {
    fn next_request_id(&self) -> RequestId {
        RequestId::compose(Utc::now().timestamp_millis(), &random_suffix())
    }
}

fn random_suffix() -> String {
    base36_digits(Uuid::new_v4().as_u128(), REQUEST_ID_SUFFIX_LEN)
}

/// The lowest `len` base36 digits of `value`, least significant first.
fn base36_digits(mut value: u128, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(char::from(BASE36[(value % 36) as usize]));
        value /= 36;
    }
    out
}
