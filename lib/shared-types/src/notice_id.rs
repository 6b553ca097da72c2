use serde::{Deserialize, Serialize};

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_newtype;
use crate::macros::impls_for_i64_newtype;

/// Identifier of a notice, assigned by the store on creation
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NoticeId(i64);

impls_for_i64_newtype!(NoticeId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(NoticeId);
