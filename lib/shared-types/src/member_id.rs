use serde::{Deserialize, Serialize};

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_newtype;
use crate::macros::impls_for_i64_newtype;

/// Identifier of a member, owned by the member service and propagated by the gateway
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MemberId(i64);

impls_for_i64_newtype!(MemberId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(MemberId);
