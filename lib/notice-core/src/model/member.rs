use shared_types::MemberId;

/// Read-only mirror of a member, kept for author attribution
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}
