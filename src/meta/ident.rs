use uzers::{Groups, Users, UsersCache};

/// The name shown when an ID has no matching user or group.
pub const UNKNOWN: &str = "unknown";

/// Resolves user and group IDs to names.
/// Lookups are cached for the lifetime of the value.
pub struct Identities {
    cache: UsersCache,
}

impl Identities {
    pub fn new() -> Identities {
        Identities {
            cache: UsersCache::new(),
        }
    }

    /// The name of the user with the given ID, or `unknown`.
    pub fn user_name(&self, uid: u32) -> String {
        self.cache.get_user_by_uid(uid).map_or_else(
            || UNKNOWN.to_string(),
            |user| user.name().to_string_lossy().into_owned(),
        )
    }

    /// The name of the group with the given ID, or `unknown`.
    pub fn group_name(&self, gid: u32) -> String {
        self.cache.get_group_by_gid(gid).map_or_else(
            || UNKNOWN.to_string(),
            |group| group.name().to_string_lossy().into_owned(),
        )
    }
}
