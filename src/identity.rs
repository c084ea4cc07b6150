/*!
 * Owner and group name resolution
 */

use crate::types::Identity;

/// Maps numeric user and group ids to display identities.
///
/// Implementations never fail: an unknown id comes back as
/// [`Identity::Numeric`].
pub trait IdentityResolver: Send + Sync {
    /// Resolve a user id
    fn user(&self, uid: u32) -> Identity;
    /// Resolve a group id
    fn group(&self, gid: u32) -> Identity;
}

/// Resolver backed by the system passwd and group databases
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentities;

#[cfg(unix)]
impl IdentityResolver for SystemIdentities {
    fn user(&self, uid: u32) -> Identity {
        match users::get_user_by_uid(uid) {
            Some(user) => Identity::Named(user.name().to_string_lossy().into_owned()),
            None => {
                log::trace!("no passwd entry for uid {}", uid);
                Identity::Numeric(uid)
            }
        }
    }

    fn group(&self, gid: u32) -> Identity {
        match users::get_group_by_gid(gid) {
            Some(group) => Identity::Named(group.name().to_string_lossy().into_owned()),
            None => {
                log::trace!("no group entry for gid {}", gid);
                Identity::Numeric(gid)
            }
        }
    }
}

#[cfg(not(unix))]
impl IdentityResolver for SystemIdentities {
    fn user(&self, uid: u32) -> Identity {
        Identity::Numeric(uid)
    }

    fn group(&self, gid: u32) -> Identity {
        Identity::Numeric(gid)
    }
}

/// Resolver that never consults a database
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericIdentities;

impl IdentityResolver for NumericIdentities {
    fn user(&self, uid: u32) -> Identity {
        Identity::Numeric(uid)
    }

    fn group(&self, gid: u32) -> Identity {
        Identity::Numeric(gid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_identities_render_ids() {
        assert_eq!(NumericIdentities.user(1000).to_string(), "1000");
        assert_eq!(NumericIdentities.group(0).to_string(), "0");
    }

    #[cfg(unix)]
    #[test]
    fn test_unknown_uid_falls_back_to_number() {
        let id = u32::MAX - 7;
        assert_eq!(SystemIdentities.user(id), Identity::Numeric(id));
        assert_eq!(SystemIdentities.group(id), Identity::Numeric(id));
    }
}
