// This file is part of wwsympa-wrapper.
//
// wwsympa-wrapper is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// wwsympa-wrapper is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with wwsympa-wrapper. If not, see <https://www.gnu.org/licenses/>.

//! Collapsing a setuid/setgid split identity into the effective one.
//! The target inherits a single consistent identity: real uid and gid
//! end up equal to the effective ones, and so do the saved ids.
//!
//! `nix` does not wrap `setreuid`/`setregid`; `setresuid` would do
//! the same job but is not available on every Unix.
use crate::errors::*;
use nix::errno::Errno;
use nix::unistd::{getegid, geteuid, getgid, getuid, Gid, Uid};
use std::fmt;
use tracing::debug;

/// A snapshot of the process credentials.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Identity {
    pub ruid: Uid,
    pub euid: Uid,
    pub rgid: Gid,
    pub egid: Gid,
}

impl Identity {
    pub fn current() -> Identity {
        Identity {
            ruid: getuid(),
            euid: geteuid(),
            rgid: getgid(),
            egid: getegid(),
        }
    }

    /// True when real and effective ids agree for both user and group.
    pub fn is_collapsed(&self) -> bool {
        self.ruid == self.euid && self.rgid == self.egid
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "uid {}/{}, gid {}/{}",
            self.ruid, self.euid, self.rgid, self.egid
        )
    }
}

fn setreuid(ruid: Uid, euid: Uid) -> nix::Result<()> {
    Errno::result(unsafe { libc::setreuid(ruid.as_raw(), euid.as_raw()) }).map(drop)
}

fn setregid(rgid: Gid, egid: Gid) -> nix::Result<()> {
    Errno::result(unsafe { libc::setregid(rgid.as_raw(), egid.as_raw()) }).map(drop)
}

pub fn collapse_uid() -> Result<()> {
    let euid = geteuid();
    debug!(%euid, "setting real uid");
    setreuid(euid, euid).chain_err(|| format!("setting real uid to effective uid {}", euid))
}

pub fn collapse_gid() -> Result<()> {
    let egid = getegid();
    debug!(%egid, "setting real gid");
    setregid(egid, egid).chain_err(|| format!("setting real gid to effective gid {}", egid))
}

/// Fails unless real and effective ids are equal right now.
pub fn verify() -> Result<Identity> {
    let id = Identity::current();
    if id.is_collapsed() {
        Ok(id)
    } else {
        Err(ErrorKind::IdentityNotCollapsed(id).into())
    }
}

/// Uid first, then gid, then check the result. Any failure is fatal
/// to the launch.
pub fn normalize() -> Result<Identity> {
    collapse_uid()?;
    collapse_gid()?;
    verify()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(ruid: u32, euid: u32, rgid: u32, egid: u32) -> Identity {
        Identity {
            ruid: Uid::from_raw(ruid),
            euid: Uid::from_raw(euid),
            rgid: Gid::from_raw(rgid),
            egid: Gid::from_raw(egid),
        }
    }

    #[test]
    fn split_identity_is_not_collapsed() {
        assert!(!identity(1000, 0, 1000, 1000).is_collapsed());
        assert!(!identity(1000, 1000, 1000, 27).is_collapsed());
        assert!(identity(33, 33, 27, 27).is_collapsed());
    }

    #[test]
    fn display_shows_real_then_effective() {
        assert_eq!(
            identity(1000, 0, 100, 27).to_string(),
            "uid 1000/0, gid 100/27"
        );
    }

    #[test]
    fn not_collapsed_error_names_ids() {
        let err: Error = ErrorKind::IdentityNotCollapsed(identity(1000, 0, 5, 5)).into();
        assert!(err.to_string().contains("uid 1000/0"));
    }

    // The test runner is not setuid, so this is the no-op case: real
    // and effective ids already agree and must keep agreeing.
    #[test]
    fn normalize_without_elevation_keeps_ids() {
        let before = Identity::current();
        let after = normalize().unwrap();
        assert!(after.is_collapsed());
        assert_eq!(after.euid, before.euid);
        assert_eq!(after.egid, before.egid);
    }
}
