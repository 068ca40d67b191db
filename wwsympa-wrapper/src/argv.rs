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

use crate::errors::*;
use std::ffi::{CString, OsStr, OsString};
use std::iter;
use std::os::unix::ffi::OsStringExt;

/// Replaces `argv[0]` with `target`, keeping every other argument in
/// place. An empty vector gets `target` as its only element.
pub fn rewrite<I>(args: I, target: &OsStr) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    // Whatever name the caller used is discarded.
    args.next();
    iter::once(target.to_os_string()).chain(args).collect()
}

/// Converts the arguments into the NUL-terminated form `execv` takes.
pub fn to_cstrings(args: Vec<OsString>) -> Result<Vec<CString>> {
    args.into_iter()
        .map(|arg| {
            CString::new(arg.into_vec()).map_err(|e| {
                let arg = String::from_utf8_lossy(&e.into_vec()).into_owned();
                Error::from(ErrorKind::InteriorNul(arg))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::os::unix::ffi::OsStrExt;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn rewrites_only_first_slot() {
        let args = rewrite(os(&["anything", "--flag", "value"]), OsStr::new("/usr/bin/true"));
        assert_eq!(args, os(&["/usr/bin/true", "--flag", "value"]));
    }

    #[test]
    fn empty_argv_gets_target() {
        let args = rewrite(Vec::new(), OsStr::new("/usr/bin/true"));
        assert_eq!(args, os(&["/usr/bin/true"]));
    }

    #[test]
    fn non_utf8_arguments_pass_through() {
        let odd = OsString::from_vec(vec![0xff, b'x', 0xfe]);
        let args = rewrite(vec![OsString::from("a"), odd.clone()], OsStr::new("/t"));
        assert_eq!(args[1], odd);
        let c = to_cstrings(args).unwrap();
        assert_eq!(c[1].as_bytes(), &[0xff, b'x', 0xfe]);
    }

    #[test]
    fn interior_nul_is_rejected() {
        let err = to_cstrings(vec![OsString::from("/t"), OsString::from("a\0b")]).unwrap_err();
        match err.kind() {
            ErrorKind::InteriorNul(arg) => assert_eq!(arg, "a\u{0}b"),
            other => panic!("unexpected error: {}", other),
        }
    }

    fn byte_args() -> impl Strategy<Value = Vec<OsString>> {
        prop::collection::vec(prop::collection::vec(1u8..=255, 0..16), 1..8)
            .prop_map(|args| args.into_iter().map(OsString::from_vec).collect())
    }

    proptest! {
        #[test]
        fn first_slot_is_target_and_rest_is_unchanged(args in byte_args()) {
            let target = OsStr::new("/usr/lib/sympa/bin/wwsympa.fcgi");
            let rewritten = rewrite(args.clone(), target);

            prop_assert_eq!(rewritten.len(), args.len());
            prop_assert_eq!(rewritten[0].as_os_str(), target);
            prop_assert_eq!(&rewritten[1..], &args[1..]);

            let c = to_cstrings(rewritten.clone()).unwrap();
            for (c, arg) in c.iter().zip(&rewritten) {
                prop_assert_eq!(c.as_bytes(), arg.as_bytes());
            }
        }
    }
}
