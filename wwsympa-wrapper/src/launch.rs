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

//! The process image replacement itself.
//!
//! `execv` hands the kernel the caller's own `environ`, so the target
//! sees exactly the environment the launcher was started with.

use crate::argv;
use crate::errors::*;
use nix::sys::signal::{signal, SigHandler, Signal};
use nix::unistd::execv;
use std::convert::Infallible;
use std::ffi::{CStr, CString, OsStr, OsString};

/// A prepared replacement. Argument conversion, the only step that can
/// reject input, happens in `new`; `exec` is left with the system calls.
#[derive(Debug)]
pub struct Launch {
    argv: Vec<CString>,
}

impl Launch {
    pub fn new<I>(target: &str, args: I) -> Result<Launch>
    where
        I: IntoIterator<Item = OsString>,
    {
        let argv = argv::to_cstrings(argv::rewrite(args, OsStr::new(target)))?;
        Ok(Launch { argv })
    }

    /// The executable path, which is also `argv[0]`.
    pub fn path(&self) -> &CStr {
        &self.argv[0]
    }

    pub fn argv(&self) -> &[CString] {
        &self.argv
    }

    /// Becomes the target. Only returns if that failed.
    pub fn exec(&self) -> Error {
        match self.try_exec() {
            Ok(never) => match never {},
            Err(e) => e,
        }
    }

    fn try_exec(&self) -> Result<Infallible> {
        restore_sigpipe()?;
        execv(self.path(), &self.argv).map_err(Into::into)
    }
}

/// The Rust runtime ignores SIGPIPE at startup and an ignored signal
/// stays ignored across `execve`.
fn restore_sigpipe() -> Result<()> {
    unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) }
        .map(drop)
        .chain_err(|| "restoring default SIGPIPE handling")
}
