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

//! A privilege-normalizing launcher for the WWSympa FastCGI frontend.
//!
//! Installed setuid/setgid to the Sympa account, it sets the real uid
//! and gid to the effective ones, then replaces itself with the
//! executable fixed at build time (see [`config`]), with `argv[0]`
//! rewritten to that path and the environment untouched.

#[macro_use]
extern crate error_chain;

pub mod argv;
pub mod config;
pub mod errors;
pub mod identity;
pub mod launch;

pub use crate::errors::{Error, ErrorKind, Result};
