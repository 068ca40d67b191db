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

//! Build-time configuration. The launcher has exactly one setting, the
//! executable it turns into, and it is fixed when the binary is built:
//!
//! ```sh
//! WWSYMPA_WRAPPER_TARGET=/usr/local/lib/sympa/bin/wwsympa.fcgi cargo build --release
//! ```
//!
//! `build.rs` refuses relative paths, so `TARGET` is always absolute.

/// Where Sympa installs the FastCGI frontend by default.
pub const DEFAULT_TARGET: &str = "/usr/lib/sympa/bin/wwsympa.fcgi";

/// The executable the launcher replaces itself with.
pub const TARGET: &str = match option_env!("WWSYMPA_WRAPPER_TARGET") {
    Some(target) => target,
    None => DEFAULT_TARGET,
};
