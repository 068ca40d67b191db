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

//! The error type shared by every step of the launcher.

use crate::identity::Identity;

error_chain! {
    foreign_links {
        Nix(nix::Error);
    }

    errors {
        IdentityNotCollapsed(id: Identity) {
            description("real and effective ids differ")
            display("real and effective ids still differ after normalization ({})", id)
        }

        InteriorNul(arg: String) {
            description("argument contains a NUL byte")
            display("argument {:?} contains a NUL byte", arg)
        }
    }
}
