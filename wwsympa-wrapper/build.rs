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

//! Checks the build-time target path before it gets baked into the
//! binary as `config::TARGET`.

use std::env;
use std::path::Path;

const TARGET_VAR: &str = "WWSYMPA_WRAPPER_TARGET";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", TARGET_VAR);

    // Unset means the default from src/config.rs, which is absolute.
    let target = match env::var_os(TARGET_VAR) {
        Some(target) => target,
        None => return,
    };

    if target.to_str().is_none() {
        panic!("{} must be valid UTF-8, got {:?}", TARGET_VAR, target);
    }

    if !Path::new(&target).is_absolute() {
        panic!(
            "{} must be an absolute path, got {:?}",
            TARGET_VAR, target
        );
    }
}
