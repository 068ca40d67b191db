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

use std::convert::Infallible;
use std::env;
use std::io;
use std::process;
use tracing::{debug, error, Level};
use tracing_subscriber::fmt::SubscriberBuilder;
use wwsympa_wrapper::launch::Launch;
use wwsympa_wrapper::{config, identity, Error, Result};

/// What `return -1` from a C `main` turns into.
const EXIT_LAUNCH_FAILED: i32 = 255;

fn run() -> Result<Infallible> {
    let id = identity::normalize()?;
    debug!(%id, "identity normalized");

    let launch = Launch::new(config::TARGET, env::args_os())?;
    Err(launch.exec())
}

fn report(e: &Error) {
    let chain: Vec<String> = e.iter().map(|cause| cause.to_string()).collect();
    error!(path = config::TARGET, "launch failed: {}", chain.join(": "));
}

fn main() {
    // stdout carries the CGI response, so logs go to stderr only.
    SubscriberBuilder::default()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .with_target(false)
        .init();

    match run() {
        Ok(never) => match never {},
        Err(e) => {
            report(&e);
            process::exit(EXIT_LAUNCH_FAILED);
        }
    }
}
