//! `spmkit clean` command

use anyhow::Result;
use spmkit::util::shell::Status;

use super::Session;

pub fn execute(session: &Session) -> Result<()> {
    let toolchain = session.toolchain()?;
    let package = session.load_package(&toolchain)?;

    session.shell.status(Status::Cleaning, package.name());
    package.clean(&toolchain)?;
    session
        .shell
        .status(Status::Removed, format!("build artifacts of `{}`", package.name()));

    Ok(())
}
