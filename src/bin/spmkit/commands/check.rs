//! `spmkit check` command

use anyhow::{bail, Result};
use spmkit::util::shell::Status;
use spmkit::{is_supported, MANIFEST_NAME};

use super::Session;

pub fn execute(session: &Session) -> Result<()> {
    let supported = is_supported();

    session.shell.json_event(&serde_json::json!({
        "reason": "check",
        "supported": supported,
    }));

    if !supported {
        bail!(
            "`{}` not found in `{}`; not a Swift package",
            MANIFEST_NAME,
            session.ctx.cwd().display()
        );
    }

    session.shell.status(
        Status::Found,
        format!("{} in {}", MANIFEST_NAME, session.ctx.cwd().display()),
    );
    Ok(())
}
