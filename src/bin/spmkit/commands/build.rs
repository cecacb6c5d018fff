//! `spmkit build` command

use anyhow::Result;
use spmkit::util::shell::Status;

use crate::cli::BuildArgs;

use super::Session;

pub fn execute(args: BuildArgs, session: &Session) -> Result<()> {
    let toolchain = session.toolchain()?;
    let package = session.load_package(&toolchain)?;
    let targets = package.select_targets(&args.target)?;

    // Config arguments first so the command line can override them.
    let mut additional = session.ctx.config().build.args.clone();
    additional.extend(args.args);

    if targets.is_empty() {
        session
            .shell
            .status(Status::Skipped, "no Swift targets to build");
        return Ok(());
    }

    for target in targets {
        let span = session
            .shell
            .span(Status::Building, format!("target `{}`", target.name()));
        target.build(&toolchain, &additional)?;

        session.shell.json_event(&serde_json::json!({
            "reason": "build-finished",
            "target": target.name(),
            "success": true,
        }));
        span.finish(format!("`{}`", target.name()));
    }

    Ok(())
}
