//! `spmkit describe` command

use anyhow::Result;
use spmkit::util::shell::Status;

use super::Session;

pub fn execute(session: &Session) -> Result<()> {
    let toolchain = session.toolchain()?;
    session
        .shell
        .status(Status::Describing, session.ctx.cwd().display());
    let package = session.load_package(&toolchain)?;

    if session.shell.is_json() {
        let mut event = serde_json::to_value(&package)?;
        event["reason"] = "package".into();
        session.shell.json_event(&event);
        return Ok(());
    }

    let shell = &session.shell;
    shell.data(format!("{} ({})", package.name(), package.path().display()));
    if let Some(tools_version) = package.tools_version() {
        shell.data(format!("tools version: {}", tools_version));
    }

    for target in package.targets() {
        let kind = target
            .kind()
            .map(|k| format!(", {}", k))
            .unwrap_or_default();
        shell.data(format!(
            "  {} ({}{}) - {} source file(s) in {}",
            target.name(),
            target.module_type(),
            kind,
            target.sources().len(),
            target.path().display()
        ));
    }

    for product in package.products() {
        shell.data(format!(
            "  product {}: {}",
            product.name,
            product.targets.join(", ")
        ));
    }

    Ok(())
}
