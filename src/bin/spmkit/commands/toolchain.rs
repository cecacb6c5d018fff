//! `spmkit toolchain` command

use anyhow::Result;
use spmkit::toolchain::ENABLE_TEST_DISCOVERY_FLAG;

use super::Session;

pub fn execute(session: &Session) -> Result<()> {
    let toolchain = session.toolchain()?;

    session.shell.json_event(&serde_json::json!({
        "reason": "toolchain",
        "swift": toolchain.executable(),
        "version": toolchain.version().to_string(),
        "test_discovery_flag": toolchain.needs_test_discovery_flag(),
    }));

    let shell = &session.shell;
    shell.data(format!("swift:   {}", toolchain.executable().display()));
    shell.data(format!("version: {}", toolchain.version()));
    if toolchain.needs_test_discovery_flag() {
        shell.data(format!("builds add `{}`", ENABLE_TEST_DISCOVERY_FLAG));
    }

    Ok(())
}
