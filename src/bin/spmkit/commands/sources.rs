//! `spmkit sources` command

use anyhow::Result;
use spmkit::Target;

use crate::cli::SourcesArgs;

use super::Session;

pub fn execute(args: SourcesArgs, session: &Session) -> Result<()> {
    let toolchain = session.toolchain()?;
    let package = session.load_package(&toolchain)?;

    let targets: Vec<&Target> = if args.all && args.target.is_empty() {
        package.targets().iter().collect()
    } else {
        package.select_targets(&args.target)?
    };

    for target in targets {
        let paths: Vec<_> = target
            .source_paths()
            .into_iter()
            .map(|p| package.path().join(p))
            .collect();

        session.shell.json_event(&serde_json::json!({
            "reason": "sources",
            "target": target.name(),
            "module_type": target.module_type().as_str(),
            "paths": paths,
        }));

        for path in &paths {
            session.shell.data(path.display());
        }
    }

    Ok(())
}
