//! tree-snapshot: JSON snapshot of a folder tree

use clap::Parser;
use hashmark_cli::commands;
use hashmark_cli::{SnapshotArgs, exit_code, setup_logging};

fn main() -> anyhow::Result<()> {
    let args = match SnapshotArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_code(&e));
        }
    };
    setup_logging(args.verbose);

    commands::snapshot::run(&args.target, &args.output)?;
    Ok(())
}
