//! hashmark-rename: Embed content hashes into filenames

use clap::Parser;
use hashmark_cli::commands;
use hashmark_cli::{RenameArgs, exit_code, setup_logging};

fn main() -> anyhow::Result<()> {
    let args = match RenameArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_code(&e));
        }
    };
    setup_logging(args.verbose);

    commands::rename::run(args.config())?;
    Ok(())
}
