use std::path::PathBuf;

use anyhow::Result;

use super::{CommandResult, CommandSummary, ScanSummary};
use crate::cli::args::ScanCommand;
use crate::config::load_config;
use crate::scan::scan_project;

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let cwd = std::env::current_dir()?;
    let loaded = load_config(&cwd)?;
    let mut config = loaded.config;

    if let Some(root) = &cmd.args.common.source_root {
        config.source_root = root.to_string_lossy().into_owned();
    }

    let root = PathBuf::from(&config.source_root);
    let outcome = scan_project(
        &root,
        &config,
        !cmd.args.hits_only,
        cmd.args.common.verbose,
    )?;

    let skipped_count = outcome.skipped_total();
    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            outcome,
            hits_only: cmd.args.hits_only,
            json: cmd.args.json,
        }),
        skipped_count,
    })
}
