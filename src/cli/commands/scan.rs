use anyhow::Result;

use super::super::args::ScanCommand;
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    core::ScanContext,
    export::{ExportFormat, write_records},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = ScanContext::new(args)?;
    let outcome = ctx.run();

    let export_path = if args.no_export {
        None
    } else {
        let format = args
            .format
            .unwrap_or_else(|| ExportFormat::from_path(&ctx.output_path));
        write_records(&ctx.output_path, format, &outcome.records)?;
        Some(ctx.output_path.clone())
    };

    let error_count = outcome.records.len();

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            outcome,
            export_path,
            quiet: args.quiet,
        }),
        error_count,
        exit_on_errors: args.fail_on_found,
    })
}
