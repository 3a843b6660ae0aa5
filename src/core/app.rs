use crate::analysis::Analysis;
use crate::core::cli::ignored_argument_warning;
use crate::core::context::AppContext;
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::ui::output::make_output_sink;
use crate::ui::report::{render, total_line};

/// Ingest, sort, print.
pub fn run(ctx: &AppContext) -> Result<()> {
    if let Some(path) = ctx.config.path() {
        ctx.logger.info(
            format!("Loaded configuration from {}", path.display()),
            LogTarget::FileOnly,
        );
    }
    for arg in &ctx.ignored_args {
        ctx.logger
            .warn(ignored_argument_warning(arg), LogTarget::ConsoleAndFile);
    }

    let source = ctx.open_source()?;
    let analysis = Analysis::ingest(source, ctx.data_type, &ctx.logger)?;
    ctx.logger.info(total_line(&analysis), LogTarget::ConsoleAndFile);
    if !analysis.skipped().is_empty() {
        ctx.logger.info(
            format!("Skipped {} malformed token(s)", analysis.skipped().len()),
            LogTarget::FileOnly,
        );
    }

    let sorted = analysis.sort(ctx.sorting_type);
    let lines = render(&analysis, ctx.sorting_type, &sorted);
    if lines.is_empty() {
        return Ok(());
    }

    let mut sink = make_output_sink(ctx.output_file.as_deref())?;
    for line in &lines {
        sink.print_line(line)?;
    }
    ctx.logger.info(
        format!("Wrote {} result line(s)", lines.len()),
        LogTarget::FileOnly,
    );
    Ok(())
}
