use sorting::core::app;
use sorting::core::cli::CliOptions;
use sorting::core::context::AppContext;
use sorting::logging::{LogTarget, Logger};

fn main() {
    let ctx = match CliOptions::from_env().and_then(AppContext::new) {
        Ok(ctx) => ctx,
        Err(err) => {
            Logger::new().error(format!("{err}"), LogTarget::ConsoleOnly);
            std::process::exit(1);
        }
    };

    if let Err(err) = app::run(&ctx) {
        ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
