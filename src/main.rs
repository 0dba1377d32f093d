use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use plaudit::{
    infrastructure::{
        cli::{Cli, Command},
        config::Config,
        testimonials,
        tui::real::RealTui,
    },
    integration::{account, app_runner::AppRunner},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;

    if let Some(Command::Account { action }) = args.command {
        return account::run(action, &config).await;
    }

    args.widget.apply_to(&mut config.widget);
    let source = args.widget.testimonials.as_ref().or(config.testimonials.as_ref());
    let testimonials = testimonials::load_or_sample(source.map(|path| path.as_path()))?;
    log::info!(
        "Showing {} testimonials as {}",
        testimonials.len(),
        config.widget.widget_type
    );

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(config, testimonials, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
