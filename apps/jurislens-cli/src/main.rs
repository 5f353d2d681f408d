use anyhow::Context;
use clap::Parser;
use jurislens_cli::{run, Args};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };

    // stdout carries the report, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = run(&args).context("Analysis failed")?;
    print!("{}", output);

    Ok(())
}
