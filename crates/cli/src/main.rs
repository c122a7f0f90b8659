use args::Cli;
use clap::Parser;
use commands::process_args;
use mrport_core::DOT_MRPORT_LOGS_DIR;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, EnvFilter};

pub mod args;
pub mod commands;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let appender = tracing_appender::rolling::hourly(DOT_MRPORT_LOGS_DIR, "mrport.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(appender);

    let mut file_sub = Layer::new().with_writer(non_blocking).compact();
    file_sub.set_ansi(false);

    let console_sub = Layer::new().with_writer(std::io::stderr).compact();

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console_sub)
        .with(file_sub);

    tracing::subscriber::set_global_default(subscriber)?;

    process_args(&args).await
}
