mod cli;
mod replicate;

// remote imports
use clap::Parser;
use cli::{Cli, TraceLevel};
use iex_spider::console::Console;
use std::process::ExitCode;
use tracing::{error, subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

////////////////////////////////////////////////////////////////////////////

// install the tracing subscriber at the requested level
fn preprocess(trace_level: Level) -> anyhow::Result<()> {
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // set the trace level
    if let Some(trace_level) = cli.trace {
        preprocess(match trace_level {
            TraceLevel::DEBUG => Level::DEBUG,
            TraceLevel::ERROR => Level::ERROR,
            TraceLevel::INFO => Level::INFO,
            TraceLevel::TRACE => Level::TRACE,
            TraceLevel::WARN => Level::WARN,
        })?;
    }
    trace!("command line input recorded: {cli:?}");

    // if no trace level provided, report on the console
    let console = Console::new(cli.trace.is_none());
    console.banner("IEX Replicator");

    match replicate::run(&cli, &console).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!("replication aborted: {err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
