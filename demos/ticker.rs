//! Headless counter driven by a timer source.
//!
//! Prints each render to stdout and stops itself after `--limit` ticks via a
//! command that cancels the runtime. Set `RUST_LOG=steep=debug` to watch the
//! loop's lifecycle events.
//!
//! Run with `cargo run --example ticker -- --interval-ms 100 --limit 5`.

use clap::Parser;
use color_eyre::eyre::Result;
use steep::prelude::*;
use steep::source::{self, time::Timer};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Counts timer ticks through a Model-Update-View loop")]
struct Args {
    /// Milliseconds between ticks.
    #[arg(long, default_value_t = 250)]
    interval_ms: u64,

    /// Number of ticks to count before stopping.
    #[arg(long, default_value_t = 10)]
    limit: u64,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    LimitReached,
}

#[derive(Debug, Clone, Default)]
struct TickerModel {
    count: u64,
}

struct TickerApp {
    limit: u64,
    stop: CancellationToken,
}

impl Application for TickerApp {
    type Model = TickerModel;
    type Message = Message;
    type Renderable = String;

    fn init(&self) -> TickerModel {
        TickerModel::default()
    }

    fn update(&self, msg: Message, model: TickerModel) -> (TickerModel, Command<Message>) {
        match msg {
            Message::Tick => {
                let count = model.count + 1;
                let cmd = if count >= self.limit {
                    let stop = self.stop.clone();
                    Command::perform(async move { stop.cancel() }, |_| Message::LimitReached)
                } else {
                    Command::none()
                };
                (TickerModel { count }, cmd)
            }
            // Cancellation usually wins the race against this message;
            // either way there is nothing left to do.
            Message::LimitReached => (model, Command::none()),
        }
    }

    fn view(&self, model: &TickerModel, _dispatcher: Dispatcher<Message>) -> String {
        format!("Count is: {}", model.count)
    }
}

struct StdoutRenderer;

impl Renderer<String> for StdoutRenderer {
    fn render(&mut self, line: String) {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    info!(interval_ms = args.interval_ms, limit = args.limit, "starting ticker");

    let stop = CancellationToken::new();
    let runtime = Runtime::new(TickerApp {
        limit: args.limit,
        stop: stop.clone(),
    });
    let dispatcher = runtime.dispatcher();
    let handle = runtime.spawn(StdoutRenderer);

    let ticks = source::spawn(Timer::new(args.interval_ms), dispatcher, |_| Message::Tick);

    stop.cancelled().await;
    let model = handle.shutdown().await;
    ticks.cancel().await;

    info!(count = model.count, "ticker stopped");

    Ok(())
}
