use anyhow::Context;
use bst_engine::{Op, Tree};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "bst-engine")]
#[command(about = "Apply a sequence of operations to a binary search tree")]
struct Args {
    /// Operations to run in order: insert:V, remove:V, contains:V, get:V, size, list.
    #[arg(required = true)]
    ops: Vec<Op<i64>>,

    /// Values inserted before any operation runs.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<i64>,

    /// Verbosity of the log written to stderr.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialise logging")?;

    let mut tree: Tree<i64> = args.values.iter().copied().collect();
    info!("starting with {} values", tree.size());

    for op in args.ops {
        info!("applying {}", op);
        println!("{}", tree.apply(op));
    }

    Ok(())
}
