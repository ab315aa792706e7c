use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use order_desk::application::checkout::OrderProcessor;
use order_desk::domain::customer::CustomerTier;
use order_desk::domain::ports::OrderStoreBox;
use order_desk::domain::pricing::calculate_order_total;
use order_desk::domain::receipt::format_receipt;
use order_desk::infrastructure::file_log::{DEFAULT_LOG_PATH, FileOrderLog};
use order_desk::infrastructure::in_memory::InMemoryOrderStore;
use order_desk::interfaces::console::ConsoleNotifier;
use order_desk::interfaces::csv::cart_reader::CartReader;
use order_desk::interfaces::json::order_reader::read_order;
use order_desk::telemetry::init_tracing;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a cart CSV (`price,quantity`) and print the receipt
    Quote {
        /// Input cart CSV file
        input: PathBuf,

        /// Customer tier: basic, premium or vip. Anything else is priced as basic.
        #[arg(long, default_value = "basic")]
        tier: String,
    },
    /// Process one order request (JSON) and print the stored record
    Order {
        /// Input order JSON file
        input: PathBuf,

        /// File the order summary line is appended to
        #[arg(long, default_value = DEFAULT_LOG_PATH)]
        log_path: PathBuf,

        /// Path to persistent database (optional). If provided, uses RocksDB.
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Quote { input, tier } => quote(input, &tier),
        Command::Order {
            input,
            log_path,
            db_path,
        } => order(input, log_path, db_path).await,
    }
}

fn quote(input: PathBuf, tier: &str) -> Result<()> {
    let tier = CustomerTier::from_label(tier);

    let file = File::open(input).into_diagnostic()?;
    let mut items = Vec::new();
    for item in CartReader::new(file).line_items() {
        match item {
            Ok(item) => items.push(item),
            Err(e) => eprintln!("Error reading line item: {}", e),
        }
    }

    let order = calculate_order_total(&items, tier);
    print!("{}", format_receipt(&order, tier));
    Ok(())
}

async fn order(input: PathBuf, log_path: PathBuf, db_path: Option<PathBuf>) -> Result<()> {
    let request = read_order(File::open(input).into_diagnostic()?).into_diagnostic()?;

    let processor = OrderProcessor::new(
        open_store(db_path)?,
        Box::new(ConsoleNotifier),
        Box::new(FileOrderLog::new(log_path)),
    );

    let record = processor.process(request).await.into_diagnostic()?;
    println!(
        "{}",
        serde_json::to_string_pretty(&record).into_diagnostic()?
    );
    Ok(())
}

#[cfg(feature = "storage-rocksdb")]
fn open_store(db_path: Option<PathBuf>) -> Result<OrderStoreBox> {
    use order_desk::infrastructure::rocksdb::RocksDbOrderStore;

    let store: OrderStoreBox = match db_path {
        Some(path) => Box::new(RocksDbOrderStore::open(path).into_diagnostic()?),
        None => Box::new(InMemoryOrderStore::new()),
    };
    Ok(store)
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_store(db_path: Option<PathBuf>) -> Result<OrderStoreBox> {
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(Box::new(InMemoryOrderStore::new()))
}
