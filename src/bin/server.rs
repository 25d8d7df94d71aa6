use std::{fs::OpenOptions, net::SocketAddr, process::ExitCode, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use pocket_ledger::{
    AppState, DisplayOrder, ExpenseChartSource, IncomeSignPolicy, LedgerOptions,
    TransactionStore, build_router, get_local_date, graceful_shutdown, logging_middleware,
};

/// The web server for Pocket Ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    ///
    /// Used to decide which dates are in the future.
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// Start with no transactions instead of the demo data.
    #[arg(long)]
    empty: bool,

    /// Store income as a positive amount even if a negative amount is entered.
    #[arg(long)]
    force_positive_income: bool,

    /// Calculate the expense breakdown from the recorded transactions instead
    /// of showing the demo breakdown.
    #[arg(long)]
    live_expense_chart: bool,

    /// List the most recently added transactions first.
    #[arg(long)]
    newest_first: bool,

    /// Log the headers and bodies of every request and response.
    #[arg(long)]
    log_bodies: bool,
}

impl Args {
    fn ledger_options(&self) -> LedgerOptions {
        LedgerOptions {
            income_sign_policy: if self.force_positive_income {
                IncomeSignPolicy::ForcePositive
            } else {
                IncomeSignPolicy::Preserve
            },
            expense_chart_source: if self.live_expense_chart {
                ExpenseChartSource::Live
            } else {
                ExpenseChartSource::Seed
            },
            display_order: if self.newest_first {
                DisplayOrder::NewestFirst
            } else {
                DisplayOrder::Insertion
            },
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging() {
        eprintln!("Could not set up logging: {error}");
        return ExitCode::FAILURE;
    }

    if let Err(error) = get_local_date(&args.timezone) {
        tracing::error!("{error}. Pass a canonical timezone name such as \"Pacific/Auckland\".");
        return ExitCode::FAILURE;
    }

    let store = if args.empty {
        TransactionStore::new()
    } else {
        TransactionStore::with_seed_data()
    };
    tracing::info!("Starting with {} transactions", store.len());

    let options = args.ledger_options();
    tracing::debug!("Ledger options: {options:?}");
    let state = AppState::new(store, &args.timezone, options);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let mut router = build_router(state);

    if args.log_bodies {
        router = router.layer(middleware::from_fn(logging_middleware));
    }

    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on http://{}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
