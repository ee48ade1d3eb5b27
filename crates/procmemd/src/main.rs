//! procmemd - memory and process attribute reporter.
//!
//! Refreshes attributes from /proc on one thread and periodically reports the
//! cached values as JSON lines on stdout from the main thread.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use clap::Parser;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use procmem_core::Options;
use procmem_core::attributes::Attributes;
#[cfg(not(target_os = "linux"))]
use procmem_core::collector::MockFs;
#[cfg(target_os = "linux")]
use procmem_core::collector::RealFs;
use procmem_core::collector::{FileSystem, MemProcCollector, SOURCE_PATHS};

/// Memory and process attribute reporter.
#[derive(Parser)]
#[command(
    name = "procmemd",
    about = "Reports /proc memory and process attributes",
    version
)]
struct Args {
    /// Refresh interval in seconds.
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Report interval in seconds.
    #[arg(short, long, default_value = "60", value_parser = clap::value_parser!(u64).range(1..))]
    report_interval: u64,

    /// Refresh once, print one report and exit.
    #[arg(long)]
    once: bool,

    /// Log unreadable sources and malformed lines.
    #[arg(long)]
    debug: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Logs go to stderr so stdout carries only reports.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["procmemd", "procmem_core"] {
        match format!("{}={}", target, level).parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("invalid log directive for {}: {}", target, e),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Renders one report line: cached attributes plus a `timestamp` field.
///
/// Keys are sorted so consecutive reports diff cleanly.
fn render_report<F: FileSystem>(collector: &MemProcCollector<F>) -> serde_json::Result<String> {
    let mut attrs = Attributes::new();
    attrs.insert(
        "timestamp".to_string(),
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    );
    collector.export_into(&mut attrs);

    let sorted: BTreeMap<_, _> = attrs.into_iter().collect();
    serde_json::to_string(&sorted)
}

fn report<F: FileSystem>(collector: &MemProcCollector<F>) {
    match render_report(collector) {
        Ok(line) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
                error!("Failed to write report: {}", e);
            }
        }
        Err(e) => error!("Failed to serialize report: {}", e),
    }
}

/// Sleeps for `duration` in short slices so shutdown is noticed quickly.
fn sleep_while_running(duration: Duration, running: &AtomicBool) {
    let slice = Duration::from_millis(100);
    let mut remaining = duration;
    while remaining > Duration::ZERO && running.load(Ordering::SeqCst) {
        let step = remaining.min(slice);
        thread::sleep(step);
        remaining = remaining.saturating_sub(step);
    }
}

fn run<F: FileSystem + 'static>(collector: MemProcCollector<F>, args: &Args) {
    for path in SOURCE_PATHS {
        if !collector.fs().exists(Path::new(path)) {
            warn!("Source {} not found, its attributes will be missing", path);
        }
    }

    if args.once {
        let stats = collector.refresh();
        debug!("Refresh: {:?}", stats);
        report(&collector);
        return;
    }

    let collector = Arc::new(collector);
    let running = Arc::new(AtomicBool::new(true));

    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    let refresh_interval = Duration::from_secs(args.interval);
    let refresher = {
        let collector = Arc::clone(&collector);
        let running = Arc::clone(&running);
        thread::spawn(move || {
            let mut refresh_count: u64 = 0;
            while running.load(Ordering::SeqCst) {
                let stats = collector.refresh();
                refresh_count += 1;
                debug!(
                    "Refresh #{}: {} sources read, {} missing, {} attributes",
                    refresh_count, stats.files_read, stats.files_missing, stats.attributes_merged
                );
                sleep_while_running(refresh_interval, &running);
            }
        })
    };

    info!("Starting report loop");

    let report_interval = Duration::from_secs(args.report_interval);
    while running.load(Ordering::SeqCst) {
        sleep_while_running(report_interval, &running);
        report(&collector);
    }

    info!("Shutting down...");
    if refresher.join().is_err() {
        error!("Refresh thread panicked");
    }
    info!("Shutdown complete");
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    info!("procmemd {} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: interval={}s, report_interval={}s, once={}, debug={}",
        args.interval, args.report_interval, args.once, args.debug
    );

    let options = Options { debug: args.debug };

    #[cfg(target_os = "linux")]
    let collector = MemProcCollector::new(RealFs::new(), options);
    #[cfg(not(target_os = "linux"))]
    let collector = {
        warn!("Not running on Linux, reporting sample data");
        MemProcCollector::new(MockFs::typical_system(), options)
    };

    run(collector, &args);
}
