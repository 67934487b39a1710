//! Watches default-route reachability and prints every change.
//!
//! Run with `RUST_LOG=waypoint_net=debug` to see probe lifecycle logs.

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use waypoint::ReachabilityMonitor;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let monitor = ReachabilityMonitor::system();
    println!(
        "network available: {} ({})",
        monitor.is_network_available(),
        monitor.current_status()
    );

    monitor.status_changed.connect(|status| {
        println!("reachability changed: {status}");
    });

    if !monitor.is_registered() {
        println!("no change notifications on this platform; polling instead");
    }

    for _ in 0..60 {
        std::thread::sleep(Duration::from_secs(1));
        if !monitor.is_registered() {
            println!("{}", monitor.current_status());
        }
    }

    monitor.close();
}
