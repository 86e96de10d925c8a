//! Tracing Example
//!
//! Demonstrates the `tracing` feature: named specifications are evaluated in
//! a `spec` span and log their rejections, and batch evaluation logs a summary.
//!
//! Run with: RUST_LOG=trace cargo run --example tracing_demo --features tracing

use specifica::prelude::*;
use tracing::info;

#[derive(Debug)]
struct Order {
    id: u32,
    quantity: u32,
    country: &'static str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let in_stock =
        Spec::rule(|o: &Order| o.quantity > 0, Reason::new(1, "quantity must be positive"))
            .named("in_stock");
    let ships_locally = Spec::rule(
        |o: &Order| matches!(o.country, "NL" | "BE" | "DE"),
        Reason::new(2, "country is not served"),
    )
    .named("ships_locally");
    let bulk = Spec::rule(|o: &Order| o.quantity >= 100, Reason::new(3, "not a bulk order"))
        .named("bulk");

    let acceptable = in_stock & (ships_locally | bulk);
    info!(spec = ?acceptable, "evaluating orders");

    let orders = [
        Order { id: 1, quantity: 3, country: "NL" },
        Order { id: 2, quantity: 0, country: "DE" },
        Order { id: 3, quantity: 5, country: "US" },
        Order { id: 4, quantity: 500, country: "US" },
    ];

    for order in &orders {
        match order.satisfies(&acceptable) {
            Validation::Success(()) => info!(order_id = order.id, "accepted"),
            Validation::Failure(reason) => info!(order_id = order.id, %reason, "rejected"),
        }
    }

    let outcome = orders.iter().all_satisfy(&acceptable);
    info!(accepted_all = outcome.is_success(), "batch finished");
}
