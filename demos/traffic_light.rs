//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine with time travel.
//!
//! Key concepts:
//! - Cyclic state transitions built with `cycle`
//! - Undo/redo over the visited states
//! - A manual override that is recorded like any other transition
//!
//! Run with: cargo run --example traffic_light

use rewind::builder::cycle;
use rewind::StateMachine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = cycle("timer", ["red", "green", "yellow"]);
    let mut light = StateMachine::try_new(config)?;

    println!("Initial state: {}\n", light.state());

    println!("Running four timer ticks:");
    for _ in 0..4 {
        light.trigger("timer")?;
        println!("  -> {}", light.state());
    }

    println!("\nRewinding two ticks:");
    while light.history().index() > 2 {
        light.undo();
        println!("  <- {}", light.state());
    }

    println!("\nManual override to red (discards the rewound ticks):");
    light.change_state("red")?;
    println!("  state: {}, redo available: {}", light.state(), light.can_redo());

    let path: Vec<&str> = light.path().iter().map(|s| s.as_str()).collect();
    println!("\nVisited path: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
