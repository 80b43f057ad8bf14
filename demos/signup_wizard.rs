//! Signup Wizard
//!
//! A multi-step form controller loaded from JSON. Back/forward buttons map
//! straight onto undo/redo.
//!
//! Run with: cargo run --example signup_wizard

use rewind::{Configuration, MachineError, StateMachine};

const WIZARD: &str = r#"{
    "initial": "account",
    "states": {
        "account": { "transitions": { "next": "profile" } },
        "profile": { "transitions": { "next": "billing", "skip": "confirm" } },
        "billing": { "transitions": { "next": "confirm" } },
        "confirm": { "transitions": { "submit": "done" } },
        "done": {}
    }
}"#;

fn show(wizard: &StateMachine) {
    let events: Vec<&str> = wizard.available_events().iter().map(|e| e.as_str()).collect();
    println!(
        "  step: {:<8} back: {:<5} forward: {:<5} actions: [{}]",
        wizard.state(),
        wizard.can_undo(),
        wizard.can_redo(),
        events.join(", ")
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Signup Wizard ===\n");

    let mut wizard = StateMachine::try_new(Configuration::from_json(WIZARD)?)?;
    show(&wizard);

    wizard.trigger("next")?;
    wizard.trigger("next")?;
    show(&wizard);

    println!("\nUser presses back twice:");
    wizard.undo();
    wizard.undo();
    show(&wizard);

    println!("\nUser presses forward:");
    wizard.redo();
    show(&wizard);

    println!("\nUser skips billing instead:");
    wizard.trigger("skip")?;
    show(&wizard);

    println!("\nSubmitting from the wrong step is rejected:");
    match wizard.trigger("next") {
        Err(err @ MachineError::InvalidTransition { .. }) => println!("  error: {}", err),
        other => println!("  unexpected: {:?}", other),
    }

    wizard.trigger("submit")?;
    show(&wizard);

    let steps: Vec<&str> = wizard.states(Some("next")).iter().map(|s| s.as_str()).collect();
    println!("\nSteps with a 'next' button: {}", steps.join(", "));

    println!("\n=== Example Complete ===");
    Ok(())
}
