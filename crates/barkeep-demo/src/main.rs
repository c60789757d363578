#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
//! Demo harness for exercising barkeep widgets.
//!
//! This tool provides a way to visually test and iterate on the widgets
//! without embedding them in a real application.
//!
//! Run with: `cargo run -p barkeep-demo -- <command>`

use std::{thread::sleep, time::Duration};

use anyhow::Result;
use barkeep::{
    BarOptions, Manager, ManagerOptions, Output, ProgressBar, Spinner, SpinnerOptions, Terminal,
    TickStyle, Widget,
};
use clap::{Parser, Subcommand};

/// Demo harness for barkeep widgets
#[derive(Parser)]
#[command(name = "barkeep-demo")]
#[command(about = "Exercise barkeep progress bars and spinners")]
struct Cli {
    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Which demo to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
/// Demo subcommands supported by the harness.
enum Commands {
    /// Show all status line types
    Messages,
    /// A single progress bar running to completion
    Bar,
    /// Spinner success, failure and plain-stop finishes
    Spinner,
    /// Spinner frame sets
    Frames,
    /// Nested total/epoch bars with a spinner, training-loop style
    Workflow,
    /// Run all demos
    All,
}

/// Demonstrate all status line types.
fn demo_messages(output: &dyn Output) -> Result<()> {
    println!("\n=== Status Lines ===\n");
    output.message("Status update: checking prerequisites")?;
    output.message("Loading dataset from disk...")?;
    output.success("Dataset loaded successfully")?;
    output.warn("Checkpoint directory already exists")?;
    output.fail("Could not reach the tracking server")?;
    Ok(())
}

/// Demonstrate a single progress bar.
fn demo_bar(manager: &Manager) -> Result<()> {
    println!("\n=== Progress Bar ===\n");

    let mut bar = ProgressBar::with_options(
        "Processing files",
        40,
        BarOptions {
            persist: true,
            manager: Some(manager.clone()),
            ..BarOptions::default()
        },
    );
    bar.start()?;
    for _ in 0..40 {
        sleep(Duration::from_millis(40));
        bar.advance(1)?;
    }
    bar.stop()?;
    Ok(())
}

/// Demonstrate spinner finishes.
fn demo_spinner(manager: &Manager, output: &dyn Output) -> Result<()> {
    println!("\n=== Spinner Finishes ===\n");

    // Success case
    let mut spinner = spinner_on(manager, "Processing files...");
    spinner.start()?;
    sleep(Duration::from_secs(2));
    spinner.success(Some("Files processed successfully"))?;

    // Failure case
    let mut spinner = spinner_on(manager, "Connecting to server...");
    spinner.start()?;
    sleep(Duration::from_secs(2));
    spinner.fail(Some("Connection failed"))?;

    // Plain stop clears the spinner entirely
    let mut spinner = spinner_on(manager, "Temporary operation...");
    spinner.start()?;
    sleep(Duration::from_secs(1));
    spinner.stop()?;

    output.message("(the last spinner was cleared above)")?;
    Ok(())
}

/// Demonstrate the available frame sets.
fn demo_frames(manager: &Manager) -> Result<()> {
    println!("\n=== Frame Sets ===\n");

    for (frames, label) in [
        (TickStyle::Dots, "dots"),
        (TickStyle::Line, "line"),
        (TickStyle::Arc, "arc"),
    ] {
        let mut spinner = Spinner::with_options(
            format!("Spinning with the {label} frames"),
            SpinnerOptions {
                frames,
                manager: Some(manager.clone()),
                ..SpinnerOptions::default()
            },
        );
        spinner.start()?;
        sleep(Duration::from_secs(2));
        spinner.success(None)?;
    }
    Ok(())
}

/// Simulate a training loop with a persistent total bar, a per-epoch bar and
/// an occasional spinner, all sharing the display.
fn demo_workflow(manager: &Manager, output: &dyn Output) -> Result<()> {
    println!("\n=== Training Workflow ===\n");

    let epochs = 3;
    let batches = 60;

    let mut total = ProgressBar::with_options(
        "Total",
        epochs,
        BarOptions {
            prefix: format!("[ 1/{epochs}] "),
            persist: true,
            manager: Some(manager.clone()),
            ..BarOptions::default()
        },
    );
    total.start()?;

    for epoch in 1..=epochs {
        let mut train = ProgressBar::with_options(
            format!("Epoch {epoch} - Train"),
            batches,
            BarOptions {
                manager: Some(manager.clone()),
                ..BarOptions::default()
            },
        );
        train.start()?;
        for _ in 0..batches {
            sleep(Duration::from_millis(15));
            train.advance(1)?;
        }
        train.stop()?;

        if epoch == 2 {
            let mut spinner = spinner_on(manager, "Saving new best model to: log/example/best");
            spinner.start()?;
            sleep(Duration::from_millis(600));
            spinner.success(Some("Saved new best model"))?;
        }

        total.advance(1)?;
        output.message(&format!("Epoch {epoch} finished"))?;
    }

    total.stop()?;
    output.success("Training complete")?;
    Ok(())
}

/// Spinner attached to the demo manager.
fn spinner_on(manager: &Manager, text: &str) -> Spinner {
    Spinner::with_options(
        text,
        SpinnerOptions {
            manager: Some(manager.clone()),
            ..SpinnerOptions::default()
        },
    )
}

/// Run all demos in sequence.
fn demo_all(manager: &Manager, output: &dyn Output) -> Result<()> {
    demo_messages(output)?;
    demo_bar(manager)?;
    demo_spinner(manager, output)?;
    demo_frames(manager)?;
    demo_workflow(manager, output)?;
    Ok(())
}

/// CLI entrypoint.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = Manager::with_options(ManagerOptions {
        colors: if cli.no_color { Some(false) } else { None },
        ..ManagerOptions::default()
    });
    let output = Terminal::with_manager(manager.colors_enabled(), manager.clone());

    match cli.command {
        Some(Commands::Messages) => demo_messages(&output)?,
        Some(Commands::Bar) => demo_bar(&manager)?,
        Some(Commands::Spinner) => demo_spinner(&manager, &output)?,
        Some(Commands::Frames) => demo_frames(&manager)?,
        Some(Commands::Workflow) => demo_workflow(&manager, &output)?,
        Some(Commands::All) => demo_all(&manager, &output)?,
        None => {
            println!("barkeep-demo: Demo harness for barkeep widgets\n");
            println!("Run with --help for usage information.\n");
            // Quick preview
            demo_messages(&output)?;
        }
    }

    output.finish()?;
    Ok(())
}
