//! Async Submission
//!
//! This example submits a form to a simulated backend.
//!
//! Key concepts:
//! - `handle_submit` hands the current values to an async callback
//! - The submitting flag is raised for the duration of the callback
//! - Subscribers are woken on every state change
//! - The callback's own error type comes back unchanged
//!
//! Run with: cargo run --example async_submit

use formset::rules::RuleSet;
use formset::{FormController, FormValues};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
enum BackendError {
    #[error("rejected: {0}")]
    Rejected(String),
}

async fn save(values: FormValues) -> Result<u64, BackendError> {
    tokio::time::sleep(Duration::from_millis(50)).await;
    if values.get("name").map(String::as_str) == Some("mallory") {
        return Err(BackendError::Rejected("blocked user".to_string()));
    }
    Ok(42)
}

#[tokio::main]
async fn main() {
    println!("=== Async Submission Example ===\n");

    let form = FormController::new();
    form.register("name", Some(RuleSet::builder().required("Name is required").build()));

    let mut rx = form.subscribe();
    let watcher = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let submitting = rx.borrow_and_update().is_submitting();
            println!("  [observer] submitting = {submitting}");
        }
    });

    // Example 1: Successful submission
    println!("Example 1: Submit a valid form");
    if let Err(e) = form.set_value("name", "ada") {
        println!("  change rejected: {e}");
    }
    match form.handle_submit(save).await {
        Ok(id) => println!("  saved with id {id}"),
        Err(e) => println!("  failed: {e}"),
    }
    println!();

    // Example 2: Failing submission
    println!("Example 2: Backend rejects the submission");
    if let Err(e) = form.set_value("name", "mallory") {
        println!("  change rejected: {e}");
    }
    match form.handle_submit(save).await {
        Ok(id) => println!("  saved with id {id}"),
        Err(e) => println!("  failed: {e}"),
    }
    println!();

    let snapshot = form.snapshot();
    println!(
        "Submissions: {}, still submitting: {}",
        snapshot.submission.submit_count, snapshot.submission.is_submitting
    );

    drop(form);
    let _ = watcher.await;

    println!("\n=== Example Complete ===");
}
