//! Signup Form
//!
//! This example walks a signup form through typical input.
//!
//! Key concepts:
//! - Built-in rules checked in a fixed priority order
//! - A custom validator that reads another field via a weak handle
//! - Rules declared as JSON
//! - `trigger` reporting every failing field at once
//!
//! Run with: cargo run --example signup_form

use formset::rules::RuleSet;
use formset::{ChangeEvent, FormController};
use stillwater::validation::Validation;

fn main() {
    println!("=== Signup Form Example ===\n");

    let form = FormController::new();

    // Example 1: Built-in rules
    println!("Example 1: Email field");
    let email = form.register(
        "email",
        Some(
            RuleSet::builder()
                .required("Email is required")
                .email_format("Enter a valid email")
                .build(),
        ),
    );

    for input in ["", "ada", "ada@example.com"] {
        if let Err(e) = email.change(input) {
            println!("  change rejected: {e}");
        }
        println!("  {input:?} -> error {:?}", form.error("email"));
    }
    println!();

    // Example 2: Rules from JSON
    println!("Example 2: Password rules loaded from JSON");
    let password_rules = RuleSet::from_json(
        r#"{
            "required": "Password is required",
            "minLength": {"message": "At least 8 characters", "value": 8},
            "maxLength": {"message": "At most 64 characters", "value": 64}
        }"#,
    );
    let password_rules = match password_rules {
        Ok(rules) => rules,
        Err(e) => {
            println!("  bad rule declaration: {e}");
            return;
        }
    };
    form.register("password", Some(password_rules));

    for input in ["short", "correct horse battery"] {
        let event = ChangeEvent::new("password", input);
        if let Err(e) = form.handle_change(event) {
            println!("  change rejected: {e}");
        }
        println!("  {input:?} -> error {:?}", form.error("password"));
    }
    println!();

    // Example 3: Custom validator reading the form
    println!("Example 3: Confirmation must match the password");
    let weak = form.downgrade();
    let confirm = form.register(
        "confirm",
        Some(
            RuleSet::builder()
                .required("Confirm your password")
                .validate(move |value| {
                    let form = weak.upgrade()?;
                    (value != form.get_value("password"))
                        .then(|| "Passwords do not match".to_string())
                })
                .build(),
        ),
    );

    for input in ["correct horse", "correct horse battery"] {
        if let Err(e) = confirm.change(input) {
            println!("  change rejected: {e}");
        }
        println!("  {input:?} -> error {:?}", form.error("confirm"));
    }
    println!();

    // Example 4: Validate everything
    println!("Example 4: Reset, then validate every field");
    form.reset();
    match form.trigger() {
        Validation::Success(()) => println!("  all fields pass"),
        Validation::Failure(violations) => {
            for violation in violations.iter() {
                println!("  {violation}");
            }
        }
    }
    println!("  form valid: {}", form.is_form_valid());

    println!("\n=== Example Complete ===");
}
