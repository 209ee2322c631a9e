//! # Buddy Payload Validator
//!
//! A command-line utility for checking request payloads against the Buddy API
//! resource schemas without a running server or store.
//!
//! ## Usage
//!
//! ### Validate a Create Payload
//!
//! ```bash
//! cargo run --bin payload-validator users new-user.json
//! ```
//!
//! ### Validate an Update Payload
//!
//! ```bash
//! cargo run --bin payload-validator groups --partial patch.json
//! ```
//!
//! ### Check Personal Identity Numbers
//!
//! ```bash
//! cargo run --bin payload-validator --personal-id 0101302989 010130-2989
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! Validating users payload (create): new-user.json
//! ✓ Payload is valid!
//!
//! Validated document:
//! {
//!   "name": "Jon Jonsson",
//!   "personalId": "0101302989"
//! }
//! ```
//!
//! ```text
//! Validating groups payload (create): group.json
//! ❌ Validation failed: type: must be one of [association, union, group, troop]
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Every payload or number is valid
//! - `1`: Invalid input, unreadable file, or bad arguments

use buddy_api::PersonalId;
use buddy_api::schema::{SchemaRegistry, validate};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("payload-validator");

    match args.get(1).map(String::as_str) {
        Some("--personal-id") if args.len() > 2 => check_personal_ids(&args[2..]),
        Some(resource) if args.len() > 2 && !resource.starts_with("--") => {
            let partial = args[2] == "--partial";
            let files = if partial { &args[3..] } else { &args[2..] };
            if files.len() != 1 {
                print_usage(program);
            }
            validate_payload_file(resource, partial, Path::new(&files[0]));
        }
        _ => print_usage(program),
    }
}

fn print_usage(program: &str) -> ! {
    eprintln!("Usage: {} <users|groups> [--partial] <payload.json>", program);
    eprintln!("       {} --personal-id <number>...", program);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} users new-user.json", program);
    eprintln!("  {} groups --partial patch.json", program);
    eprintln!("  {} --personal-id 0101302989", program);
    process::exit(1);
}

fn validate_payload_file(resource: &str, partial: bool, path: &Path) {
    let mode = if partial { "update" } else { "create" };
    println!(
        "Validating {} payload ({}): {}",
        resource,
        mode,
        path.display()
    );

    let registry = SchemaRegistry::new();
    let Some(schemas) = registry.get(resource) else {
        eprintln!(
            "❌ Unknown resource '{}'. Known resources: {}",
            resource,
            registry.resource_names().join(", ")
        );
        process::exit(1);
    };

    let payload = match load_json(path) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    };

    let schema = if partial {
        &schemas.partial
    } else {
        &schemas.full
    };

    match validate(schema, &payload) {
        Ok(validated) => {
            println!("✓ Payload is valid!");
            println!();
            println!("Validated document:");
            match serde_json::to_string_pretty(&validated) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("❌ Failed to print document: {}", e);
                    process::exit(1);
                }
            }
            let stripped = count_stripped(&payload, &validated);
            if stripped > 0 {
                println!();
                println!("Note: {} undeclared field(s) were dropped", stripped);
            }
        }
        Err(e) => {
            eprintln!("❌ Validation failed: {}", e);
            process::exit(1);
        }
    }
}

fn check_personal_ids(values: &[String]) {
    let mut invalid = 0;

    for value in values {
        match PersonalId::new(value) {
            Ok(id) => {
                println!(
                    "✓ {} - {:?}, born/registered {}",
                    id.formatted(),
                    id.kind(),
                    id.birth_date()
                );
            }
            Err(e) => {
                println!("❌ {} - {}", value, e.kind);
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        process::exit(1);
    }
}

fn load_json(path: &Path) -> Result<Value, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Invalid JSON in '{}': {}", path.display(), e))
}

/// Count top-level fields dropped by validation.
fn count_stripped(payload: &Value, validated: &Value) -> usize {
    match (payload.as_object(), validated.as_object()) {
        (Some(before), Some(after)) => before.keys().filter(|k| !after.contains_key(*k)).count(),
        _ => 0,
    }
}
