//! Signup Form Example
//!
//! Validates loosely typed form input against a nested check and reports the
//! first failure.
//!
//! Run with: cargo run --example signup
//! Add `--features tracing` to see which field rejected the input.

use want::prelude::*;

fn signup_check() -> Check {
    object_of([
        ("username", string_between(3, 20)),
        ("password", string_between(8, 64)),
        ("age", optional(number_between(13.0, 130.0))),
        ("newsletter", boolean()),
        ("emails", array_between(string_min(3), 1, 5)),
        (
            "address",
            optional(nullable(object_of([
                ("city", string_between(1, 100)),
                ("country", string_between(2, 2)),
            ]))),
        ),
    ])
}

fn submit(form: &Value) -> Result<(), WantError> {
    want("form", form, &signup_check())
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

fn main() {
    init_tracing();
    println!("=== Signup Validation Example ===\n");

    let good = Value::object([
        ("username", Value::from("amy")),
        ("password", Value::from("swordfish")),
        ("newsletter", Value::from(false)),
        ("emails", Value::from(vec!["amy@example.org"])),
        ("address", Value::Null),
    ]);
    report("complete form", submit(&good));

    let bad = Value::object([
        ("username", Value::from("amy")),
        ("password", Value::from("swordfish")),
        ("newsletter", Value::from(false)),
        ("emails", Value::from(vec!["amy@example.org"])),
        (
            "address",
            Value::object([("city", "Validipolis"), ("country", "VALIDLAND")]),
        ),
    ]);
    report("bad country code", submit(&bad));

    let unlabeled = Check::new("", |_: &Value| true);
    report("unlabeled check", want("form", &good, &unlabeled));
}

fn report(case: &str, result: Result<(), WantError>) {
    match result {
        Ok(()) => println!("{}: ok", case),
        Err(WantError::Validation(e)) => {
            println!("{}: {}", case, e);
            println!("  offending value: {}", e.value());
        }
        Err(WantError::Misuse(e)) => println!("{}: bug: {}", case, e),
    }
}
