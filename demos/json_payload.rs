//! JSON Payload Example
//!
//! Decodes request bodies into `Value` and checks them at the boundary.
//!
//! Run with: cargo run --example json_payload --features serde

use want::prelude::*;

fn order_check() -> Check {
    strict_object_of([
        ("sku", string_between(4, 16)),
        ("quantity", number_between(1.0, 100.0)),
        ("note", optional(nullable(string_between(0, 200)))),
    ])
}

fn handle(body: &str) -> String {
    let payload: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return format!("400 malformed JSON: {}", e),
    };
    match want("body", &payload, &order_check()) {
        Ok(()) => "201 created".to_string(),
        Err(WantError::Validation(e)) => format!(
            "422 {}",
            serde_json::to_string(&e).unwrap_or_else(|_| e.message())
        ),
        Err(WantError::Misuse(e)) => panic!("{}", e),
    }
}

fn main() {
    println!("=== JSON Payload Example ===\n");

    for body in [
        r#"{"sku": "ABCD-1", "quantity": 2}"#,
        r#"{"sku": "ABCD-1", "quantity": 2, "note": null}"#,
        r#"{"sku": "ABCD-1", "quantity": 0}"#,
        r#"{"sku": "ABCD-1", "quantity": 2, "coupon": "FREE"}"#,
        r#"{"sku": "#,
    ] {
        println!("{}\n  -> {}", body, handle(body));
    }
}
