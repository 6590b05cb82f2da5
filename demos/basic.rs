use typedesc_to_openapi::{convert_descriptor, convert_descriptor_with_visibility, Visibility};

fn main() {
    // Example 1: Simple object
    let descriptor1 = r#"{
        "kind": "object",
        "name": "User",
        "properties": [
            { "name": "id", "type": { "kind": "int64" } },
            { "name": "email", "type": { "kind": "string" } },
            { "name": "signedUpAt", "type": { "kind": "dateTime" } }
        ]
    }"#;

    println!("=== Example 1: Simple Object ===");
    println!("{}\n", convert_descriptor(descriptor1).unwrap());

    // Example 2: Array of objects
    let descriptor2 = r#"{
        "kind": "array",
        "element": {
            "kind": "object",
            "properties": [
                { "name": "id", "type": { "kind": "int32" } },
                { "name": "title", "type": { "kind": "string" } }
            ]
        }
    }"#;

    println!("=== Example 2: Array ===");
    println!("{}\n", convert_descriptor(descriptor2).unwrap());

    // Example 3: Nullable primitive
    let descriptor3 = r#"{
        "kind": "nullable",
        "of": { "kind": "double" }
    }"#;

    println!("=== Example 3: Nullable ===");
    println!("{}\n", convert_descriptor(descriptor3).unwrap());

    // Example 4: String-keyed dictionary
    let descriptor4 = r#"{
        "kind": "dictionary",
        "key": { "kind": "string" },
        "value": { "kind": "array", "element": { "kind": "uuid" } }
    }"#;

    println!("=== Example 4: Dictionary ===");
    println!("{}\n", convert_descriptor(descriptor4).unwrap());

    // Example 5: Property-level visibility and renames
    let descriptor5 = r#"{
        "kind": "object",
        "name": "Account",
        "properties": [
            { "name": "balance", "type": { "kind": "double" }, "visibility": "important" },
            { "name": "iban", "rename": "accountNumber", "type": { "kind": "string" } },
            { "name": "auditTrail", "type": { "kind": "string" }, "ignore": true }
        ]
    }"#;

    println!("=== Example 5: Visibility and Renames ===");
    println!("{}\n", convert_descriptor(descriptor5).unwrap());

    // Example 6: Root visibility on an untyped payload container
    let descriptor6 = r#"{
        "kind": "object",
        "properties": [
            { "name": "payload", "type": { "kind": "jsonObject" } }
        ]
    }"#;

    println!("=== Example 6: Root Visibility ===");
    println!(
        "{}\n",
        convert_descriptor_with_visibility(descriptor6, Visibility::Advanced).unwrap()
    );
}
