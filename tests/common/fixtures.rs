#![allow(dead_code)]

use serde_json::{json, Value};

/// Wrap section objects into a report data tree
pub fn report(sections: Vec<Value>) -> Value {
    json!({ "sections": sections })
}

/// Create a section object with the given type and contents
pub fn section(header: &str, content_type: &str, contents: Vec<Value>) -> Value {
    json!({
        "header": header,
        "contents-type": content_type,
        "contents": contents
    })
}

pub fn name_value(name: &str, value: &str) -> Value {
    json!({ "name": name, "value": value })
}

/// A name-value item whose value spans the rest of the row
pub fn full_width_name_value(name: &str, value: &str) -> Value {
    json!({ "name": name, "value": value, "styles-page-width": "full" })
}

pub fn user_timestamp_description(user: &str, timestamp: &str, description: &str) -> Value {
    json!({ "user": user, "timestamp": timestamp, "description": description })
}

pub fn user_timestamp_link(user: &str, timestamp: &str, hypertext: &str, url: &str) -> Value {
    json!({ "user": user, "timestamp": timestamp, "hypertext": hypertext, "url": url })
}

pub fn link(hypertext: &str, url: &str) -> Value {
    json!({ "hypertext": hypertext, "url": url })
}

/// The two-section report used throughout the end-to-end tests
pub fn sample_report() -> Value {
    report(vec![
        section(
            "Case details",
            "name-value",
            vec![name_value("Owner", "Dana"), full_width_name_value("Summary", "Disk usage alert")],
        ),
        section("References", "links", vec![link("Runbook", "https://example.com/runbook")]),
    ])
}

/// A name-value section with `count` rows
pub fn long_name_value_section(header: &str, count: usize) -> Value {
    let contents = (0..count)
        .map(|i| name_value(&format!("Field {}", i), &format!("Value {}", i)))
        .collect();
    section(header, "name-value", contents)
}
