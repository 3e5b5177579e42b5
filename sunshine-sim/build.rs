//! Build script for sunshine-sim
//!
//! Validates face.toml at compile time so a broken embedded default is a
//! build error rather than a startup failure.

use std::fs;
use std::path::Path;

/// Events the scripted session understands, with their required keys
const EVENTS: &[(&str, &[&str])] = &[
    ("created", &[]),
    ("visibility", &["visible"]),
    ("properties", &[]),
    ("ambient", &["ambient"]),
    ("time_zone", &["zone"]),
    ("insets", &["round"]),
    ("tap", &["kind"]),
    ("destroyed", &[]),
];

fn main() {
    println!("cargo:rerun-if-changed=face.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let config_path = Path::new("face.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read face.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in face.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    validate_steps(&config, &mut errors);
    validate_updates(&config, &mut errors);
    if !errors.is_empty() {
        fail("Invalid simulation in face.toml", &errors);
    }
}

fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| format!("║  • {:<62} ║", line))
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

fn array<'a>(config: &'a toml::Value, key: &str) -> &'a [toml::Value] {
    config
        .get("simulation")
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn validate_steps(config: &toml::Value, errors: &mut Vec<String>) {
    for (i, step) in array(config, "steps").iter().enumerate() {
        if step.get("at_ms").and_then(|v| v.as_integer()).is_none() {
            errors.push(format!("step {} missing integer 'at_ms'", i));
        }
        let Some(event) = step.get("event").and_then(|v| v.as_str()) else {
            errors.push(format!("step {} missing 'event'", i));
            continue;
        };
        match EVENTS.iter().find(|(name, _)| *name == event) {
            Some((_, required)) => {
                for key in *required {
                    if step.get(*key).is_none() {
                        errors.push(format!("step {} ({}) missing '{}'", i, event, key));
                    }
                }
            }
            None => errors.push(format!("step {} has unknown event '{}'", i, event)),
        }
    }
}

fn validate_updates(config: &toml::Value, errors: &mut Vec<String>) {
    for (i, update) in array(config, "updates").iter().enumerate() {
        if update.get("at_ms").and_then(|v| v.as_integer()).is_none() {
            errors.push(format!("update {} missing integer 'at_ms'", i));
        }
        let has_raw = update.get("raw").is_some();
        let has_forecast = update.get("high").is_some() && update.get("low").is_some();
        if !has_raw && !has_forecast {
            errors.push(format!("update {} needs 'raw' or both 'high' and 'low'", i));
        }
    }
}
