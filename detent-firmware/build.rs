//! Build script for detent-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates detent.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate detent.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=detent.toml");

    let config_path = Path::new("detent.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: detent.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds detent.toml as its configuration.           ║\n\
            ║  Please create one in the detent-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read detent.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in detent.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_encoder(&config, &mut errors);
    validate_acceleration(&config, &mut errors);
    validate_button(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in detent.toml                     ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=detent.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only the sections the firmware parser understands are allowed
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        if !["encoder", "acceleration", "button"].contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }
}

/// Check that `key` is present only with the expected type and range
fn check_int(
    table: &toml::Table,
    section: &str,
    key: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) if range.contains(v) => {}
        Some(_) => errors.push(format!(
            "[{}] {} must be an integer {}-{}",
            section,
            key,
            range.start(),
            range.end()
        )),
    }
}

fn check_bool(table: &toml::Table, section: &str, key: &str, errors: &mut Vec<String>) {
    if let Some(value) = table.get(key) {
        if !value.is_bool() {
            errors.push(format!("[{}] {} must be true or false", section, key));
        }
    }
}

fn check_choice(
    table: &toml::Table,
    section: &str,
    key: &str,
    choices: &[&str],
    errors: &mut Vec<String>,
) {
    if let Some(value) = table.get(key) {
        match value.as_str() {
            Some(s) if choices.contains(&s) => {}
            _ => errors.push(format!(
                "[{}] {} must be one of {}",
                section,
                key,
                choices.join(", ")
            )),
        }
    }
}

fn check_known_keys(table: &toml::Table, section: &str, known: &[&str], errors: &mut Vec<String>) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown key '{}'", section, key));
        }
    }
}

fn validate_encoder(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(encoder) = config.get("encoder").and_then(|e| e.as_table()) else {
        return;
    };

    check_known_keys(
        encoder,
        "encoder",
        &["steps_per_notch", "active_level", "active_low", "decoder", "acceleration"],
        errors,
    );
    check_int(encoder, "encoder", "steps_per_notch", 1..=4, errors);
    check_choice(encoder, "encoder", "active_level", &["low", "high"], errors);
    check_bool(encoder, "encoder", "active_low", errors);
    check_choice(encoder, "encoder", "decoder", &["gray", "table", "half_step"], errors);
    check_bool(encoder, "encoder", "acceleration", errors);
}

fn validate_acceleration(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(accel) = config.get("acceleration").and_then(|a| a.as_table()) else {
        return;
    };

    check_known_keys(accel, "acceleration", &["ceiling", "slope"], errors);
    check_int(accel, "acceleration", "ceiling", 1..=u16::MAX as i64, errors);
    check_int(accel, "acceleration", "slope", 1..=u16::MAX as i64, errors);

    if let (Some(ceiling), Some(slope)) = (
        accel.get("ceiling").and_then(|v| v.as_integer()),
        accel.get("slope").and_then(|v| v.as_integer()),
    ) {
        if slope > ceiling {
            errors.push("[acceleration] slope above ceiling never accelerates".to_string());
        }
    }
}

fn validate_button(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(button) = config.get("button").and_then(|b| b.as_table()) else {
        return;
    };

    check_known_keys(
        button,
        "button",
        &[
            "active_level",
            "active_low",
            "interval_ticks",
            "hold_ticks",
            "repeat_ticks",
            "double_click_ticks",
            "double_click",
            "long_press_repeat",
        ],
        errors,
    );
    check_choice(button, "button", "active_level", &["low", "high"], errors);
    check_bool(button, "button", "active_low", errors);
    for key in ["interval_ticks", "hold_ticks", "repeat_ticks", "double_click_ticks"] {
        check_int(button, "button", key, 0..=u16::MAX as i64, errors);
    }
    check_bool(button, "button", "double_click", errors);
    check_bool(button, "button", "long_press_repeat", errors);

    let interval = button
        .get("interval_ticks")
        .and_then(|v| v.as_integer())
        .unwrap_or(20);
    if interval == 0 {
        errors.push("[button] interval_ticks must be at least 1".to_string());
    }
}
