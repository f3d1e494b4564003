//! Build script for coilrail-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates launcher.toml, then generates the launch
//!   configuration constants compiled into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use coilrail_core::config::{ConfigError, LaunchConfig};
use serde::Deserialize;

/// Layout of launcher.toml
#[derive(Deserialize)]
struct LauncherFile {
    #[serde(default)]
    launch: LaunchConfig,
    serial: SerialSection,
}

#[derive(Deserialize)]
struct SerialSection {
    baud: u32,
}

fn main() {
    setup_linker();
    let file = load_config();
    write_config(&file);
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

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate launcher.toml
fn load_config() -> LauncherFile {
    println!("cargo:rerun-if-changed=launcher.toml");

    let config_path = Path::new("launcher.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: launcher.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a launcher.toml configuration file.       ║\n\
            ║  Please create one in the coilrail-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read launcher.toml                             ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let file: LauncherFile = match toml::from_str(&config_content) {
        Ok(file) => file,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid launcher.toml                                    ║\n\
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
    if let Err(e) = file.launch.validate() {
        errors.push(describe(e));
    }
    if file.serial.baud == 0 {
        errors.push("[serial] baud must be non-zero");
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid launch configuration                             ║\n\
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

    println!("cargo:warning=launcher.toml validated successfully");
    file
}

/// Human-readable form of a validation failure
fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::ZeroPulseWidth => "[launch] pulse_width_ms must be non-zero",
        ConfigError::PulseExceedsFailSafe => "[launch] pulse_width_ms must be below fail_safe_ms",
        ConfigError::HoldOffExceedsFailSafe => {
            "[launch.holdoff] out_max_ms must be below fail_safe_ms"
        }
        ConfigError::EmptyInputRange => "[launch.holdoff] in_max must be above in_min",
        ConfigError::InvertedOutputRange => "[launch.holdoff] out_max_ms below out_min_ms",
        ConfigError::ZeroDistance => "[launch] sensor distances must be non-zero",
        ConfigError::ZeroDebounceWindow => "[launch] debounce_window_ms must be non-zero",
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            // Cut on a char boundary
            let truncated = match line.char_indices().nth(61) {
                Some((cut, _)) if line.chars().count() > 64 => format!("{}...", &line[..cut]),
                _ => line.to_string(),
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate launcher_config.rs in OUT_DIR
fn write_config(file: &LauncherFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let launch = &file.launch;
    let holdoff = &launch.holdoff;

    let source = format!(
        "/// Launch configuration from launcher.toml\n\
         pub const LAUNCH_CONFIG: LaunchConfig = LaunchConfig {{\n    \
             cooldown_ms: {},\n    \
             fail_safe_ms: {},\n    \
             pulse_width_ms: {},\n    \
             start_to_sensor1_mm: {},\n    \
             sensor1_to_sensor2_mm: {},\n    \
             debounce_window_ms: {},\n    \
             holdoff: HoldOffScale {{\n        \
                 in_min: {},\n        \
                 in_max: {},\n        \
                 out_min_ms: {},\n        \
                 out_max_ms: {},\n    \
             }},\n\
         }};\n\
         \n\
         /// Diagnostic UART baud rate from launcher.toml\n\
         pub const SERIAL_BAUD: u32 = {};\n",
        launch.cooldown_ms,
        launch.fail_safe_ms,
        launch.pulse_width_ms,
        launch.start_to_sensor1_mm,
        launch.sensor1_to_sensor2_mm,
        launch.debounce_window_ms,
        holdoff.in_min,
        holdoff.in_max,
        holdoff.out_min_ms,
        holdoff.out_max_ms,
        file.serial.baud,
    );

    fs::write(out_dir.join("launcher_config.rs"), source).unwrap();
}
