//! Hapticlab - interactive haptic-feedback parameter explorer
//!
//! Entry point: parses the device/sample-rate options, connects the haptic
//! client, and launches the egui screens.

use anyhow::{anyhow, Result};
use hapticlab::config::AppConfig;
use hapticlab::ui::HapticLabApp;
use hapticlab::{HapticClient, HapticEngine};
use tracing::{error, info};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hapticlab=info".parse().unwrap()),
        )
        .init();

    println!("Hapticlab v{} - haptic parameter explorer", hapticlab::VERSION);
    println!();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let mut config = AppConfig::load();
    let mut config_changed = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => {
                list_devices();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("hapticlab {}", hapticlab::VERSION);
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--device" | "-d" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --device requires a device name");
                    return Ok(());
                }
                config.device = Some(args[i + 1].clone());
                config_changed = true;
                i += 2;
                continue;
            }
            "--sample-rate" | "-r" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --sample-rate requires a value");
                    return Ok(());
                }
                match args[i + 1].parse() {
                    Ok(rate) if HapticEngine::is_valid_sample_rate(rate) => {
                        config.sample_rate = rate;
                        config_changed = true;
                    }
                    Ok(rate) => {
                        eprintln!("Error: Sample rate {} Hz out of range (8000-192000)", rate);
                        return Ok(());
                    }
                    Err(_) => {
                        eprintln!("Error: Invalid sample rate: {}", args[i + 1]);
                        return Ok(());
                    }
                }
                i += 2;
                continue;
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                return Ok(());
            }
        }
    }

    if config_changed {
        if let Err(e) = config.save(&AppConfig::path()) {
            error!("Failed to save config: {}", e);
        }
    }

    // Engine startup failure is fatal: there is no degraded mode
    let client = match HapticClient::connect(config.device.as_deref(), config.sample_rate) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to start haptic engine: {}", e);
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Use --list to see available output devices.");
            std::process::exit(1);
        }
    };

    info!(
        "Engine ready: {} @ {}Hz",
        client.device_name().unwrap_or("unknown"),
        client.sample_rate()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([460.0, 340.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hapticlab",
        native_options,
        Box::new(|_cc| Ok(Box::new(HapticLabApp::new(client)))),
    )
    .map_err(|e| anyhow!("UI error: {}", e))
}

fn print_help() {
    println!("Usage: hapticlab [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -l, --list              List available output devices");
    println!("  -d, --device NAME       Drive the actuator on the specified device");
    println!("  -r, --sample-rate RATE  Set sample rate (default: 48000)");
    println!("  -v, --version           Show version");
    println!("  -h, --help              Show this help");
    println!();
    println!("Device and sample rate are remembered across runs.");
}

fn list_devices() {
    println!("Scanning for output devices...");
    println!();

    match HapticEngine::list_devices() {
        Ok(devices) => {
            if devices.is_empty() {
                println!("No output devices found.");
            } else {
                println!("Found {} device(s):", devices.len());
                println!();
                for (i, device) in devices.iter().enumerate() {
                    let default_marker = if device.is_default { " [DEFAULT]" } else { "" };
                    println!("  {}. {}{}", i + 1, device.name, default_marker);
                    println!("     Channels: {} out", device.output_channels);
                    if !device.sample_rates.is_empty() {
                        println!("     Sample rates: {:?}", device.sample_rates);
                    }
                    println!();
                }
            }
        }
        Err(e) => {
            error!("Failed to list devices: {}", e);
            println!("Error: {}", e);
        }
    }
}
