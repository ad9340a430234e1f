//! # Brewcalc CLI Application
//!
//! Terminal front end for the brew_core calculations. Prompts for hydrometer
//! readings and bottling details, then prints a report and its JSON.
//!
//! Set `BREWCALC_SETTINGS` to a JSON settings file to override the mash
//! constants, and `RUST_LOG=brew_core=debug` to see calculation traces.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use brew_core::calculations::{
    carbonation, fermentation, mash, CarbonationInput, CarbonationMethod, FermentationInput, MashInput,
    PrimingSugar,
};
use brew_core::format::format_value;
use brew_core::{load_settings, BrewError, BrewSettings};
use tracing_subscriber::EnvFilter;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn settings_from_env() -> BrewSettings {
    match std::env::var("BREWCALC_SETTINGS") {
        Ok(path) => match load_settings(&PathBuf::from(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "falling back to default settings");
                BrewSettings::default()
            }
        },
        Err(_) => BrewSettings::default(),
    }
}

fn main() {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    println!("Brewcalc CLI - Home-Brewing Calculator");
    println!("======================================");
    println!();

    let settings = settings_from_env();

    let og_sg = prompt_f64("Enter original gravity [1.050]: ", 1.050);
    let fg_sg = prompt_f64("Enter final gravity [1.010]: ", 1.010);
    let grain_lb = prompt_f64("Enter grain bill (lb) [10.0]: ", 10.0);
    let batch_l = prompt_f64("Enter batch size (L) [19.0]: ", 19.0);
    let beer_temp_f = prompt_f64("Enter beer temperature (F) [68.0]: ", 68.0);
    let volumes = prompt_f64("Enter target volumes CO2 [2.5]: ", 2.5);

    let ferment_input = FermentationInput {
        label: "CLI-Batch".to_string(),
        og_sg,
        fg_sg,
    };
    let mash_input = MashInput {
        label: "CLI-Mash".to_string(),
        grain_weight_lb: grain_lb,
        water_volume_gal: None,
        grain_temp_f: 70.0,
        target_mash_temp_f: 152.0,
    };
    let carb_input = CarbonationInput {
        label: "CLI-Bottling".to_string(),
        beer_temp_f,
        target_volumes_co2: volumes,
        method: CarbonationMethod::Natural {
            batch_size_l: batch_l,
            sugar: PrimingSugar::corn_sugar(),
        },
    };

    println!();

    let report = fermentation::calculate(&ferment_input).and_then(|ferment| {
        let mash = mash::calculate(&mash_input, &settings)?;
        let carb = carbonation::calculate(&carb_input)?;
        Ok((ferment, mash, carb))
    });

    match report {
        Ok((ferment, mash, carb)) => {
            println!("═══════════════════════════════════════");
            println!("  BREW DAY REPORT");
            println!("═══════════════════════════════════════");
            println!();
            println!("Gravity:");
            println!("  OG: {:.3} ({} °P)", og_sg, format_value(ferment.og_plato, 1));
            println!("  FG: {:.3} ({} °P)", fg_sg, format_value(ferment.fg_plato, 1));
            println!();
            println!("Fermentation:");
            println!("  ABV:         {}%", format_value(ferment.abv_percent, 1));
            println!("  ABW:         {}%", format_value(ferment.abw_percent, 1));
            println!("  Real extract {} °P", format_value(ferment.real_extract_plato, 1));
            println!("  AA / RA:     {}% / {}%",
                format_value(ferment.apparent_attenuation_percent, 1),
                format_value(ferment.real_attenuation_percent, 1)
            );
            println!("  Calories:    {} per 12 oz", format_value(ferment.calories_per_12oz, 0));
            println!();
            println!("Mash ({} qt/lb):", format_value(mash.water_to_grain_ratio, 2));
            println!("  Water:       {} gal", format_value(mash.water_volume_gal, 2));
            println!("  Strike temp: {} °F", format_value(mash.strike_temp_f, 1));
            println!("  Total vol:   {} gal", format_value(mash.total_volume_gal, 2));
            println!();
            println!("Bottling:");
            if carb.needs_priming() {
                println!("  Corn sugar:  {} g ({} oz)",
                    format_value(carb.corn_sugar_g.unwrap_or_default(), 1),
                    format_value(carb.corn_sugar_oz.unwrap_or_default(), 2)
                );
            } else {
                println!("  Beer already holds the target carbonation - no priming sugar needed");
            }
            println!();

            println!("JSON Output (for API use):");
            let json = serde_json::json!({
                "fermentation": ferment,
                "mash": mash,
                "carbonation": carb,
            });
            if let Ok(text) = serde_json::to_string_pretty(&json) {
                println!("{}", text);
            }
        }
        Err(e) => print_error(&e),
    }
}

fn print_error(e: &BrewError) {
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
