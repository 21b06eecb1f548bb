//! Command-line interface for munsell_engine
//!
//! Converts Munsell notation to XYZ, sRGB and hex, or device colors back
//! to Munsell notation. Set RUST_LOG=debug to see engine logging.

use munsell_engine::{Conversion, ConverterConfig, Munsell, MunsellConverter};
use palette::{Srgb, Xyz};
use std::{env, path::Path, process};

enum Input {
    Notation(String),
    Srgb([f64; 3]),
    Hex(String),
    Xyz([f64; 3]),
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut json_output = false;
    let mut config_path = None;
    let mut input = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json_output = true,
            "--config" => {
                i += 1;
                config_path = Some(require(&args, i, "--config").to_string());
            }
            "--srgb" => {
                input = Some(Input::Srgb(parse_triplet(&args, i + 1, "--srgb")));
                i += 3;
            }
            "--xyz" => {
                input = Some(Input::Xyz(parse_triplet(&args, i + 1, "--xyz")));
                i += 3;
            }
            "--hex" => {
                i += 1;
                input = Some(Input::Hex(require(&args, i, "--hex").to_string()));
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                // Notation may arrive split, e.g. `5R 4/14`
                match &mut input {
                    Some(Input::Notation(text)) => {
                        text.push(' ');
                        text.push_str(arg);
                    }
                    None => input = Some(Input::Notation(arg.to_string())),
                    Some(_) => {
                        eprintln!("Error: Multiple inputs provided");
                        process::exit(1);
                    }
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        print_help(&args[0]);
        process::exit(1);
    };

    let config = match config_path {
        Some(path) => ConverterConfig::from_json_file(Path::new(&path)).unwrap_or_else(|e| {
            eprintln!("Error: {}", e.user_message());
            process::exit(1);
        }),
        None => ConverterConfig::default(),
    };
    let converter = MunsellConverter::with_config(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    match input {
        Input::Notation(text) => {
            let munsell: Munsell = text.parse().unwrap_or_else(|e: munsell_engine::MunsellError| {
                eprintln!("Error: {}", e.user_message());
                process::exit(1);
            });
            print_forward(&converter, munsell, json_output);
        }
        Input::Srgb(rgb) => {
            let srgb = Srgb::new(rgb[0], rgb[1], rgb[2]);
            print_reverse(&converter, converter.srgb_to_munsell(srgb), json_output);
        }
        Input::Hex(hex) => {
            let srgb = converter.hex_to_srgb(&hex).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                process::exit(1);
            });
            print_reverse(&converter, converter.srgb_to_munsell(srgb), json_output);
        }
        Input::Xyz(xyz) => {
            let result = converter.xyz_to_munsell(Xyz::new(xyz[0], xyz[1], xyz[2]));
            print_reverse(&converter, result, json_output);
        }
    }
}

fn require<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    args.get(i).map(String::as_str).unwrap_or_else(|| {
        eprintln!("Error: {} needs a value", flag);
        process::exit(1);
    })
}

fn parse_triplet(args: &[String], start: usize, flag: &str) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (k, slot) in out.iter_mut().enumerate() {
        let text = require(args, start + k, flag);
        *slot = text.parse().unwrap_or_else(|_| {
            eprintln!("Error: {} expects three numbers, got '{}'", flag, text);
            process::exit(1);
        });
    }
    out
}

fn print_forward(converter: &MunsellConverter, munsell: Munsell, json_output: bool) {
    let xyz = converter.munsell_to_xyz(munsell);
    let srgb = converter.munsell_to_srgb(munsell);
    let hex = converter.srgb_to_hex(srgb.color);

    if json_output {
        let value = serde_json::json!({
            "munsell": munsell,
            "xyz": xyz.color,
            "srgb": srgb.color,
            "hex": hex,
            "saturated": xyz.saturated,
        });
        match serde_json::to_string_pretty(&value) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing JSON: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("Munsell: {}", munsell);
    println!(
        "XYZ (D65): X={:.5}, Y={:.5}, Z={:.5}",
        xyz.color.x, xyz.color.y, xyz.color.z
    );
    println!(
        "sRGB: R={:.3}, G={:.3}, B={:.3}",
        srgb.color.red, srgb.color.green, srgb.color.blue
    );
    println!("Hex: {}", hex);
    if xyz.saturated {
        println!("Note: outside the tabulated Munsell gamut, result is clamped");
    }
}

fn print_reverse(converter: &MunsellConverter, result: Conversion<Munsell>, json_output: bool) {
    if json_output {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing JSON: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let m = result.color;
    println!("Munsell: {}", m);
    println!(
        "Hue: {:.2} ({}), Value: {:.3}, Chroma: {:.3}",
        m.hue,
        m.hue_name(),
        m.value,
        m.chroma
    );
    if result.saturated {
        println!("Note: outside the tabulated Munsell gamut, result is extrapolated");
    }
    let preview = converter.munsell_to_srgb(m);
    println!("Preview: {}", converter.srgb_to_hex(preview.color));
}

fn print_help(program: &str) {
    println!("munsell_engine CLI - Munsell color conversion");
    println!();
    println!("Usage:");
    println!("  {} [OPTIONS] <NOTATION>", program);
    println!("  {} [OPTIONS] --srgb <R> <G> <B>", program);
    println!("  {} [OPTIONS] --hex <RRGGBB>", program);
    println!("  {} [OPTIONS] --xyz <X> <Y> <Z>", program);
    println!();
    println!("Arguments:");
    println!("  <NOTATION>           Munsell notation, e.g. \"5R 4.0/14.0\" or \"N 5.0\"");
    println!();
    println!("Options:");
    println!("  --srgb <R> <G> <B>   sRGB components in [0, 1]");
    println!("  --hex <RRGGBB>       sRGB hex color");
    println!("  --xyz <X> <Y> <Z>    CIE XYZ under D65, Y in [0, 1]");
    println!("  --config <FILE>      Load converter settings from JSON");
    println!("  --json               Output results as JSON");
    println!("  -h, --help           Print help information");
    println!();
    println!("Examples:");
    println!("  {} 5R 4/14", program);
    println!("  {} --hex \"#3366CC\" --json", program);
    println!("  RUST_LOG=debug {} --srgb 0.2 0.4 0.8", program);
}
