// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;
use std::process;

use stick_trail_render::constants::{DEFAULT_INPUT, DEFAULT_SPEED};
use stick_trail_render::pipeline::render_log_to_video;
use stick_trail_render::render_framework::RenderConfig;

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [input_file] [--speed <multiplier>]");
    eprintln!("  input_file            input log file (default '{DEFAULT_INPUT}')");
    eprintln!("  --speed <multiplier>  playback speed, > 1 is faster (default {DEFAULT_SPEED})");
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let mut input_file = DEFAULT_INPUT.to_string();
    let mut speed = DEFAULT_SPEED;
    let mut input_file_seen = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                return Ok(());
            }
            "--speed" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("Error: --speed requires a value.");
                    print_usage(&args[0]);
                    process::exit(1);
                };
                speed = value.parse::<f64>().unwrap_or_else(|_| {
                    eprintln!("Error: invalid --speed value '{value}'.");
                    process::exit(1);
                });
            }
            flag if flag.starts_with("--") => {
                eprintln!("Error: unknown option '{flag}'.");
                print_usage(&args[0]);
                process::exit(1);
            }
            positional => {
                if input_file_seen {
                    eprintln!("Error: more than one input file given.");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                input_file = positional.to_string();
                input_file_seen = true;
            }
        }
        i += 1;
    }

    let config = RenderConfig::default();
    render_log_to_video(Path::new(&input_file), speed, &config)?;
    Ok(())
}
