use pixel_rescale::buffer::io::{buffer_from_rgba, save_rgba_image, write_json_file};
use pixel_rescale::config::load_config;
use pixel_rescale::dispatch;
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

#[derive(Serialize)]
struct RunReport {
    input: String,
    strategy: String,
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
    elapsed_ms: f64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: rescale_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;

    let image = image::open(&config.input_path)
        .map_err(|e| format!("Failed to open {}: {e}", config.input_path.display()))?;
    let (src_w, src_h) = (image.width(), image.height());

    let t0 = Instant::now();
    let resized =
        dispatch::resize(&image, config.target, config.strategy).map_err(|e| e.to_string())?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let out_buf = buffer_from_rgba(&resized).map_err(|e| e.to_string())?;
    save_rgba_image(&out_buf, &config.output.image_out)?;

    println!(
        "Resized {}x{} -> {}x{} via {:?} in {:.3} ms",
        src_w,
        src_h,
        resized.width(),
        resized.height(),
        config.strategy,
        elapsed_ms
    );
    println!("Image written to {}", config.output.image_out.display());

    if let Some(path) = &config.output.json_out {
        let report = RunReport {
            input: config.input_path.display().to_string(),
            strategy: format!("{:?}", config.strategy),
            src_w,
            src_h,
            dst_w: resized.width(),
            dst_h: resized.height(),
            elapsed_ms,
        };
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}
