use quickshift_segmentation::config::demo::{load_config, DemoConfig};
use quickshift_segmentation::image::io::{load_rgb_image, write_json_file};
use quickshift_segmentation::{segment, Segmentation};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| "usage: quickshift_demo <config.json>".to_string())?;
    let config = load_config(&config_path)?;

    let image = load_rgb_image(&config.input)?;
    let params = config.params.to_params();
    let result = segment(&image, &params).map_err(|e| e.to_string())?;

    if !config.output.quiet {
        print_text_summary(&config, image.w, image.h, &result);
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &result)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(config: &DemoConfig, width: usize, height: usize, result: &Segmentation) {
    println!("Quickshift summary");
    println!("  input: {} ({}x{})", config.input.display(), width, height);
    println!(
        "  sigma: {:.2}  tau: {:.2}  ratio: {:.2}",
        config.params.sigma, config.params.tau, config.params.ratio
    );
    match config.params.seed {
        Some(seed) => println!("  seed: {seed}"),
        None => println!("  seed: entropy"),
    }
    println!("  segments: {}", result.num_segments);
    println!("  tree: {}", if result.tree.is_some() { "yes" } else { "no" });

    let d = &result.diagnostics;
    println!(
        "\nTimings (ms): density={:.3} link={:.3} cut={:.3} flatten={:.3} total={:.3}",
        d.density_ms, d.link_ms, d.cut_ms, d.flatten_ms, result.latency_ms
    );
    println!(
        "Flattening: {} iterations, {} links cut",
        d.flatten_iterations, d.links_cut
    );
}
