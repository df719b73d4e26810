//! Synthetic Image Likelihood Example
//!
//! Scores one image, prints the evidence and the JSON report, and writes the
//! spectrum and high-pass renderings next to it.
//!
//! Run with: cargo run --example analyze_image -- <image_path> [output_dir]

use std::{env, fs, path::Path};

use ai_image_forensics::{
    ForensicsAnalyzer, error::Result, report::JsonReport, report::visualization::Visualizer,
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <image_path> [output_dir]", args[0]);
        return Ok(());
    }

    let image_path = &args[1];
    let output_dir = args.get(2).map(|s| s.as_str()).unwrap_or("./output");

    if !Path::new(image_path).exists() {
        eprintln!("Error: Image file '{}' not found", image_path);
        std::process::exit(1);
    }
    fs::create_dir_all(output_dir)?;

    let analyzer = ForensicsAnalyzer::new(image_path)?;
    let report = analyzer.full_analysis()?;

    println!("Verdict: {}", report.result.summary());
    for signal in &report.result.signals {
        println!("  [{:?}] {}: {}", signal.impact, signal.name, signal.detail);
    }
    println!();
    println!("  Noise level:    {:.3}", report.pixel.noise_score);
    println!("  Smoothness:     {:.1}%", report.pixel.smoothness_score);
    println!("  Spectral score: {:.3}", report.frequency.anomaly_score);
    println!();

    match JsonReport::from(&report).to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize report: {}", e),
    }

    let visualizer = Visualizer::new();
    let spectrum_path = Path::new(output_dir).join("spectrum.png");
    let high_pass_path = Path::new(output_dir).join("high_pass.png");
    visualizer.spectrum_image(&report.frequency.spectrum).save(&spectrum_path)?;
    report.pixel.high_pass.save(&high_pass_path)?;

    println!();
    println!("Saved {}", spectrum_path.display());
    println!("Saved {}", high_pass_path.display());

    Ok(())
}
