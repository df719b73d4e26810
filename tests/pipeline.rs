use ai_image_forensics::{
    AnalysisConfig, ForensicsAnalyzer, MetadataResult,
    detection::{Impact, Verdict, scoring::ScoringThresholds},
    error::ForensicsError,
    report::JsonReport,
};
use image::{DynamicImage, Rgb, RgbImage};

fn uniform_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([90, 140, 200])))
}

fn checkerboard(size: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(size, size, |x, y| {
        if (x + y) % 2 == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
    }))
}

fn camera_metadata() -> MetadataResult {
    MetadataResult {
        camera_make: Some("Canon".into()),
        camera_model: Some("EOS R5".into()),
        exif_found: true,
        ..MetadataResult::default()
    }
}

#[test]
fn uniform_image_looks_synthetic() {
    let report = ForensicsAnalyzer::from_image(uniform_image(300, 200))
        .full_analysis()
        .unwrap();

    assert_eq!(report.pixel.smoothness_score, 100.0);
    assert_eq!(report.pixel.noise_score, 0.0);
    assert_eq!(report.result.score, 75);
    assert_eq!(report.result.verdict, Verdict::LikelyAi);

    let names = report
        .result
        .signals
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Missing EXIF", "Unnatural Smoothness", "Low Noise Levels"]);
}

#[test]
fn configured_thresholds_reach_the_score() {
    let config = AnalysisConfig {
        thresholds: ScoringThresholds {
            missing_exif_points: 0,
            smoothness_high: 100.0,
            ..ScoringThresholds::default()
        },
        ..AnalysisConfig::default()
    };
    let report = ForensicsAnalyzer::from_image(uniform_image(300, 200))
        .with_config(config)
        .full_analysis()
        .unwrap();

    // 100% flatness now only clears the moderate band
    assert_eq!(report.result.score, 40);
    assert_eq!(report.result.verdict, Verdict::Inconclusive);
    let names = report
        .result
        .signals
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Missing EXIF", "Low Noise Levels"]);
}

#[test]
fn checkerboard_with_camera_exif_looks_real() {
    let report = ForensicsAnalyzer::from_image(checkerboard(256))
        .with_metadata(camera_metadata())
        .full_analysis()
        .unwrap();

    assert_eq!(report.pixel.smoothness_score, 0.0);
    assert!((report.pixel.noise_score - 1020.0).abs() < 1e-6);
    assert!(report.frequency.anomaly_score < 100.0);
    assert_eq!(report.result.score, 0);
    assert_eq!(report.result.verdict, Verdict::LikelyReal);
    assert!(report.result.signals.is_empty());
}

#[test]
fn ai_software_metadata_dominates() {
    let metadata = MetadataResult {
        software: Some("Midjourney v6".into()),
        exif_found: true,
        ai_flags: vec!["AI Software Detected: Midjourney v6".into()],
        provenance_present: true,
        ..MetadataResult::default()
    };
    let report = ForensicsAnalyzer::from_image(checkerboard(64))
        .with_metadata(metadata)
        .full_analysis()
        .unwrap();

    assert_eq!(report.result.score, 80);
    assert_eq!(report.result.signals[0].impact, Impact::High);
    assert_eq!(report.result.signals[0].detail, "AI Software Detected: Midjourney v6");
    assert_eq!(report.result.signals[1].name, "Content Credentials");
}

#[test]
fn zero_sized_image_is_a_decode_error() {
    for parallel in [true, false] {
        let config = AnalysisConfig {
            parallel,
            ..AnalysisConfig::default()
        };
        let empty = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        let analyzer = ForensicsAnalyzer::from_image(empty).with_config(config);

        assert!(matches!(
            analyzer.full_analysis(),
            Err(ForensicsError::Decode { width: 0, height: 0 })
        ));
        assert!(analyzer.analyze_frequency().is_err());
        assert!(analyzer.analyze_pixels().is_err());
    }
}

#[test]
fn parallel_and_sequential_agree() {
    let mut rgb = RgbImage::new(1500, 700);
    for (x, y, pixel) in rgb.enumerate_pixels_mut() {
        let v = ((x * 31 + y * 17) % 251) as u8;
        *pixel = Rgb([v, v.wrapping_mul(3), 255 - v]);
    }
    let image = DynamicImage::ImageRgb8(rgb);

    let parallel = ForensicsAnalyzer::from_image(image.clone())
        .full_analysis()
        .unwrap();
    let sequential = ForensicsAnalyzer::from_image(image)
        .with_config(AnalysisConfig {
            parallel: false,
            ..AnalysisConfig::default()
        })
        .full_analysis()
        .unwrap();

    assert_eq!(parallel.result, sequential.result);
    assert_eq!(parallel.pixel.noise_score, sequential.pixel.noise_score);
    assert_eq!(parallel.frequency.spectrum, sequential.frequency.spectrum);
    assert_eq!(parallel.pixel.high_pass.dimensions(), (1024, 478));
}

#[test]
fn invalid_config_is_rejected() {
    let config = AnalysisConfig {
        frequency_size: 200,
        ..AnalysisConfig::default()
    };
    let analyzer = ForensicsAnalyzer::from_image(uniform_image(8, 8)).with_config(config);

    assert!(matches!(
        analyzer.full_analysis(),
        Err(ForensicsError::InvalidParameter(_))
    ));
}

#[test]
fn loads_file_and_reads_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.png");
    RgbImage::from_pixel(40, 30, Rgb([12, 34, 56])).save(&path).unwrap();

    let analyzer = ForensicsAnalyzer::new(&path).unwrap();
    let metadata = analyzer.metadata().unwrap();
    assert!(!metadata.exif_found);
    assert!(metadata.ai_flags.is_empty());

    let report = analyzer.full_analysis().unwrap();
    assert_eq!(report.result.signals[0].name, "Missing EXIF");
}

#[test]
fn json_report_round_trips_through_serde() {
    let report = ForensicsAnalyzer::from_image(uniform_image(64, 64))
        .with_metadata(camera_metadata())
        .full_analysis()
        .unwrap();

    let json = JsonReport::from(&report).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["score"], 55);
    assert_eq!(value["verdict"], "Inconclusive / Suspicious");
    assert_eq!(value["signals"][0]["name"], "Unnatural Smoothness");
    assert_eq!(value["signals"][0]["impact"], "Medium");
    assert_eq!(value["metadata"]["camera_info"], "EOS R5");
    assert_eq!(value["frequency_analysis"]["spectrum_size"], 256);
}
