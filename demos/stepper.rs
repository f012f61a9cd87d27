use arc_progress::{ArcCalculator, ArcConfig, ProgressUnit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Full ring left at its unconfigured defaults, stepped in whole percents
    let first = ArcCalculator::new();

    // Clockwise 270° ring with the progress drawn on the inner ring
    let config = ArcConfig::builder()
        .original_angle(135)
        .line_width(20)
        .clockwise(true)
        .line_gap(-18.0)
        .inner_start_angle(135)
        .inner_end_angle(-135)
        .build();
    println!(
        "second ring: progress on {:?}, strokes {:?}",
        config.active_ring(),
        config.ring_strokes()
    );
    let second = ArcCalculator::with_config(config);

    for (percent, basis_point) in (0..=100).step_by(10).zip((0..).step_by(1250)) {
        let a = first.angle_for_progress(ProgressUnit::Percent(percent));
        let b = second.angle_for_progress(ProgressUnit::BasisPoint(basis_point));
        println!(
            "{:>4}% => from {} to {}    {:>6.2}% => from {} to {}",
            percent,
            a.start,
            a.end,
            f64::from(basis_point) / 100.0,
            b.start,
            b.end
        );
    }

    Ok(())
}
