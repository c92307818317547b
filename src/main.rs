use std::path::PathBuf;

use percolate::config::Params;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (Some(n), Some(trials)) = (
        args.get(1).and_then(|s| s.parse::<usize>().ok()),
        args.get(2).and_then(|s| s.parse::<usize>().ok()),
    ) else {
        eprintln!("usage: percolate <n> <trials> [seed] [out_dir]");
        std::process::exit(2);
    };
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(42);
    let out_dir: PathBuf = args
        .get(4)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));

    let params = Params {
        grid_size: n,
        trials,
        ..Params::default()
    };

    eprintln!(
        "Estimating percolation threshold on a {n}x{n} grid, {trials} trials, seed={seed}"
    );

    let (report, timings) = match percolate::run(seed, &params) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    println!("mean                    = {:.16}", report.mean);
    println!("stddev                  = {:.16}", report.stddev);
    println!(
        "95% confidence interval = [{:.16}, {:.16}]",
        report.confidence_lo, report.confidence_hi
    );

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }

    // Snapshot of trial 0's finished grid.
    std::fs::create_dir_all(&out_dir).expect("failed to create output directory");
    let path = out_dir.join("snapshot.png");
    image::save_buffer(
        &path,
        &report.snapshot_rgba,
        report.snapshot_px as u32,
        report.snapshot_px as u32,
        image::ColorType::Rgba8,
    )
    .expect("failed to save image");
    eprintln!("Saved {}", path.display());
}
