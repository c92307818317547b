use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use percolate::render;
use percolate::replay::replay;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let Some(input) = args.get(1).map(PathBuf::from) else {
        eprintln!("usage: replay <sites-file> [out.png] [cell_px]");
        std::process::exit(2);
    };
    let out: PathBuf = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("replay.png"));
    let cell_px: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(8);

    let file = match File::open(&input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: cannot open {}: {e}", input.display());
            std::process::exit(2);
        }
    };

    let model = match replay(BufReader::new(file)) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let n = model.size();
    println!(
        "{n}x{n} grid, {} open sites, percolates: {}",
        model.number_of_open_sites(),
        model.percolates()
    );

    let rgba = render::render_grid(&model, cell_px);
    let px = (n * cell_px) as u32;
    image::save_buffer(&out, &rgba, px, px, image::ColorType::Rgba8)
        .expect("failed to save image");
    eprintln!("Saved {}", out.display());
}
