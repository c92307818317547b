use rayon::prelude::*;

use crate::percolation::Percolation;

// Visualizer palette: full sites light blue, open-but-dry white, blocked dark.
const BLOCKED: [u8; 4] = [28, 32, 40, 255];
const OPEN_DRY: [u8; 4] = [245, 245, 245, 255];
const FULL: [u8; 4] = [108, 170, 236, 255];

/// Render the grid state to RGBA, `cell_px` pixels per site. Output is
/// (n * cell_px) square, pixel rows top-to-bottom matching grid rows.
pub fn render_grid(model: &Percolation, cell_px: usize) -> Vec<u8> {
    let n = model.size();
    let cell = cell_px.max(1);
    let w = n * cell;
    let mut rgba = vec![0u8; w * w * 4];

    rgba.par_chunks_mut(w * 4).enumerate().for_each(|(py, prow)| {
        let row = py / cell + 1;
        for col in 1..=n {
            // Queries cannot fail for in-range coordinates.
            let color = if model.is_full(row, col).unwrap_or(false) {
                FULL
            } else if model.is_open(row, col).unwrap_or(false) {
                OPEN_DRY
            } else {
                BLOCKED
            };
            for px in (col - 1) * cell..col * cell {
                prow[px * 4..px * 4 + 4].copy_from_slice(&color);
            }
        }
    });

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_open_and_blocked_sites_get_distinct_colors() {
        let mut model = Percolation::new(2).expect("n = 2");
        model.open(1, 1).unwrap(); // full (top row)
        model.open(2, 2).unwrap(); // open but dry (no path to top)

        let rgba = render_grid(&model, 1);
        assert_eq!(rgba.len(), 2 * 2 * 4);
        assert_eq!(&rgba[0..4], &FULL);
        assert_eq!(&rgba[4..8], &BLOCKED);
        assert_eq!(&rgba[8..12], &BLOCKED);
        assert_eq!(&rgba[12..16], &OPEN_DRY);
    }

    #[test]
    fn cell_scaling_multiplies_dimensions() {
        let model = Percolation::new(3).expect("n = 3");
        let rgba = render_grid(&model, 4);
        assert_eq!(rgba.len(), 12 * 12 * 4);
    }
}
