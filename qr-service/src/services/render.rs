use crate::models::ModuleMatrix;

pub const DARK_PIXEL: &str = "██";
pub const LIGHT_PIXEL: &str = "  ";

/// Rasterizes `matrix` into newline-joined rows of two-character glyphs,
/// surrounded by `quiet_zone` light modules on every side.
///
/// Inversion swaps the glyphs after the dark/light decision, so with
/// `invert` the quiet zone is drawn with [`DARK_PIXEL`].
pub fn render_text(matrix: &ModuleMatrix, quiet_zone: usize, invert: bool) -> String {
    let (dark_pixel, light_pixel) = if invert {
        (LIGHT_PIXEL, DARK_PIXEL)
    } else {
        (DARK_PIXEL, LIGHT_PIXEL)
    };

    let count = matrix.size() as isize;
    let quiet = quiet_zone as isize;
    let side = matrix.size() + 2 * quiet_zone;

    let mut lines = Vec::with_capacity(side);
    for y in -quiet..count + quiet {
        let mut row = String::with_capacity(side * DARK_PIXEL.len());
        for x in -quiet..count + quiet {
            let is_dark = x >= 0
                && y >= 0
                && x < count
                && y < count
                && matrix.is_dark(y as usize, x as usize);
            row.push_str(if is_dark { dark_pixel } else { light_pixel });
        }
        lines.push(row);
    }

    lines.join("\n")
}
