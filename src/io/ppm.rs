//! Plain-text PPM (P3) serialization of a color grid.
//!
//! Header is exactly `P3\n<width> <height>\n255\n`, followed by one image
//! row per line, each holding `width` whitespace-separated RGB triples.

use std::{
    fs::File,
    io::{self, BufWriter, ErrorKind, Write},
    path::Path,
};

use log::debug;

use crate::types::Rgb8;

pub fn write_ppm<W: Write>(
    out: &mut W,
    width: usize,
    height: usize,
    colors: &[Rgb8],
) -> io::Result<()> {
    if colors.len() != width.saturating_mul(height) {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "color grid length does not match dimensions",
        ));
    }
    write!(out, "P3\n{width} {height}\n255\n")?;
    if width == 0 {
        return Ok(());
    }
    for row in colors.chunks(width) {
        for (i, px) in row.iter().enumerate() {
            if i > 0 {
                out.write_all(b" ")?;
            }
            write!(out, "{} {} {}", px.r, px.g, px.b)?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes the grid to `path`, buffered. On failure the file handle is
/// closed on the error path and the error is returned to the caller.
pub fn save_ppm(
    path: impl AsRef<Path>,
    width: usize,
    height: usize,
    colors: &[Rgb8],
) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_ppm(&mut out, width, height, colors)?;
    out.flush()?;
    debug!("saved {}x{} frame to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_ppm;
    use crate::types::Rgb8;

    #[test]
    fn exact_output_for_small_grid() {
        let colors = vec![
            Rgb8::new(255, 0, 0),
            Rgb8::new(0, 255, 0),
            Rgb8::new(0, 0, 255),
            Rgb8::new(1, 2, 3),
        ];
        let mut out = Vec::new();
        write_ppm(&mut out, 2, 2, &colors).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n255 0 0 0 255 0\n0 0 255 1 2 3\n");
    }

    #[test]
    fn header_and_row_shape() {
        let w = 5;
        let h = 3;
        let colors = vec![Rgb8::new(10, 20, 30); w * h];
        let mut out = Vec::new();
        write_ppm(&mut out, w, h, &colors).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("P3\n5 3\n255\n"));
        let body: Vec<&str> = text.lines().skip(3).collect();
        assert_eq!(body.len(), h);
        for row in body {
            let values: Vec<&str> = row.split_whitespace().collect();
            assert_eq!(values.len(), w * 3);
            assert!(values.iter().all(|v| v.parse::<u8>().is_ok()));
        }
    }

    #[test]
    fn mismatched_grid_is_rejected() {
        let colors = vec![Rgb8::BLACK; 3];
        let mut out = Vec::new();
        assert!(write_ppm(&mut out, 2, 2, &colors).is_err());
    }
}
