pub mod image;
#[cfg(feature = "terminal")]
pub mod terminal;

pub use image::ImageTarget;
#[cfg(feature = "terminal")]
pub use terminal::{poll_done, TerminalGuard, TerminalPresenter};

/// Nearest-neighbor index map from an output axis onto a source axis,
/// clamped to valid source indices. Presenters resample with this per axis.
pub fn resample_index(out_idx: usize, out_dim: usize, src_dim: usize) -> usize {
    if src_dim == 0 {
        return 0;
    }
    if out_dim <= 1 {
        return 0;
    }
    let t = out_idx as f32 / (out_dim - 1) as f32;
    let idx = (t * (src_dim - 1) as f32) as usize;
    idx.min(src_dim - 1)
}
