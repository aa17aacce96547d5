mod scanline;
mod skia;

pub use scanline::Scanline;
pub use skia::Skia;
