/// Smallest width or height a thinning grid may have.
pub const MIN_GRID_DIMENSION: usize = 3;

/// Cell value of a background pixel.
pub const BACKGROUND: u8 = 0;

/// Cell value of a foreground pixel.
pub const FOREGROUND: u8 = 1;

/// Default binarization threshold for 8-bit images: values above it are foreground.
pub const DEFAULT_BINARIZE_THRESHOLD: u8 = 127;

/// Output intensity used when writing foreground pixels to an 8-bit image.
pub const FOREGROUND_INTENSITY: u8 = 255;
