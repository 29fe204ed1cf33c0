use crate::consts::{PALETTE_LEN, UNUSED_PALETTE_ENTRY};
use snafu::{ensure, Snafu};

/// More distinct colors were found than an EBF4 palette can hold.
#[derive(Debug, Snafu)]
#[snafu(display(
    "image has {count} distinct quantized colors, the palette holds at most {}",
    PALETTE_LEN
))]
pub struct PaletteOverflowError {
    /// Total number of distinct colors discovered by the scan.
    pub count: usize,
}

/// Fixed 16-slot table mapping a palette index to a native pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: [u8; PALETTE_LEN],
    len: usize,
}

impl Palette {
    /// An empty palette with every slot holding the unused-entry sentinel.
    pub const fn new() -> Self {
        Self {
            entries: [UNUSED_PALETTE_ENTRY; PALETTE_LEN],
            len: 0,
        }
    }

    /// Wraps the palette block of an EBF4 file.
    ///
    /// All 16 slots count as occupied, since the file does not record how
    /// many of them are real colors.
    pub const fn from_bytes(entries: [u8; PALETTE_LEN]) -> Self {
        Self {
            entries,
            len: PALETTE_LEN,
        }
    }

    /// Looks up the native pixel for `index`, or `None` above index 15.
    #[inline]
    pub fn get(&self, index: u8) -> Option<u8> {
        self.entries.get(usize::from(index)).copied()
    }

    /// Number of occupied slots.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The raw 16-byte palette block as written to an EBF4 file.
    pub const fn as_bytes(&self) -> &[u8; PALETTE_LEN] {
        &self.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// `index_by_color` value for colors without an assigned slot.
const NO_INDEX: u8 = 0xFF;

/// Discovers the palette of a quantized raster in first-seen scan order.
///
/// Keeps two fixed-size tables: index to color (the palette itself) and
/// color to index for the packer. The scan keeps counting distinct colors
/// past the capacity limit so the overflow error can report how far over
/// the image is.
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    palette: Palette,
    index_by_color: [u8; 256],
    seen: [bool; 256],
    distinct: usize,
}

impl PaletteBuilder {
    pub const fn new() -> Self {
        Self {
            palette: Palette::new(),
            index_by_color: [NO_INDEX; 256],
            seen: [false; 256],
            distinct: 0,
        }
    }

    /// Scans a quantized raster in row-major order, assigning palette
    /// indices in order of first appearance.
    pub fn scan(pixels: &[u8]) -> Result<Self, PaletteOverflowError> {
        let mut builder = Self::new();
        for &pixel in pixels {
            builder.add(pixel);
        }
        ensure!(
            builder.distinct <= PALETTE_LEN,
            PaletteOverflowSnafu {
                count: builder.distinct,
            }
        );

        Ok(builder)
    }

    fn add(&mut self, pixel: u8) {
        let slot = usize::from(pixel);
        if self.seen[slot] {
            return;
        }
        self.seen[slot] = true;

        if self.distinct < PALETTE_LEN {
            self.index_by_color[slot] = self.distinct as u8;
            self.palette.entries[self.distinct] = pixel;
            self.palette.len = self.distinct + 1;
        }
        self.distinct += 1;
    }

    /// Palette index assigned to `pixel`.
    ///
    /// Only meaningful for pixels that were part of a successful [`scan`].
    ///
    /// [`scan`]: Self::scan
    #[inline]
    pub fn index_of(&self, pixel: u8) -> u8 {
        self.index_by_color[usize::from(pixel)]
    }

    /// The discovered palette, unused slots filled with the sentinel.
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Total distinct colors seen by the scan.
    pub const fn distinct_colors(&self) -> usize {
        self.distinct
    }
}

impl Default for PaletteBuilder {
    fn default() -> Self {
        Self::new()
    }
}
