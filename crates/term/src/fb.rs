//! Character buffer used for both rendered views.

/// 2D buffer of plain characters.
///
/// All rows have the same length; row `y` is `width` cells long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl CharBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self::filled(width, height, ' ')
    }

    pub fn filled(width: u16, height: u16, ch: char) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![ch; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write a character. Out-of-range writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Characters of row `y`.
    pub fn row(&self, y: u16) -> &[char] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    /// Row `y` as a string.
    pub fn row_string(&self, y: u16) -> String {
        self.row(y).iter().collect()
    }

    /// All rows, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |y| self.row_string(y))
    }

    /// Number of cells holding `ch`.
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|&&c| c == ch).count()
    }

    /// FNV-1a 64-bit hash of the dimensions and contents.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let mut eat = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        };
        for b in self.width.to_le_bytes().into_iter().chain(self.height.to_le_bytes()) {
            eat(b);
        }
        let mut utf8 = [0u8; 4];
        for ch in &self.cells {
            for b in ch.encode_utf8(&mut utf8).bytes() {
                eat(b);
            }
        }
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_have_uniform_length() {
        let mut fb = CharBuffer::new(4, 3);
        fb.set(1, 2, '#');
        for line in fb.lines() {
            assert_eq!(line.chars().count(), 4);
        }
        assert_eq!(fb.row_string(2), " #  ");
    }

    #[test]
    fn out_of_range_set_is_dropped() {
        let mut fb = CharBuffer::new(2, 2);
        fb.set(2, 0, 'x');
        fb.set(0, 2, 'x');
        assert_eq!(fb.count('x'), 0);
        assert_eq!(fb.get(2, 0), None);
        assert!(fb.row(5).is_empty());
    }

    #[test]
    fn zero_height_buffer_has_no_lines() {
        let fb = CharBuffer::new(10, 0);
        assert_eq!(fb.lines().count(), 0);
        assert!(fb.cells().is_empty());
    }

    #[test]
    fn fingerprint_tracks_content_and_shape() {
        let a = CharBuffer::new(4, 2);
        let b = CharBuffer::new(2, 4);
        assert_ne!(a.fingerprint(), b.fingerprint());

        let mut c = a.clone();
        assert_eq!(a.fingerprint(), c.fingerprint());
        c.set(0, 0, '#');
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
