//! Pixel access functions
//!
//! Coordinate-based reads and writes of individual samples. Algorithms
//! work on whole channel slices; these helpers serve tests and callers
//! that poke at single pixels.

use super::{Image, ImageMut};
use crate::error::{Error, Result};

impl Image {
    /// Get the sample of channel `ch` at (x, y).
    ///
    /// Returns `None` if the channel or coordinates are out of bounds.
    pub fn get_pixel(&self, ch: u32, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = y as usize * self.width() as usize + x as usize;
        self.channel(ch).map(|plane| plane[idx])
    }
}

impl ImageMut {
    /// Get the sample of channel `ch` at (x, y).
    pub fn get_pixel(&self, ch: u32, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = y as usize * self.width() as usize + x as usize;
        self.channel(ch).map(|plane| plane[idx])
    }

    /// Set the sample of channel `ch` at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the channel or coordinates
    /// are out of bounds.
    pub fn set_pixel(&mut self, ch: u32, x: u32, y: u32, val: u8) -> Result<()> {
        let (w, h) = (self.width(), self.height());
        if x >= w {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: w as usize,
            });
        }
        if y >= h {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: h as usize,
            });
        }
        let channels = self.channel_count();
        let plane = self.channel_mut(ch).ok_or(Error::IndexOutOfBounds {
            index: ch as usize,
            len: channels as usize,
        })?;
        plane[y as usize * w as usize + x as usize] = val;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_pixel_row_major() {
        let image = Image::from_plane(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(image.get_pixel(0, 0, 0), Some(0));
        assert_eq!(image.get_pixel(0, 2, 0), Some(2));
        assert_eq!(image.get_pixel(0, 0, 1), Some(3));
        assert_eq!(image.get_pixel(0, 3, 0), None);
        assert_eq!(image.get_pixel(1, 0, 0), None);
    }

    #[test]
    fn test_set_pixel() {
        let mut image = Image::new(4, 4, 2).unwrap().to_mut();
        image.set_pixel(1, 3, 2, 200).unwrap();
        assert_eq!(image.get_pixel(1, 3, 2), Some(200));
        assert_eq!(image.get_pixel(0, 3, 2), Some(0));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut image = Image::new(4, 4, 1).unwrap().to_mut();
        assert!(image.set_pixel(0, 4, 0, 1).is_err());
        assert!(image.set_pixel(0, 0, 4, 1).is_err());
        assert!(matches!(
            image.set_pixel(1, 0, 0, 1),
            Err(Error::IndexOutOfBounds { index: 1, len: 1 })
        ));
    }
}
