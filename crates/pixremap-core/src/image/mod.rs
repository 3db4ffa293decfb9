//! Image - multi-channel container of 8-bit planes
//!
//! An [`Image`] holds one or more channels, each a row-major plane of
//! `width * height` 8-bit samples. Channels are stored back to back and
//! are never interleaved, so every channel can be handed to an algorithm
//! as a plain `&[u8]`.
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership). To modify
//! samples, convert to [`ImageMut`] via [`Image::try_into_mut`] or
//! [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
mod histogram;

pub use histogram::{Histogram, NUM_LEVELS};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Largest sample value of a plane.
pub const MAX_LEVEL: u8 = 255;

/// Internal image data
#[derive(Debug)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Number of channels (planes)
    channels: u32,
    /// Planar sample data, `channels * width * height` bytes
    data: Vec<u8>,
}

impl ImageData {
    #[inline]
    fn plane_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn plane(&self, ch: u32) -> Option<&[u8]> {
        if ch >= self.channels {
            return None;
        }
        let len = self.plane_len();
        let start = ch as usize * len;
        Some(&self.data[start..start + len])
    }

    fn plane_mut(&mut self, ch: u32) -> Option<&mut [u8]> {
        if ch >= self.channels {
            return None;
        }
        let len = self.plane_len();
        let start = ch as usize * len;
        Some(&mut self.data[start..start + len])
    }
}

/// Check geometry and return the per-plane sample count.
fn plane_len_for(width: u32, height: u32, channels: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if channels == 0 {
        return Err(Error::InvalidChannelCount(channels));
    }
    // Histogram counts are u32, so a plane may not hold more samples.
    let len = u64::from(width) * u64::from(height);
    if len > u64::from(u32::MAX) {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(len as usize)
}

/// Image - main image container
///
/// # Examples
///
/// ```
/// use pixremap_core::Image;
///
/// let image = Image::new(640, 480, 3).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.channel_count(), 3);
/// assert!(image.channel(3).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with every sample set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 (or the
    /// plane would exceed `u32::MAX` samples) and
    /// [`Error::InvalidChannelCount`] if `channels` is 0.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        let len = plane_len_for(width, height, channels)?;
        let inner = ImageData {
            width,
            height,
            channels,
            data: vec![0u8; len * channels as usize],
        };
        Ok(Image {
            inner: Arc::new(inner),
        })
    }

    /// Create a single-channel image from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `samples.len()` is not
    /// `width * height`.
    pub fn from_plane(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        let len = plane_len_for(width, height, 1)?;
        if samples.len() != len {
            return Err(Error::DataLengthMismatch {
                expected: len,
                actual: samples.len(),
            });
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                channels: 1,
                data: samples,
            }),
        })
    }

    /// Create an image from one row-major plane per channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `planes` is empty and
    /// [`Error::DataLengthMismatch`] if any plane has the wrong length.
    pub fn from_planes(width: u32, height: u32, planes: &[&[u8]]) -> Result<Self> {
        let channels = u32::try_from(planes.len())
            .map_err(|_| Error::InvalidChannelCount(u32::MAX))?;
        let len = plane_len_for(width, height, channels)?;
        let mut data = Vec::with_capacity(len * planes.len());
        for plane in planes {
            if plane.len() != len {
                return Err(Error::DataLengthMismatch {
                    expected: len,
                    actual: plane.len(),
                });
            }
            data.extend_from_slice(plane);
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                channels,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of channels.
    #[inline]
    pub fn channel_count(&self) -> u32 {
        self.inner.channels
    }

    /// Number of samples in one channel (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.plane_len()
    }

    /// Get the row-major samples of channel `ch`.
    ///
    /// Returns `None` once `ch` reaches the channel count, which is how
    /// callers enumerate channels.
    #[inline]
    pub fn channel(&self, ch: u32) -> Option<&[u8]> {
        self.inner.plane(ch)
    }

    /// Iterate over all channels in order.
    pub fn channels(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.inner.channels).filter_map(move |ch| self.inner.plane(ch))
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a writable image with the same geometry as this one.
    ///
    /// Width, height and channel count are copied; samples are zeroed.
    pub fn create_template(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: vec![0u8; self.inner.data.len()],
            },
        }
    }

    /// Check if two images have the same width, height, and channel count.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.channels == other.inner.channels
    }

    /// Try to get mutable access to the samples.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable image
///
/// Allows modification of samples. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of channels.
    #[inline]
    pub fn channel_count(&self) -> u32 {
        self.inner.channels
    }

    /// Number of samples in one channel.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.plane_len()
    }

    /// Get the row-major samples of channel `ch`.
    #[inline]
    pub fn channel(&self, ch: u32) -> Option<&[u8]> {
        self.inner.plane(ch)
    }

    /// Get mutable row-major samples of channel `ch`.
    #[inline]
    pub fn channel_mut(&mut self, ch: u32) -> Option<&mut [u8]> {
        self.inner.plane_mut(ch)
    }

    /// Set every sample of every channel to `val`.
    pub fn fill(&mut self, val: u8) {
        self.inner.data.fill(val);
    }
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}
