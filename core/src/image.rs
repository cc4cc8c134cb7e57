//! IIIF image URL construction.
//!
//! # Design
//! Pure string assembly, no network. The grammar is the IIIF-style path the
//! museum's image server consumes:
//! `{base}/{id}/{region}/{size}/{rotation}/default.jpg`, with an optional
//! `!` mirror segment immediately before the rotation. Every parameter is
//! range-checked before any segment is emitted, so an `Ok` return is always
//! a well-formed URL.

use std::fmt::Write as _;

use crate::error::ApiError;

/// Width the upstream museum recommends for card-sized renditions.
pub const DEFAULT_IMAGE_WIDTH: u32 = 843;

/// Transformation parameters for an image request.
///
/// `default()` asks for the full image region, no rotation, unmirrored,
/// and no size — callers must set at least one of `width`/`height` before
/// building a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageParams {
    /// Requested width in pixels, if constrained.
    pub width: Option<u32>,
    /// Requested height in pixels, if constrained.
    pub height: Option<u32>,
    /// Left edge of the crop region, percent of image width.
    pub region_x: u32,
    /// Top edge of the crop region, percent of image height.
    pub region_y: u32,
    /// Crop region width, percent of image width.
    pub region_width: u32,
    /// Crop region height, percent of image height.
    pub region_height: u32,
    /// Clockwise rotation in degrees, 0 to 360.
    pub rotation: u16,
    /// Mirror the image before rotating.
    pub mirrored: bool,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            region_x: 0,
            region_y: 0,
            region_width: 100,
            region_height: 100,
            rotation: 0,
            mirrored: false,
        }
    }
}

impl ImageParams {
    /// Width-constrained rendition of the full image.
    pub fn with_width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    fn is_full_region(&self) -> bool {
        self.region_x == 0
            && self.region_y == 0
            && self.region_width == 100
            && self.region_height == 100
    }
}

/// Build the image URL for `image_id` under `base_url` with the given
/// transformation parameters.
///
/// # Errors
/// `RangeViolation` if a given width or height is zero, both are absent,
/// a region value exceeds 100, or rotation exceeds 360.
pub fn build_image_url(
    base_url: &str,
    image_id: &str,
    params: &ImageParams,
) -> Result<String, ApiError> {
    if params.width == Some(0) || params.height == Some(0) {
        return Err(ApiError::RangeViolation(
            "size must be greater than 0".to_string(),
        ));
    }
    let region_values = [
        params.region_x,
        params.region_y,
        params.region_width,
        params.region_height,
    ];
    if region_values.iter().any(|&v| v > 100) {
        return Err(ApiError::RangeViolation(
            "region must be between 0 and 100, inclusive".to_string(),
        ));
    }
    if params.rotation > 360 {
        return Err(ApiError::RangeViolation(
            "rotation must be between 0 and 360, inclusive".to_string(),
        ));
    }

    let region = if params.is_full_region() {
        "full".to_string()
    } else {
        format!(
            "pct:{},{},{},{}",
            params.region_x, params.region_y, params.region_width, params.region_height
        )
    };

    let size = match (params.width, params.height) {
        (Some(w), Some(h)) => format!("{w},{h}"),
        (Some(w), None) => format!("{w},"),
        (None, Some(h)) => format!(",{h}"),
        (None, None) => {
            return Err(ApiError::RangeViolation(
                "at least one of width or height must be given".to_string(),
            ));
        }
    };

    let mut url = format!("{}/{image_id}/{region}/{size}", base_url.trim_end_matches('/'));
    if params.mirrored {
        url.push_str("/!");
    }
    // write! into a String cannot fail.
    let _ = write!(url, "/{}/default.jpg", params.rotation);
    Ok(url)
}
