//! Foreground color selection for filled nodes

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::sync::RwLock;

pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#ffffff";

const CACHE_CAPACITY: usize = 1024;

// Luma weights scaled by 1000; a fill above this reads as light.
const LIGHT_THRESHOLD: u32 = 186_000;

lazy_static! {
    static ref RE_HEX_COLOR: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap();
    static ref CACHE: RwLock<HashMap<String, &'static str>> = RwLock::new(HashMap::new());
}

/// Black or white, whichever reads better on a `#RRGGBB` fill.
pub fn contrast_color(color: &str) -> Result<&'static str> {
    if let Some(hit) = CACHE.read().ok().and_then(|cache| cache.get(color).copied()) {
        return Ok(hit);
    }

    let contrast = compute(color)?;

    if let Ok(mut cache) = CACHE.write() {
        if cache.len() < CACHE_CAPACITY {
            cache.insert(color.to_string(), contrast);
        }
    }
    Ok(contrast)
}

fn compute(color: &str) -> Result<&'static str> {
    if !RE_HEX_COLOR.is_match(color) {
        return Err(Error::InvalidColorFormat(color.to_string()));
    }
    let rgb = u32::from_str_radix(&color[1..], 16)
        .map_err(|_| Error::InvalidColorFormat(color.to_string()))?;
    let r = (rgb >> 16) & 0xFF;
    let g = (rgb >> 8) & 0xFF;
    let b = rgb & 0xFF;

    let luma = 299 * r + 587 * g + 114 * b;
    Ok(if luma > LIGHT_THRESHOLD { BLACK } else { WHITE })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(contrast_color("#FFFFFF").unwrap(), BLACK);
        assert_eq!(contrast_color("#000000").unwrap(), WHITE);
    }

    #[test]
    fn test_pure_red_is_dark() {
        // 299 * 255 = 76245
        assert_eq!(contrast_color("#FF0000").unwrap(), WHITE);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // 299*186 + 587*186 + 114*186 = 186000 exactly
        assert_eq!(contrast_color("#BABABA").unwrap(), WHITE);
        assert_eq!(contrast_color("#BBBBBB").unwrap(), BLACK);
    }

    #[test]
    fn test_lowercase_digits() {
        assert_eq!(contrast_color("#ccffcc").unwrap(), BLACK);
        assert_eq!(contrast_color("#0000ff").unwrap(), WHITE);
    }

    #[test]
    fn test_invalid_formats() {
        for bad in ["red", "#12345", "123", "#1234567", "FFFFFF#", "#GGGGGG", "#+12345", ""] {
            assert!(
                matches!(contrast_color(bad), Err(Error::InvalidColorFormat(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_repeat_calls_agree() {
        let first = contrast_color("#CCCCFF").unwrap();
        for _ in 0..10 {
            assert_eq!(contrast_color("#CCCCFF").unwrap(), first);
        }
        assert_eq!(compute("#CCCCFF").unwrap(), first);
    }
}
