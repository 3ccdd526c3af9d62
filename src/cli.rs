// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Argument parsing helpers shared by the `still` and `animate`
//! binaries.  The validators have the shape clap expects, so bad
//! arguments are rejected before any rendering starts.

use crate::planes::MAX_PIXELS;
use num::Complex;
use std::str::FromStr;

/// Given a string and a separator, returns the two values
/// separated by the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
pub fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex { re, im })
}

/// An image size, `WIDTHxHEIGHT`.  Each side is a non-zero u16 and
/// the whole image holds no more than `MAX_PIXELS`.
pub fn parse_size(s: &str) -> Option<(usize, usize)> {
    match parse_pair::<u16>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => {
            let (w, h) = (usize::from(w), usize::from(h));
            match w.checked_mul(h) {
                Some(pixels) if pixels <= MAX_PIXELS => Some((w, h)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Validator for `WIDTHxHEIGHT`.
pub fn validate_size(s: String) -> Result<(), String> {
    match parse_size(&s) {
        Some(_) => Ok(()),
        None => Err(format!("Could not parse image size '{}'", s)),
    }
}

/// Validator for `RE,IM`.
pub fn validate_complex(s: String) -> Result<(), String> {
    match parse_complex(&s) {
        Some(c) if c.re.is_finite() && c.im.is_finite() => Ok(()),
        _ => Err(format!("Could not parse complex number '{}'", s)),
    }
}

/// Validator for anything with a `FromStr` whose error is printable.
pub fn validate_parse<T>(s: String) -> Result<(), String>
where
    T: FromStr,
    T::Err: ToString,
{
    T::from_str(&s).map(|_| ()).map_err(|e| e.to_string())
}

/// Validator for a number within an inclusive range.
pub fn validate_range<T: FromStr + PartialOrd + ToString>(s: &str, low: T, high: T) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(format!(
                    "'{}' must be between {} and {}",
                    s,
                    low.to_string(),
                    high.to_string()
                ))
            }
        }
        Err(_) => Err(format!("Could not parse '{}' as a number", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::Fractal;

    #[test]
    fn pairs_split_on_the_separator() {
        assert_eq!(parse_pair::<i32>("", ','), None);
        assert_eq!(parse_pair::<i32>("10,", ','), None);
        assert_eq!(parse_pair::<i32>(",10", ','), None);
        assert_eq!(parse_pair::<i32>("10,20", ','), Some((10, 20)));
        assert_eq!(parse_pair::<i32>("10,20xy", ','), None);
        assert_eq!(parse_pair::<f64>("0.5x", 'x'), None);
        assert_eq!(parse_pair::<f64>("0.5x1.5", 'x'), Some((0.5, 1.5)));
    }

    #[test]
    fn complex_numbers_parse() {
        assert_eq!(parse_complex("-1.75,0.0"), Some(Complex::new(-1.75, 0.0)));
        assert_eq!(parse_complex(",-0.0625"), None);
    }

    #[test]
    fn sizes_must_be_positive() {
        assert_eq!(parse_size("1280x720"), Some((1280, 720)));
        assert_eq!(parse_size("0x720"), None);
        assert!(validate_size("1600x1200".to_string()).is_ok());
        assert!(validate_size("1600by1200".to_string()).is_err());
    }

    #[test]
    fn sizes_are_bounded() {
        assert!(validate_size("4294967297x1".to_string()).is_err());
        assert!(validate_size("65536x1".to_string()).is_err());
        assert!(validate_size("65535x65535".to_string()).is_err());
        assert_eq!(parse_size("65535x4096"), Some((65535, 4096)));
    }

    #[test]
    fn complex_validator_refuses_infinities() {
        assert!(validate_complex("-2.0,-1.8".to_string()).is_ok());
        assert!(validate_complex("inf,0".to_string()).is_err());
        assert!(validate_complex("nonsense".to_string()).is_err());
    }

    #[test]
    fn range_validator() {
        assert!(validate_range("512", 1usize, 100_000).is_ok());
        assert!(validate_range("0", 1usize, 100_000).is_err());
        assert!(validate_range("lots", 1usize, 100_000).is_err());
        assert!(validate_range("0.98", 0.0f64, 1.0).is_ok());
    }

    #[test]
    fn parse_validator_uses_fromstr() {
        assert!(validate_parse::<Fractal>("mandelbrot".to_string()).is_ok());
        assert_eq!(
            validate_parse::<Fractal>("julia".to_string()),
            Err("Unknown fractal 'julia'".to_string())
        );
    }
}
