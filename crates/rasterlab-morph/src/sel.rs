//! Structuring elements
//!
//! A structuring element defines the neighborhood shape a morphological
//! rank filter samples: a square, odd-sized mask of hit positions
//! centered on the target pixel. Positions outside the mask still
//! occupy a candidate slot; the filter fills them with a neutral value
//! that can never win the selection.

use crate::{MorphError, MorphResult};

/// Square, odd-sized neighborhood mask for morphological operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    size: u32,
    hits: Vec<bool>,
}

impl StructuringElement {
    /// The 3x3 cross (plus shape): center and 4-neighbors.
    pub fn cross() -> Self {
        StructuringElement {
            size: 3,
            hits: vec![
                false, true, false, //
                true, true, true, //
                false, true, false,
            ],
        }
    }

    /// The full 3x3 square.
    pub fn full() -> Self {
        StructuringElement {
            size: 3,
            hits: vec![true; 9],
        }
    }

    /// Create a structuring element from a row-major hit mask.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidElement`] if `size` is even or zero,
    /// the mask length does not match `size * size`, or the mask has no
    /// hits.
    pub fn from_mask(size: u32, hits: &[bool]) -> MorphResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(MorphError::InvalidElement(format!(
                "size must be odd and non-zero, got {size}"
            )));
        }
        if hits.len() != (size * size) as usize {
            return Err(MorphError::InvalidElement(format!(
                "expected {} mask entries for size {size}, got {}",
                size * size,
                hits.len()
            )));
        }
        if !hits.iter().any(|&h| h) {
            return Err(MorphError::InvalidElement("mask has no hits".into()));
        }
        Ok(StructuringElement {
            size,
            hits: hits.to_vec(),
        })
    }

    /// Side length of the square mask.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Radius: `size / 2`.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Whether the mask position (x, y) is a hit.
    #[inline]
    pub fn is_hit(&self, x: u32, y: u32) -> bool {
        self.hits[(y * self.size + x) as usize]
    }

    /// Number of candidate slots (`size * size`).
    #[inline]
    pub fn window(&self) -> usize {
        self.hits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_hits_center_and_neighbors() {
        let sel = StructuringElement::cross();
        assert!(sel.is_hit(1, 1));
        assert!(sel.is_hit(1, 0));
        assert!(sel.is_hit(0, 1));
        assert!(!sel.is_hit(0, 0));
        assert!(!sel.is_hit(2, 2));
        assert_eq!(sel.radius(), 1);
    }

    #[test]
    fn from_mask_validation() {
        assert!(StructuringElement::from_mask(2, &[true; 4]).is_err());
        assert!(StructuringElement::from_mask(3, &[true; 8]).is_err());
        assert!(StructuringElement::from_mask(3, &[false; 9]).is_err());
        assert_eq!(
            StructuringElement::from_mask(3, &[true; 9]).unwrap(),
            StructuringElement::full()
        );
    }
}
