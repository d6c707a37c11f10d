//! Section distance.

use core::fmt;
use core::num::NonZeroU32;

use crate::{CoreError, CoreResult};

/// Distance between two adjacent stations. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Distance(NonZeroU32);

impl Distance {
    pub fn new(value: u32) -> CoreResult<Self> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(CoreError::InvalidArg {
                what: "distance must be at least 1",
            })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// `self - other`, or `None` if the result would not be positive.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        self.get()
            .checked_sub(other.get())
            .and_then(NonZeroU32::new)
            .map(Self)
    }

    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.get()).map(Self)
    }
}

impl TryFrom<u32> for Distance {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(d: Distance) -> Self {
        d.get()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: u32) -> Distance {
        Distance::new(v).unwrap()
    }

    #[test]
    fn zero_is_rejected() {
        let err = Distance::new(0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArg { .. }));
        assert!(Distance::try_from(0).is_err());
    }

    #[test]
    fn checked_sub_requires_positive_result() {
        assert_eq!(d(10).checked_sub(d(4)), Some(d(6)));
        assert_eq!(d(10).checked_sub(d(10)), None);
        assert_eq!(d(4).checked_sub(d(10)), None);
    }

    #[test]
    fn checked_add_overflow() {
        assert_eq!(d(6).checked_add(d(4)), Some(d(10)));
        assert_eq!(d(u32::MAX).checked_add(d(1)), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sub_then_add_restores(a in 1_u32..100_000, b in 1_u32..100_000) {
            let (a, b) = (Distance::new(a).unwrap(), Distance::new(b).unwrap());
            match a.checked_sub(b) {
                Some(rest) => prop_assert_eq!(rest.checked_add(b), Some(a)),
                None => prop_assert!(b >= a),
            }
        }
    }
}
