//! Validation of the requested maximum transform size.
//!
//! A [`MaxSize`] can only be obtained through [`MaxSize::new`] or its
//! [`FromStr`] implementation, so holding one proves the value is a power of
//! two no smaller than [`MaxSize::MIN`].

use core::fmt;
use core::num::IntErrorKind;
use core::str::FromStr;

use thiserror::Error;

/// Reasons a requested maximum size is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    /// The input could not be parsed as an integer.
    #[error("`{0}` is not an integer")]
    NotAnInteger(String),
    /// The value is below the smallest radix-2 stage.
    #[error("{0} is less than {min}", min = MaxSize::MIN)]
    TooSmall(i128),
    /// The value has more than one set bit.
    #[error("{0} is not a power of 2")]
    NotPowerOfTwo(u128),
    /// The value does not fit the platform's address width.
    #[error("{0} does not fit in a {bits}-bit size", bits = usize::BITS)]
    TooLarge(String),
}

/// A validated maximum FFT size: an integer `>= 2` with exactly one set bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxSize(usize);

impl MaxSize {
    /// Smallest accepted size; a single two-point butterfly.
    pub const MIN: usize = 2;
    /// Size used when none is requested.
    pub const DEFAULT: Self = Self(4096);

    /// Validate an integer size.
    pub fn new<N>(value: N) -> Result<Self, SizeError>
    where
        N: TryInto<i128> + fmt::Display + Copy,
    {
        let wide: i128 = value
            .try_into()
            .map_err(|_| SizeError::TooLarge(value.to_string()))?;
        Self::from_wide(wide)
    }

    fn from_wide(value: i128) -> Result<Self, SizeError> {
        if value < Self::MIN as i128 {
            return Err(SizeError::TooSmall(value));
        }
        let unsigned = value as u128;
        if unsigned.count_ones() != 1 {
            return Err(SizeError::NotPowerOfTwo(unsigned));
        }
        usize::try_from(unsigned)
            .map(Self)
            .map_err(|_| SizeError::TooLarge(value.to_string()))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of radix-2 stages, i.e. `log2(max)`.
    pub fn stage_count(self) -> usize {
        self.0.trailing_zeros() as usize
    }
}

impl Default for MaxSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MaxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaxSize {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i128>() {
            Ok(value) => Self::from_wide(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(SizeError::TooLarge(trimmed.to_string()))
                }
                _ => Err(SizeError::NotAnInteger(s.to_string())),
            },
        }
    }
}

impl TryFrom<usize> for MaxSize {
    type Error = SizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaxSize> for usize {
    fn from(size: MaxSize) -> Self {
        size.0
    }
}
