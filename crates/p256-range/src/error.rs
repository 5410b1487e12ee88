use core::fmt::{Display, Formatter};

/// The field whose range an input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Base field, valid range `0..=p-1`.
    Base,
    /// Scalar field, valid range `1..=n-1`.
    Scalar,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Field::Base => f.write_str("base field (0..=p-1)"),
            Field::Scalar => f.write_str("scalar field (1..=n-1)"),
        }
    }
}

/// Rejection of an externally supplied integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    InvalidLength { expected: usize, actual: usize },
    OutOfRange(Field),
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RangeError::InvalidLength { expected, actual } => {
                write!(f, "Expected {expected} bytes, got {actual}")
            }
            RangeError::OutOfRange(field) => write!(f, "Value is outside the {field}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

pub type Result<T, E = RangeError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::*;

    /// Fixed capacity sink, formats without an allocator.
    struct Buffer {
        bytes: [u8; 64],
        len: usize,
    }

    impl Write for Buffer {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let end = self.len + s.len();
            self.bytes
                .get_mut(self.len..end)
                .ok_or(core::fmt::Error)?
                .copy_from_slice(s.as_bytes());
            self.len = end;
            Ok(())
        }
    }

    fn render(error: RangeError) -> Buffer {
        let mut buffer = Buffer {
            bytes: [0; 64],
            len: 0,
        };
        write!(buffer, "{error}").unwrap();
        buffer
    }

    #[test]
    fn display_without_allocation() {
        let out_of_range = render(RangeError::OutOfRange(Field::Base));
        assert_eq!(
            &out_of_range.bytes[..out_of_range.len],
            b"Value is outside the base field (0..=p-1)"
        );

        let length = render(RangeError::InvalidLength {
            expected: 32,
            actual: 3,
        });
        assert_eq!(&length.bytes[..length.len], b"Expected 32 bytes, got 3");
    }

    #[cfg(feature = "std")]
    #[test]
    fn is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(RangeError::OutOfRange(Field::Scalar));
        assert_eq!(error.to_string(), "Value is outside the scalar field (1..=n-1)");
    }
}
