use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

const BINARY_NAME: &str = "BINARY";
const BASE64_NAME: &str = "BASE64";

/// Wire representation of key bytes in the source stream.
///
/// The set is closed: parsing any other name fails with
/// [`Error::UnsupportedFormat`] instead of falling back to binary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Bytes are the key envelope verbatim
    #[default]
    Binary,
    /// Bytes are a base64 text rendering of the key envelope
    Base64,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Binary => write!(f, "{}", BINARY_NAME),
            Format::Base64 => write!(f, "{}", BASE64_NAME),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            BINARY_NAME => Ok(Format::Binary),
            BASE64_NAME => Ok(Format::Base64),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use crate::error::Error;
    use crate::format::Format;

    #[rstest(
        input,
        expected,
        case("BINARY", Format::Binary),
        case("BASE64", Format::Base64)
    )]
    fn test_format_from_str(input: &str, expected: Format) {
        let got = Format::from_str(input).unwrap();
        assert_eq!(expected, got);
        assert_eq!(input, got.to_string());
    }

    #[rstest(input, case("HEX"), case("base64"), case(""), case("BINARY "))]
    fn test_format_from_str_with_error(input: &str) {
        match Format::from_str(input) {
            Err(Error::UnsupportedFormat(name)) => assert_eq!(input, name),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_format_default_is_binary() {
        assert_eq!(Format::Binary, Format::default());
    }
}
