/// Errors raised by htmlnode.
///
/// Most operations never fail: mutating a node that cannot take the change
/// is a no-op that returns `false` or `None`. Only element names are checked
/// strictly, and writing serialized output to an [`std::io::Write`] can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The element name does not match `[A-Za-z][A-Za-z0-9-]*`.
    #[error("invalid element name: {0:?}")]
    InvalidName(String),
    /// The writer used for serialization failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Check an element name and return its normalized (lowercase) form.
pub(crate) fn validate_name(name: &str) -> Result<String, Error> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        None => false,
    };
    if !valid {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(validate_name("div").unwrap(), "div");
        assert_eq!(validate_name(" DIV ").unwrap(), "div");
        assert_eq!(validate_name("v-row").unwrap(), "v-row");
        assert_eq!(validate_name("h1").unwrap(), "h1");
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "   ", "1div", "-a", "a b", "a_b", "#text", "!DOCTYPE"] {
            let err = validate_name(name).unwrap_err();
            if let Error::InvalidName(n) = err {
                assert_eq!(n, name);
            } else {
                unreachable!();
            }
        }
    }
}
