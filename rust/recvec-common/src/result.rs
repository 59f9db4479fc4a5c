pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_range {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_range(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_range(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        out_of_range(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn out_of_range(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, Result, Status};

    fn checked_split(len: usize, at: usize) -> Result<usize> {
        verify_range!(at, at <= len);
        Ok(len - at)
    }

    fn checked_width(width: usize) -> Result<usize> {
        verify_arg!(width, width > 0);
        Ok(width)
    }

    #[test]
    fn test_verify_range_macro() {
        assert_eq!(checked_split(10, 4).unwrap(), 6);
        let err = checked_split(3, 4).unwrap_err();
        assert_eq!(err.status(), Status::RangeOrOverflow);
        match err.kind() {
            ErrorKind::OutOfRange { name, message } => {
                assert_eq!(name, "at");
                assert_eq!(message, "at <= len");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_verify_arg_macro() {
        assert_eq!(checked_width(4).unwrap(), 4);
        let err = checked_width(0).unwrap_err();
        assert_eq!(err.status(), Status::InvalidArgument);
    }
}
