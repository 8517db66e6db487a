/// Identifier of the single counter record this deployment tracks.
pub(crate) const COUNTER_ID: &str = "visits";

#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug)]
pub(crate) struct VisitCount {
    value: i64,
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum NewVisitCountError {
    #[error("tried to construct visit count with negative number")]
    Negative,
}

impl VisitCount {
    pub(crate) fn new(value: i64) -> Result<Self, NewVisitCountError> {
        match value {
            n if n >= 0 => Ok(VisitCount { value: n }),
            _ => Err(NewVisitCountError::Negative),
        }
    }

    pub(crate) fn value(&self) -> i64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero() {
        let count = VisitCount::new(0).unwrap();
        assert_eq!(0, count.value());
    }

    #[test]
    fn accepts_positive() {
        let count = VisitCount::new(7).unwrap();
        assert_eq!(7, count.value());
    }

    #[test]
    fn rejects_negative() {
        assert!(VisitCount::new(-1).is_err());
    }
}
