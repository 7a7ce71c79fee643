use crate::InvalidArgument;

/// Start/end coordinate range a pattern line covers along its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    start: f32,
    end: f32,
}

impl Extent {
    pub fn new(start: f32, end: f32) -> Result<Self, InvalidArgument> {
        if start > end {
            return Err(InvalidArgument::InvertedExtent(start, end));
        }
        Ok(Extent { start, end })
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod test {
    use super::Extent;
    use crate::InvalidArgument;

    #[test]
    fn rejects_inverted() {
        assert_eq!(
            Extent::new(10.0, 0.0),
            Err(InvalidArgument::InvertedExtent(10.0, 0.0))
        );
    }

    #[test]
    fn degenerate_is_empty() {
        let e = Extent::new(4.0, 4.0).unwrap();
        assert!(e.is_empty());
        assert_eq!(e.span(), 0.0);
    }
}
