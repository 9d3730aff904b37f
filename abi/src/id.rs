/// Monotonic ID source. Every call to `next_id` returns a value never handed out before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    last: i64,
}

impl IdSequence {
    /// the first ID issued is `offset + 1`
    pub fn starting_after(offset: i64) -> Self {
        Self { last: offset }
    }

    pub fn next_id(&mut self) -> i64 {
        self.last += 1;
        self.last
    }

    pub fn last(&self) -> i64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_should_start_above_offset_and_increase() {
        let mut ids = IdSequence::starting_after(5000);
        assert_eq!(ids.next_id(), 5001);
        assert_eq!(ids.next_id(), 5002);
        assert_eq!(ids.last(), 5002);
    }
}
