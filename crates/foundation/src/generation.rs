/// Identifies one mount cycle of an owning instance.
///
/// Asynchronous completions carry the generation they were issued under;
/// results from a superseded generation must be discarded by the owner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Generation(pub u64);

#[derive(Debug, Default)]
pub struct GenerationCounter {
    next: u64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> Generation {
        let gen = Generation(self.next);
        self.next = self.next.wrapping_add(1);
        gen
    }
}

#[cfg(test)]
mod tests {
    use super::GenerationCounter;

    #[test]
    fn generations_are_distinct_and_ordered() {
        let mut counter = GenerationCounter::new();
        let a = counter.advance();
        let b = counter.advance();
        assert_ne!(a, b);
        assert_eq!(b.0, a.0 + 1);
    }
}
