/// Which narrative an experience page shows. Quick unless the reader picks Full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingMode {
    #[default]
    Quick,
    Full,
}

impl ReadingMode {
    pub fn select_quick(&mut self) {
        *self = ReadingMode::Quick;
    }

    pub fn select_full(&mut self) {
        *self = ReadingMode::Full;
    }

    pub fn is_full(self) -> bool {
        self == ReadingMode::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_quick() {
        assert_eq!(ReadingMode::default(), ReadingMode::Quick);
    }

    #[test]
    fn test_toggle_sequence() {
        let mut mode = ReadingMode::default();
        mode.select_full();
        assert_eq!(mode, ReadingMode::Full);
        mode.select_quick();
        assert_eq!(mode, ReadingMode::Quick);
    }

    #[test]
    fn test_reselecting_is_idempotent() {
        let mut mode = ReadingMode::Full;
        mode.select_full();
        assert!(mode.is_full());
    }
}
