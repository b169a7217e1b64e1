use crate::utils::DEFAULT_PARALLEL_THRESHOLD;
use crate::Hirschberg;

#[derive(Debug, Clone, Default)]
pub struct HirschbergBuilder {
    parallel_threshold: Option<usize>,
}

impl HirschbergBuilder {
    pub fn new() -> Self {
        Self {
            parallel_threshold: None,
        }
    }
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }
    /// Never run the two row profiles of a split concurrently.
    pub fn sequential(mut self) -> Self {
        self.parallel_threshold = Some(usize::MAX);
        self
    }
    pub fn build(self) -> Hirschberg {
        match self.parallel_threshold {
            Some(t) => Hirschberg::with_parallel_threshold(t),
            None => Hirschberg::with_parallel_threshold(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}
