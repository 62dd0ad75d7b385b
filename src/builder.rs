use crate::utils::RowLayout;
use crate::FrechetEngine;

pub struct FrechetEngineBuilder<M> {
    metric: M,
    layout: Option<RowLayout>,
}

impl<M> FrechetEngineBuilder<M> {
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            layout: None,
        }
    }
    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = Some(layout);
        self
    }
    pub fn build(self) -> FrechetEngine<M> {
        match self.layout {
            Some(layout) => FrechetEngine::with_layout(self.metric, layout),
            None => FrechetEngine::new(self.metric),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SquaredEuclidean;

    #[test]
    fn unset_layout_uses_default() {
        let engine = FrechetEngineBuilder::new(SquaredEuclidean).build();
        assert_eq!(engine.layout(), RowLayout::default());
    }

    #[test]
    fn explicit_layout_is_kept() {
        let engine = FrechetEngineBuilder::new(SquaredEuclidean)
            .with_layout(RowLayout::Shorter)
            .build();
        assert_eq!(engine.layout(), RowLayout::Shorter);
        let p = [[0.0, 0.0], [1.0, 0.0]];
        let q = [[0.0, 2.0], [1.0, 2.0], [2.0, 2.0]];
        assert_eq!(engine.distance(&p, &q), Ok(5.0));
    }
}
