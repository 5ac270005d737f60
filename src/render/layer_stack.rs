use serde::{Deserialize, Serialize};

/// Paint layers of a spider chart, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartLayerKind {
    Background,
    WebRings,
    WebSpokes,
    Series,
    Labels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayerStack {
    pub layers: Vec<ChartLayerKind>,
}

impl ChartLayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                ChartLayerKind::Background,
                ChartLayerKind::WebRings,
                ChartLayerKind::WebSpokes,
                ChartLayerKind::Series,
                ChartLayerKind::Labels,
            ],
        }
    }
}

impl Default for ChartLayerStack {
    fn default() -> Self {
        Self::canonical()
    }
}
