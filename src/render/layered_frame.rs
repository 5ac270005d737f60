use crate::core::Viewport;

use super::{ChartLayerKind, ChartLayerStack, DrawPrimitive, RenderFrame};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: ChartLayerKind,
    pub primitives: Vec<DrawPrimitive>,
}

/// Frame under construction, bucketed per paint layer.
///
/// Builders may push into layers in any order; `flatten` always emits them in
/// stack order, and insertion order within each layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: ChartLayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                primitives: Vec::new(),
            })
            .collect();
        Self { viewport, layers }
    }

    pub fn push(&mut self, kind: ChartLayerKind, primitive: impl Into<DrawPrimitive>) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.primitives.push(primitive.into());
        }
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.primitives.extend(layer.primitives.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: ChartLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
