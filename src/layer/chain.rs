use crate::{
    layer::serie_layer::{LayerId, SerieLayer},
    model::Serie,
};

/// Owns every serie layer and links them in draw/animation order.
///
/// Links are [`LayerId`] handles into this arena, so the chain never owns itself.
#[derive(Clone, Debug, Default)]
pub struct LayerChain {
    layers: Vec<SerieLayer>,
}

impl LayerChain {
    /// One layer per serie, linked in insertion order.
    pub fn from_series(series: Vec<Serie>) -> Self {
        let mut layers: Vec<SerieLayer> = series
            .into_iter()
            .enumerate()
            .map(|(i, s)| SerieLayer::new(LayerId(i as u32), Some(s)))
            .collect();
        let n = layers.len();
        for (i, layer) in layers.iter_mut().enumerate() {
            layer.next = (i + 1 < n).then(|| LayerId((i + 1) as u32));
        }
        Self { layers }
    }

    pub fn head(&self) -> Option<LayerId> {
        self.layers.first().map(SerieLayer::id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, id: LayerId) -> Option<&SerieLayer> {
        self.layers.get(id.index())
    }

    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut SerieLayer> {
        self.layers.get_mut(id.index())
    }

    /// `id` followed by every layer reachable through `next` links.
    ///
    /// The walk is capped at the chain length, so a corrupted link cannot loop forever.
    pub fn walk_from(&self, id: LayerId) -> Vec<LayerId> {
        let mut out = Vec::new();
        let mut cur = self.get(id).map(SerieLayer::id);
        while let Some(id) = cur {
            if out.len() >= self.layers.len() {
                break;
            }
            out.push(id);
            cur = self.get(id).and_then(SerieLayer::next);
        }
        out
    }

    /// Every layer id in chain order.
    pub fn order(&self) -> Vec<LayerId> {
        self.head().map(|h| self.walk_from(h)).unwrap_or_default()
    }

    /// Layers in chain order.
    pub fn iter(&self) -> impl Iterator<Item = &SerieLayer> {
        self.order().into_iter().filter_map(|id| self.get(id))
    }

    pub(crate) fn layers_mut(&mut self) -> impl Iterator<Item = &mut SerieLayer> {
        self.layers.iter_mut()
    }

    pub fn any_animating(&self) -> bool {
        self.layers.iter().any(SerieLayer::is_animating)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/chain.rs"]
mod tests;
