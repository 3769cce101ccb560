use std::collections::VecDeque;

use crate::{
    animation::{ease::Ease, step::PathStep},
    foundation::core::Point,
    geometry::polygon::{collapsed, reveal_until},
    layer::{
        chain::LayerChain,
        serie_layer::{LayerId, LayerState, SerieLayer},
    },
    model::SeriesAnimation,
};

/// Observable transition of the sequencer, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainEvent {
    /// A path morph started on `layer`; `cursor` is the parameter-by-parameter cursor.
    StepStarted { layer: LayerId, cursor: usize },
    /// A path morph on `layer` ran to its end.
    StepFinished { layer: LayerId },
    /// `layer` became visible.
    LayerShown { layer: LayerId },
    /// Decorations of `layer` became visible.
    DecorationRevealed { layer: LayerId },
    /// The chain was forced fully visible starting at `from`.
    Interrupted { from: LayerId },
    /// No layer is animating anymore.
    ChainIdle,
}

/// Drives path-morph steps across a [`LayerChain`].
///
/// Every layer is a small state machine (`Idle -> Animating -> Idle | Interrupted`). Finished
/// steps are queued and processed in a loop, so a chain of steps that complete immediately
/// (layers without vertices) unwinds without recursion. Time a step runs past its end is
/// credited to the step started after it.
#[derive(Debug, Default)]
pub struct Sequencer {
    ease: Ease,
    finished: VecDeque<LayerId>,
    events: Vec<ChainEvent>,
    running: bool,
}

impl Sequencer {
    pub fn new(ease: Ease) -> Self {
        Self {
            ease,
            ..Self::default()
        }
    }

    /// `true` between the start of an animation and its idle/interrupted end.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Take all events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<ChainEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start `mode` over the whole chain. A chain still in flight is interrupted first.
    #[tracing::instrument(skip(self, chain), fields(layers = chain.len()))]
    pub fn start(&mut self, chain: &mut LayerChain, center: Point, mode: SeriesAnimation) {
        if chain.any_animating() {
            self.interrupt(chain);
        }
        self.finished.clear();
        for layer in chain.layers_mut() {
            layer.animation = mode;
            layer.last_animated_vertex_index = 0;
            layer.state = LayerState::Idle;
        }

        let order = chain.order();
        match mode {
            SeriesAnimation::None => {
                for layer in chain.layers_mut() {
                    layer.set_hidden(false);
                    layer.set_decoration_hidden(false);
                }
                return;
            }
            SeriesAnimation::ScaleAll(duration) => {
                for &id in &order {
                    self.show(chain, id);
                    if let Some(layer) = chain.get_mut(id) {
                        layer.set_decoration_hidden(true);
                    }
                }
                for &id in &order {
                    self.start_scale(chain, id, center, duration, 0.0);
                }
            }
            SeriesAnimation::ScaleOneByOne(duration) => {
                hide_all(chain);
                if let Some(head) = chain.head() {
                    self.show(chain, head);
                    self.start_scale(chain, head, center, duration, 0.0);
                }
            }
            SeriesAnimation::ParameterByParameter(duration) => {
                hide_all(chain);
                if let Some(head) = chain.head() {
                    self.show(chain, head);
                    self.start_parameter_step(chain, head, center, duration, 0.0);
                }
            }
        }

        self.running = true;
        self.settle(chain, center);
    }

    /// Advance every in-flight step by `dt` seconds and process the ones that finished.
    pub fn advance(&mut self, chain: &mut LayerChain, center: Point, dt: f64) {
        for id in chain.order() {
            if let Some(layer) = chain.get_mut(id)
                && let LayerState::Animating(step) = &mut layer.state
                && step.tick(dt)
            {
                self.finished.push_back(id);
            }
        }
        self.settle(chain, center);
    }

    /// Deliver an external "step finished" event for `id`. Ignored unless `id` is animating.
    pub fn complete_step(&mut self, chain: &mut LayerChain, center: Point, id: LayerId) {
        let animating = chain.get(id).is_some_and(SerieLayer::is_animating);
        if animating && !self.finished.contains(&id) {
            self.finished.push_back(id);
        }
        self.settle(chain, center);
    }

    /// Interrupt from the head of the chain: every layer ends fully visible.
    pub fn interrupt(&mut self, chain: &mut LayerChain) {
        if let Some(head) = chain.head() {
            self.interrupt_step(chain, head);
        }
    }

    /// Deliver an external "step cut short" event for `from`.
    ///
    /// `from` and every layer reachable through `next` become visible with their decorations,
    /// in-flight steps on them are cancelled, and no further step is started for them.
    /// Safe to repeat; one forward pass over the chain.
    pub fn interrupt_step(&mut self, chain: &mut LayerChain, from: LayerId) {
        let ids = chain.walk_from(from);
        if ids.is_empty() {
            return;
        }
        for &id in &ids {
            let Some(layer) = chain.get_mut(id) else {
                continue;
            };
            layer.set_hidden(false);
            layer.set_decoration_hidden(false);
            if layer.is_animating() {
                layer.state = LayerState::Interrupted;
            }
        }
        self.finished.retain(|id| !ids.contains(id));
        self.events.push(ChainEvent::Interrupted { from });
        tracing::debug!(from = from.0, layers = ids.len(), "chain interrupted");

        if self.running && !chain.any_animating() {
            self.running = false;
            self.events.push(ChainEvent::ChainIdle);
        }
    }

    fn settle(&mut self, chain: &mut LayerChain, center: Point) {
        while let Some(id) = self.finished.pop_front() {
            self.on_step_finished(chain, center, id);
        }
        if self.running && !chain.any_animating() {
            self.running = false;
            self.events.push(ChainEvent::ChainIdle);
            tracing::debug!("chain idle");
        }
    }

    fn on_step_finished(&mut self, chain: &mut LayerChain, center: Point, id: LayerId) {
        let Some(layer) = chain.get_mut(id) else {
            return;
        };
        let LayerState::Animating(step) = &layer.state else {
            return;
        };
        let carry = step.overshoot();
        layer.state = LayerState::Idle;
        let animation = layer.animation;
        let next = layer.next();
        self.events.push(ChainEvent::StepFinished { layer: id });
        tracing::trace!(layer = id.0, "step finished");

        match animation {
            SeriesAnimation::ParameterByParameter(duration) => {
                let vertex_count = layer.vertices().len();
                if layer.last_animated_vertex_index < vertex_count {
                    layer.last_animated_vertex_index += 1;
                }
                if layer.last_animated_vertex_index < vertex_count {
                    self.start_parameter_step(chain, id, center, duration, carry);
                    return;
                }
                self.reveal_decoration(chain, id);
                if let Some(next) = next {
                    if let Some(next_layer) = chain.get_mut(next) {
                        next_layer.last_animated_vertex_index = 0;
                    }
                    self.show(chain, next);
                    self.start_parameter_step(chain, next, center, duration, carry);
                }
            }
            SeriesAnimation::ScaleOneByOne(duration) => {
                self.reveal_decoration(chain, id);
                if let Some(next) = next {
                    self.show(chain, next);
                    self.start_scale(chain, next, center, duration, carry);
                }
            }
            SeriesAnimation::ScaleAll(_) => self.reveal_decoration(chain, id),
            SeriesAnimation::None => {}
        }
    }

    fn start_scale(
        &mut self,
        chain: &mut LayerChain,
        id: LayerId,
        center: Point,
        duration: f64,
        carry: f64,
    ) {
        let Some(layer) = chain.get_mut(id) else {
            return;
        };
        let to = layer.vertices().to_vec();
        let from = collapsed(to.len(), center);
        self.begin_step(layer, from, to, duration, carry);
    }

    fn start_parameter_step(
        &mut self,
        chain: &mut LayerChain,
        id: LayerId,
        center: Point,
        duration: f64,
        carry: f64,
    ) {
        let Some(layer) = chain.get_mut(id) else {
            return;
        };
        let cursor = layer.last_animated_vertex_index;
        let from = reveal_until(layer.vertices(), center, cursor);
        let to = reveal_until(layer.vertices(), center, cursor + 1);
        self.begin_step(layer, from, to, duration, carry);
    }

    fn begin_step(
        &mut self,
        layer: &mut SerieLayer,
        from: Vec<Point>,
        to: Vec<Point>,
        duration: f64,
        carry: f64,
    ) {
        let mut step = PathStep::new(from, to, duration, self.ease);
        let empty = step.point_count() == 0;
        let done = step.tick(carry);
        let id = layer.id();
        self.events.push(ChainEvent::StepStarted {
            layer: id,
            cursor: layer.last_animated_vertex_index,
        });
        layer.state = LayerState::Animating(step);
        // Nothing to morph, or the carried time already covers the step.
        if empty || done {
            self.finished.push_back(id);
        }
    }

    fn show(&mut self, chain: &mut LayerChain, id: LayerId) {
        if let Some(layer) = chain.get_mut(id) {
            layer.set_hidden(false);
            self.events.push(ChainEvent::LayerShown { layer: id });
        }
    }

    fn reveal_decoration(&mut self, chain: &mut LayerChain, id: LayerId) {
        if let Some(layer) = chain.get_mut(id) {
            layer.set_decoration_hidden(false);
            self.events.push(ChainEvent::DecorationRevealed { layer: id });
        }
    }
}

fn hide_all(chain: &mut LayerChain) {
    for layer in chain.layers_mut() {
        layer.set_hidden(true);
        layer.set_decoration_hidden(true);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequencer.rs"]
mod tests;
