use crate::actor::ActorId;
use crate::layout::Population;

/// Receives the position of every visible actor once per tick.
pub trait RenderSink {
    /// Draws one actor at `(x, y)`.
    fn draw(&mut self, x: f32, y: f32);
}

/// Sink that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    #[inline]
    fn draw(&mut self, _x: f32, _y: f32) {}
}

impl<F: FnMut(f32, f32)> RenderSink for F {
    #[inline]
    fn draw(&mut self, x: f32, y: f32) {
        self(x, y);
    }
}

/// Sets visibility from the alive flag and draws every visible actor.
///
/// Returns the number of actors drawn.
pub fn render<P: Population, S: RenderSink + ?Sized>(population: &mut P, sink: &mut S) -> usize {
    let mut drawn = 0;

    for id in ActorId::all(population.len()) {
        let vitals = population.vitals_mut(id);
        let visible = vitals.is_alive();
        vitals.set_visible(visible);
        if visible {
            let pos = population.position(id);
            sink.draw(pos.x, pos.y);
            drawn += 1;
        }
    }

    drawn
}
