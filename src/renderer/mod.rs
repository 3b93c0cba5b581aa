//! Rendering module
//!
//! [`scene::build_scene`] turns a [`GameState`] into a triangle list in canvas
//! pixels. A [`Renderer`] presents it; the WebGPU implementation lives in
//! [`pipeline`].

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;

use glam::Vec2;

use crate::config::GameConfig;
use crate::sim::state::GameState;

/// A presentation target for built scenes
pub trait Renderer {
    type Error;

    /// Present one frame; `vertices` are in canvas pixels (y down)
    fn present(&mut self, vertices: &[Vertex], canvas: Vec2) -> Result<(), Self::Error>;
}

/// Build the scene for `state` and hand it to `target`
pub fn render<R: Renderer>(
    target: &mut R,
    state: &GameState,
    config: &GameConfig,
) -> Result<(), R::Error> {
    let vertices = build_scene(state, config);
    target.present(
        &vertices,
        Vec2::new(config.canvas_width, config.canvas_height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameCore;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(usize, Vec2)>,
    }

    impl Renderer for Recorder {
        type Error = std::convert::Infallible;

        fn present(&mut self, vertices: &[Vertex], canvas: Vec2) -> Result<(), Self::Error> {
            self.frames.push((vertices.len(), canvas));
            Ok(())
        }
    }

    #[test]
    fn test_render_passes_canvas_size() {
        let mut core = GameCore::with_seed(GameConfig::default(), 42);
        let mut recorder = Recorder::default();
        core.render(&mut recorder).unwrap();
        core.start();
        core.render(&mut recorder).unwrap();

        assert_eq!(recorder.frames.len(), 2);
        assert_eq!(recorder.frames[0].1, Vec2::new(800.0, 600.0));
        // Running frame draws the wave on top of the stars
        assert!(recorder.frames[1].0 > recorder.frames[0].0);
    }
}
