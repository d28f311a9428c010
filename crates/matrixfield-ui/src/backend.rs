//! The one trait a host toolkit implements to draw the field.

use crate::scene::Scene;

pub trait RenderBackend {
    fn frame(&mut self, scene: &Scene);
}

/// Backend that keeps every frame it is handed; used by tests and the
/// headless demo.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub frames: Vec<Scene>,
}

impl RenderBackend for RecordingBackend {
    fn frame(&mut self, scene: &Scene) {
        self.frames.push(scene.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::scene::SceneNode;
    use matrixfield_core::Rect;

    #[test]
    fn recording_backend_keeps_frames_in_order() {
        let mut backend = RecordingBackend::default();
        let mut scene = Scene::new();
        scene.push(SceneNode::Rect {
            rect: Rect {
                x: 0.0,
                y: 0.0,
                w: 4.0,
                h: 4.0,
            },
            color: Color::WHITE,
            radius: 1.0,
        });
        backend.frame(&scene);
        backend.frame(&Scene::new());
        assert_eq!(backend.frames.len(), 2);
        assert_eq!(backend.frames[0], scene);
        assert!(backend.frames[1].nodes.is_empty());
    }
}
