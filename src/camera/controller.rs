use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::camera::core::Camera;
use crate::events::{EventAggregator, Listener};
use crate::input::messages::{
    MouseLook, MoveBackward, MoveDown, MoveForward, MoveLeft, MoveRight,
    MoveUp, ResetCamera,
};
use crate::options::CameraOptions;

/// Drives a [`Camera`] from input messages.
///
/// Movement messages translate the camera by `move_speed * elapsed`; mouse
/// look turns it by `look_speed` radians per pixel (drag right turns right,
/// drag down looks down).
///
/// The aggregator holds listeners weakly, so the controller stays subscribed
/// only as long as its owner keeps the `Rc` alive.
pub struct CameraController {
    camera: RefCell<Camera>,
    move_speed: f32,
    look_speed: f32,
}

impl CameraController {
    /// Wrap `camera`, taking speeds from `options`.
    #[must_use]
    pub fn new(camera: Camera, options: &CameraOptions) -> Self {
        Self {
            camera: RefCell::new(camera),
            move_speed: options.move_speed,
            look_speed: options.look_speed,
        }
    }

    /// Listen for every camera message on `aggregator`.
    pub fn subscribe(self: &Rc<Self>, aggregator: &EventAggregator) {
        aggregator.add_listener::<MoveForward, _>(self);
        aggregator.add_listener::<MoveBackward, _>(self);
        aggregator.add_listener::<MoveLeft, _>(self);
        aggregator.add_listener::<MoveRight, _>(self);
        aggregator.add_listener::<MoveUp, _>(self);
        aggregator.add_listener::<MoveDown, _>(self);
        aggregator.add_listener::<MouseLook, _>(self);
        aggregator.add_listener::<ResetCamera, _>(self);
    }

    /// Borrow the camera, e.g. to read transforms for rendering.
    #[must_use]
    pub fn camera(&self) -> Ref<'_, Camera> {
        self.camera.borrow()
    }

    /// Borrow the camera mutably, e.g. to update the projection on resize.
    #[must_use]
    pub fn camera_mut(&self) -> RefMut<'_, Camera> {
        self.camera.borrow_mut()
    }

    /// World units travelled per second of held movement.
    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Radians turned per pixel of mouse motion.
    #[must_use]
    pub fn look_speed(&self) -> f32 {
        self.look_speed
    }

    fn distance(&self, elapsed: f32) -> f64 {
        f64::from(self.move_speed * elapsed)
    }
}

impl Listener<MoveForward> for CameraController {
    fn handle(&self, message: &MoveForward) {
        let distance = self.distance(message.elapsed);
        self.camera.borrow_mut().move_forward_horizontally(distance);
    }
}

impl Listener<MoveBackward> for CameraController {
    fn handle(&self, message: &MoveBackward) {
        let distance = self.distance(message.elapsed);
        self.camera.borrow_mut().move_backward_horizontally(distance);
    }
}

impl Listener<MoveLeft> for CameraController {
    fn handle(&self, message: &MoveLeft) {
        let distance = self.distance(message.elapsed);
        self.camera.borrow_mut().move_left(distance);
    }
}

impl Listener<MoveRight> for CameraController {
    fn handle(&self, message: &MoveRight) {
        let distance = self.distance(message.elapsed);
        self.camera.borrow_mut().move_right(distance);
    }
}

impl Listener<MoveUp> for CameraController {
    fn handle(&self, message: &MoveUp) {
        let distance = self.distance(message.elapsed);
        self.camera.borrow_mut().move_up(distance);
    }
}

impl Listener<MoveDown> for CameraController {
    fn handle(&self, message: &MoveDown) {
        let distance = self.distance(message.elapsed);
        self.camera.borrow_mut().move_down(distance);
    }
}

impl Listener<MouseLook> for CameraController {
    fn handle(&self, message: &MouseLook) {
        let mut camera = self.camera.borrow_mut();
        camera.change_yaw(-message.delta.x * self.look_speed);
        camera.change_pitch(-message.delta.y * self.look_speed);
    }
}

impl Listener<ResetCamera> for CameraController {
    fn handle(&self, _message: &ResetCamera) {
        self.camera.borrow_mut().reset();
    }
}

impl std::fmt::Debug for CameraController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraController")
            .field("camera", &self.camera)
            .field("move_speed", &self.move_speed)
            .field("look_speed", &self.look_speed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec3, Vec2};

    use super::*;
    use crate::input::{InputEvent, InputMapper, InputState, MouseButton};
    use crate::options::Options;

    fn controller(options: &Options) -> Rc<CameraController> {
        let settings = Rc::new(options.clone());
        let mut camera = Camera::new(settings);
        camera.reset();
        Rc::new(CameraController::new(camera, &options.camera))
    }

    fn level_options() -> Options {
        let mut options = Options::default();
        options.camera.starting_location = DVec3::ZERO;
        options.camera.starting_look_at = DVec3::NEG_Z;
        options.camera.move_speed = 2.0;
        options.camera.look_speed = 0.01;
        options
    }

    #[test]
    fn movement_scales_with_speed_and_elapsed_time() {
        let controller = controller(&level_options());
        let aggregator = EventAggregator::new();
        controller.subscribe(&aggregator);

        aggregator.send_message(&MoveForward { elapsed: 0.5 });
        aggregator.send_message(&MoveUp { elapsed: 2.0 });

        let location = controller.camera().location();
        assert!((location - DVec3::new(0.0, 4.0, -1.0)).length() < 1e-9);
    }

    #[test]
    fn mouse_look_turns_toward_the_drag() {
        let controller = controller(&level_options());
        let aggregator = EventAggregator::new();
        controller.subscribe(&aggregator);

        aggregator.send_message(&MouseLook {
            delta: Vec2::new(10.0, 20.0),
        });

        let camera = controller.camera();
        assert!((camera.yaw() + 0.1).abs() < 1e-6);
        assert!((camera.pitch() + 0.2).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_the_starting_pose() {
        let controller = controller(&level_options());
        let aggregator = EventAggregator::new();
        controller.subscribe(&aggregator);

        aggregator.send_message(&MoveLeft { elapsed: 3.0 });
        controller.camera_mut().set_roll(1.0);
        aggregator.send_message(&ResetCamera);

        let camera = controller.camera();
        assert_eq!(camera.location(), DVec3::ZERO);
        assert_eq!(camera.yaw(), 0.0);
        assert_eq!(camera.roll(), 0.0);
    }

    #[test]
    fn dropping_the_controller_unsubscribes_it() {
        let aggregator = EventAggregator::new();
        {
            let controller = controller(&level_options());
            controller.subscribe(&aggregator);
            assert_eq!(aggregator.listener_count::<MoveForward>(), 1);
        }
        assert_eq!(aggregator.listener_count::<MoveForward>(), 0);
        aggregator.send_message(&MoveForward { elapsed: 1.0 });
    }

    #[test]
    fn keyboard_and_mouse_drive_the_camera_end_to_end() {
        let options = level_options();
        let controller = controller(&options);
        let aggregator = Rc::new(EventAggregator::new());
        controller.subscribe(&aggregator);
        let mut mapper = InputMapper::new(Rc::clone(&aggregator));
        mapper.bind_keys(&options.keybindings);

        let mut input = InputState::new();
        input.begin_frame(1.0);
        input.apply(&InputEvent::Key {
            key: "KeyD".into(),
            pressed: true,
        });
        mapper.handle_input(&input);

        let location = controller.camera().location();
        assert!((location - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-9);

        input.begin_frame(1.0);
        input.apply(&InputEvent::Key {
            key: "KeyD".into(),
            pressed: false,
        });
        input.apply(&InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        input.apply(&InputEvent::MouseMoved { dx: -5.0, dy: 0.0 });
        mapper.handle_input(&input);

        let camera = controller.camera();
        assert!((camera.yaw() - 0.05).abs() < 1e-6);
        let location = camera.location();
        assert!((location - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-9);
    }
}
