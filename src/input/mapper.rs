//! Turns per-frame input snapshots into broadcast messages.
//!
//! The `InputMapper` sits between raw input and everything that reacts to
//! it: consumers subscribe to message types on the
//! [`EventAggregator`], the mapper decides which messages a frame produces.

use std::rc::Rc;

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::keyboard::KeyAction;
use super::messages::{
    InputMessage, MouseLook, MoveBackward, MoveDown, MoveForward, MoveLeft,
    MoveRight, MoveUp, ResetCamera,
};
use super::state::InputState;
use crate::events::EventAggregator;
use crate::options::KeybindingOptions;

type Sender = Box<dyn Fn(&EventAggregator, &InputState)>;

fn sender<M: InputMessage>() -> Sender {
    Box::new(|aggregator: &EventAggregator, input: &InputState| {
        aggregator.send_message(&M::from_input(input));
    })
}

struct KeyEvent {
    key: String,
    send: Sender,
}

/// Maps keys and mouse motion to message types.
///
/// # Usage
///
/// ```
/// use std::rc::Rc;
///
/// use freelook::events::EventAggregator;
/// use freelook::input::messages::{MoveForward, ResetCamera};
/// use freelook::input::{InputMapper, InputState};
///
/// let aggregator = Rc::new(EventAggregator::new());
/// let mut mapper = InputMapper::new(Rc::clone(&aggregator));
/// mapper.add_key_down_message::<MoveForward>("KeyW");
/// mapper.add_key_press_message::<ResetCamera>("KeyR");
///
/// // Once per frame:
/// let input = InputState::new();
/// mapper.handle_input(&input);
/// ```
pub struct InputMapper {
    aggregator: Rc<EventAggregator>,
    key_press_events: Vec<KeyEvent>,
    key_down_events: Vec<KeyEvent>,
    mouse_move_events: Vec<Sender>,
}

impl InputMapper {
    /// Create a mapper with no bindings that sends through `aggregator`.
    #[must_use]
    pub fn new(aggregator: Rc<EventAggregator>) -> Self {
        Self {
            aggregator,
            key_press_events: Vec::new(),
            key_down_events: Vec::new(),
            mouse_move_events: Vec::new(),
        }
    }

    /// Send `M` on the frame `key` goes down.
    pub fn add_key_press_message<M: InputMessage>(
        &mut self,
        key: impl Into<String>,
    ) {
        self.key_press_events.push(KeyEvent {
            key: key.into(),
            send: sender::<M>(),
        });
    }

    /// Send `M` on every frame `key` is held.
    pub fn add_key_down_message<M: InputMessage>(
        &mut self,
        key: impl Into<String>,
    ) {
        self.key_down_events.push(KeyEvent {
            key: key.into(),
            send: sender::<M>(),
        });
    }

    /// Send `M` on frames where the mouse moves with the right button held.
    pub fn add_mouse_move_message<M: InputMessage>(&mut self) {
        self.mouse_move_events.push(sender::<M>());
    }

    /// Register the standard camera bindings from `keybindings`, plus mouse
    /// look.
    ///
    /// Movement actions fire while held; reset fires once per press.
    /// A key bound to several actions sends all of their messages.
    pub fn bind_keys(&mut self, keybindings: &KeybindingOptions) {
        let mut bound: FxHashMap<&str, KeyAction> = FxHashMap::default();
        for action in KeyAction::ALL {
            let Some(key) = keybindings.key_for(action) else {
                log::warn!("no key bound for {action:?}");
                continue;
            };
            if let Some(previous) = bound.insert(key, action) {
                log::warn!(
                    "key '{key}' bound to both {previous:?} and {action:?}"
                );
            }
            let key = key.to_owned();
            match action {
                KeyAction::MoveForward => {
                    self.add_key_down_message::<MoveForward>(key);
                }
                KeyAction::MoveBackward => {
                    self.add_key_down_message::<MoveBackward>(key);
                }
                KeyAction::MoveLeft => {
                    self.add_key_down_message::<MoveLeft>(key);
                }
                KeyAction::MoveRight => {
                    self.add_key_down_message::<MoveRight>(key);
                }
                KeyAction::MoveUp => {
                    self.add_key_down_message::<MoveUp>(key);
                }
                KeyAction::MoveDown => {
                    self.add_key_down_message::<MoveDown>(key);
                }
                KeyAction::ResetCamera => {
                    self.add_key_press_message::<ResetCamera>(key);
                }
            }
        }
        self.add_mouse_move_message::<MouseLook>();
    }

    /// Broadcast every message this frame's input calls for.
    ///
    /// Key presses go first, then held keys, then mouse motion.
    pub fn handle_input(&self, input: &InputState) {
        self.send_key_press_messages(input);
        self.send_key_down_messages(input);
        self.send_mouse_move_messages(input);
    }

    fn send_key_press_messages(&self, input: &InputState) {
        for event in self
            .key_press_events
            .iter()
            .filter(|event| input.is_key_pressed(&event.key))
        {
            (event.send)(&self.aggregator, input);
        }
    }

    fn send_key_down_messages(&self, input: &InputState) {
        for event in self
            .key_down_events
            .iter()
            .filter(|event| input.is_key_down(&event.key))
        {
            (event.send)(&self.aggregator, input);
        }
    }

    fn send_mouse_move_messages(&self, input: &InputState) {
        if !input.is_right_mouse_button_down()
            || input.mouse_delta() == Vec2::ZERO
        {
            return;
        }
        for send in &self.mouse_move_events {
            send(&self.aggregator, input);
        }
    }
}

impl std::fmt::Debug for InputMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputMapper")
            .field("key_press_events", &self.key_press_events.len())
            .field("key_down_events", &self.key_down_events.len())
            .field("mouse_move_events", &self.mouse_move_events.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::events::Listener;
    use crate::input::event::{InputEvent, MouseButton};

    #[derive(Default)]
    struct Recorder {
        log: RefCell<Vec<String>>,
    }

    impl Listener<MoveForward> for Recorder {
        fn handle(&self, message: &MoveForward) {
            self.log
                .borrow_mut()
                .push(format!("forward {}", message.elapsed));
        }
    }

    impl Listener<ResetCamera> for Recorder {
        fn handle(&self, _message: &ResetCamera) {
            self.log.borrow_mut().push("reset".to_owned());
        }
    }

    impl Listener<MouseLook> for Recorder {
        fn handle(&self, message: &MouseLook) {
            self.log.borrow_mut().push(format!(
                "look {} {}",
                message.delta.x, message.delta.y
            ));
        }
    }

    fn setup() -> (Rc<EventAggregator>, Rc<Recorder>, InputMapper) {
        let aggregator = Rc::new(EventAggregator::new());
        let recorder = Rc::new(Recorder::default());
        aggregator.add_listener::<MoveForward, _>(&recorder);
        aggregator.add_listener::<ResetCamera, _>(&recorder);
        aggregator.add_listener::<MouseLook, _>(&recorder);

        let mut mapper = InputMapper::new(Rc::clone(&aggregator));
        mapper.add_key_down_message::<MoveForward>("KeyW");
        mapper.add_key_press_message::<ResetCamera>("KeyR");
        mapper.add_mouse_move_message::<MouseLook>();
        (aggregator, recorder, mapper)
    }

    fn press(state: &mut InputState, key: &str) {
        state.apply(&InputEvent::Key {
            key: key.into(),
            pressed: true,
        });
    }

    #[test]
    fn held_key_sends_every_frame() {
        let (_aggregator, recorder, mapper) = setup();
        let mut state = InputState::new();

        state.begin_frame(0.5);
        press(&mut state, "KeyW");
        mapper.handle_input(&state);
        state.begin_frame(0.25);
        mapper.handle_input(&state);

        assert_eq!(
            *recorder.log.borrow(),
            vec!["forward 0.5".to_owned(), "forward 0.25".to_owned()]
        );
    }

    #[test]
    fn pressed_key_sends_once() {
        let (_aggregator, recorder, mapper) = setup();
        let mut state = InputState::new();

        state.begin_frame(0.1);
        press(&mut state, "KeyR");
        mapper.handle_input(&state);
        state.begin_frame(0.1);
        mapper.handle_input(&state);

        assert_eq!(*recorder.log.borrow(), vec!["reset".to_owned()]);
    }

    #[test]
    fn presses_are_sent_before_held_keys() {
        let (_aggregator, recorder, mapper) = setup();
        let mut state = InputState::new();

        state.begin_frame(1.0);
        press(&mut state, "KeyW");
        press(&mut state, "KeyR");
        mapper.handle_input(&state);

        assert_eq!(
            *recorder.log.borrow(),
            vec!["reset".to_owned(), "forward 1".to_owned()]
        );
    }

    #[test]
    fn mouse_look_requires_right_button_and_motion() {
        let (_aggregator, recorder, mapper) = setup();
        let mut state = InputState::new();

        state.apply(&InputEvent::MouseMoved { dx: 3.0, dy: 1.0 });
        mapper.handle_input(&state);
        assert!(recorder.log.borrow().is_empty());

        state.apply(&InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        state.begin_frame(0.1);
        mapper.handle_input(&state);
        assert!(recorder.log.borrow().is_empty());

        state.apply(&InputEvent::MouseMoved { dx: 3.0, dy: 1.0 });
        mapper.handle_input(&state);
        assert_eq!(*recorder.log.borrow(), vec!["look 3 1".to_owned()]);
        assert_eq!(state.mouse_delta(), Vec2::new(3.0, 1.0));
    }

    #[test]
    fn bind_keys_uses_configured_keys() {
        let aggregator = Rc::new(EventAggregator::new());
        let recorder = Rc::new(Recorder::default());
        aggregator.add_listener::<MoveForward, _>(&recorder);
        aggregator.add_listener::<ResetCamera, _>(&recorder);

        let mut mapper = InputMapper::new(Rc::clone(&aggregator));
        mapper.bind_keys(&KeybindingOptions::default());

        let mut state = InputState::new();
        state.begin_frame(2.0);
        press(&mut state, "KeyW");
        press(&mut state, "KeyR");
        mapper.handle_input(&state);

        assert_eq!(
            *recorder.log.borrow(),
            vec!["reset".to_owned(), "forward 2".to_owned()]
        );
    }

    #[test]
    fn shared_key_sends_every_bound_message() {
        let aggregator = Rc::new(EventAggregator::new());
        let recorder = Rc::new(Recorder::default());
        aggregator.add_listener::<MoveForward, _>(&recorder);
        aggregator.add_listener::<ResetCamera, _>(&recorder);

        let mut keybindings = KeybindingOptions::default();
        let _ = keybindings
            .bindings
            .insert(KeyAction::MoveForward, "Space".to_owned());
        let _ = keybindings
            .bindings
            .insert(KeyAction::ResetCamera, "Space".to_owned());
        let mut mapper = InputMapper::new(Rc::clone(&aggregator));
        mapper.bind_keys(&keybindings);

        let mut state = InputState::new();
        state.begin_frame(1.0);
        press(&mut state, "Space");
        mapper.handle_input(&state);

        assert_eq!(
            *recorder.log.borrow(),
            vec!["reset".to_owned(), "forward 1".to_owned()]
        );
    }
}
