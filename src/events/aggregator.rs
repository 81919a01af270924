//! Type-keyed publish/subscribe hub.
//!
//! Listeners are held by [`Weak`] reference: the aggregator never keeps a
//! listener alive, and dropping the last [`Rc`] to a listener unregisters it.
//! Explicit removal is available through [`EventAggregator::remove_listener`].

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

/// Receives messages of type `M` from an [`EventAggregator`].
pub trait Listener<M> {
    /// Handle one delivered message.
    fn handle(&self, message: &M);
}

type Registrations<M> = Vec<Weak<dyn Listener<M>>>;

/// Routes each message to every live listener registered for its exact type.
///
/// Single-threaded by construction (`Rc`/`RefCell`). Sending takes `&self`,
/// so a listener holding the aggregator may register further listeners while
/// a message is in flight; those only see later messages.
#[derive(Default)]
pub struct EventAggregator {
    /// `TypeId` of `M` → boxed `Registrations<M>`.
    listeners: RefCell<FxHashMap<TypeId, Box<dyn Any>>>,
}

fn empty_registrations<M: 'static>() -> Box<dyn Any> {
    Box::new(Registrations::<M>::new())
}

fn same_listener<M: 'static, L>(
    registered: &Weak<dyn Listener<M>>,
    listener: &Rc<L>,
) -> bool {
    registered.strong_count() > 0
        && std::ptr::addr_eq(registered.as_ptr(), Rc::as_ptr(listener))
}

impl EventAggregator {
    /// Create an aggregator with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for messages of type `M`.
    ///
    /// Registering the same listener twice has no further effect.
    pub fn add_listener<M, L>(&self, listener: &Rc<L>)
    where
        M: 'static,
        L: Listener<M> + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let registrations = listeners
            .entry(TypeId::of::<M>())
            .or_insert_with(empty_registrations::<M>)
            .downcast_mut::<Registrations<M>>();

        let Some(registrations) = registrations else {
            return;
        };
        registrations.retain(|weak| weak.strong_count() > 0);
        if registrations
            .iter()
            .any(|registered| same_listener(registered, listener))
        {
            return;
        }

        let strong: Rc<dyn Listener<M>> = listener.clone();
        registrations.push(Rc::downgrade(&strong));
        log::debug!(
            "listener registered for {} ({} total)",
            std::any::type_name::<M>(),
            registrations.len()
        );
    }

    /// Unregister `listener` from messages of type `M`.
    ///
    /// Returns `true` if it was registered.
    pub fn remove_listener<M, L>(&self, listener: &Rc<L>) -> bool
    where
        M: 'static,
        L: Listener<M> + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let Some(registrations) = listeners
            .get_mut(&TypeId::of::<M>())
            .and_then(|boxed| boxed.downcast_mut::<Registrations<M>>())
        else {
            return false;
        };

        registrations.retain(|weak| weak.strong_count() > 0);
        let before = registrations.len();
        registrations.retain(|registered| !same_listener(registered, listener));
        registrations.len() != before
    }

    /// Whether `listener` is currently registered for messages of type `M`.
    #[must_use]
    pub fn has_listener<M, L>(&self, listener: &Rc<L>) -> bool
    where
        M: 'static,
        L: Listener<M> + 'static,
    {
        self.live_listeners::<M>().iter().any(|live| {
            std::ptr::addr_eq(Rc::as_ptr(live), Rc::as_ptr(listener))
        })
    }

    /// Number of live listeners registered for messages of type `M`.
    #[must_use]
    pub fn listener_count<M: 'static>(&self) -> usize {
        self.live_listeners::<M>().len()
    }

    /// Deliver `message` once to every live listener registered for `M`.
    ///
    /// Listeners registered during delivery do not receive this message.
    pub fn send_message<M: 'static>(&self, message: &M) {
        let recipients = self.live_listeners::<M>();
        log::trace!(
            "delivering {} to {} listener(s)",
            std::any::type_name::<M>(),
            recipients.len()
        );
        for listener in recipients {
            listener.handle(message);
        }
    }

    /// Snapshot the live listeners for `M`, pruning dropped ones.
    ///
    /// The borrow is released before returning so delivery can re-enter.
    fn live_listeners<M: 'static>(&self) -> Vec<Rc<dyn Listener<M>>> {
        let mut listeners = self.listeners.borrow_mut();
        let Some(registrations) = listeners
            .get_mut(&TypeId::of::<M>())
            .and_then(|boxed| boxed.downcast_mut::<Registrations<M>>())
        else {
            return Vec::new();
        };

        registrations.retain(|weak| weak.strong_count() > 0);
        registrations.iter().filter_map(Weak::upgrade).collect()
    }
}

impl std::fmt::Debug for EventAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventAggregator")
            .field("message_types", &self.listeners.borrow().len())
            .finish()
    }
}
