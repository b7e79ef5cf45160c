// ============================================================================
// REACTIVITY - Valores observables con suscripciones liberables
// ============================================================================
// Cada subscribe() devuelve un `Subscription`. Al hacer drop del guard el
// callback se da de baja, así los listeners no se acumulan entre montajes.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Subscribers<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Callback<T>)>>,
}

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<Subscribers<T>>,
}

impl<T: Clone + PartialEq + 'static> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(Subscribers {
                next_id: Cell::new(0),
                entries: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Establecer nuevo valor. Solo notifica si el valor cambió.
    pub fn set(&self, new_value: T) {
        {
            let mut current = self.value.borrow_mut();
            if *current == new_value {
                return;
            }
            *current = new_value;
        }
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = self.subscribers.next_id.get();
        self.subscribers.next_id.set(id + 1);
        let callback: Callback<T> = Rc::new(callback);
        self.subscribers.entries.borrow_mut().push((id, callback));

        let subscribers: Weak<Subscribers<T>> = Rc::downgrade(&self.subscribers);
        Subscription::new(move || {
            if let Some(subscribers) = subscribers.upgrade() {
                subscribers.entries.borrow_mut().retain(|(sid, _)| *sid != id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.entries.borrow().len()
    }

    fn notify(&self) {
        let value = self.get();
        // Snapshot: un callback puede suscribir o dar de baja durante la notificación
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .entries
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

/// Guard de suscripción: el drop da de baja el callback
#[must_use = "si se descarta el Subscription el callback se da de baja inmediatamente"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
