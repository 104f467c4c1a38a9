use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The current session subject. Exactly one value is current at any instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub is_logged: bool,
}

impl User {
    pub fn guest() -> Self {
        Self {
            id: 0,
            name: "Guest".to_owned(),
            is_logged: false,
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::guest()
    }
}

/// Handle returned by [`UserSession::observe`]; pass it back to
/// [`UserSession::unsubscribe`] to stop delivery to that observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(usize);

type Observer = Rc<dyn Fn(&User)>;

/// Single source of truth for who is logged in.
///
/// Constructed once at the composition root and handed by reference to the
/// components that need it. Observers get an immediate replay of the latest
/// value on registration, then every subsequent change in registration order.
/// The host is a single cooperative event loop, so reads and replacements
/// need no locking; an observer that calls `login`/`logout` from inside its
/// own notification recurses and is not guarded against.
pub struct UserSession {
    current: RefCell<User>,
    observers: RefCell<Vec<(usize, Observer)>>,
    next_id: Cell<usize>,
}

impl UserSession {
    pub fn new() -> Self {
        Self {
            current: RefCell::new(User::guest()),
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Latest value, synchronously. Never blocks, never fails.
    pub fn current(&self) -> User {
        self.current.borrow().clone()
    }

    /// Registers an observer: the latest value is replayed immediately, then
    /// every change is delivered until the subscription is dropped.
    pub fn observe(&self, observer: impl Fn(&User) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let observer: Observer = Rc::new(observer);
        observer(&self.current());
        self.observers.borrow_mut().push((id, observer));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.observers.borrow_mut().retain(|(id, _)| *id != subscription.0);
    }

    /// Replaces the current user with a logged-in `name`. The name is not
    /// validated; repeated logins with the same name still notify.
    pub fn login(&self, name: impl Into<String>) {
        self.replace(User {
            id: 1,
            name: name.into(),
            is_logged: true,
        });
    }

    /// Clears the logged-in flag. An active session keeps its name and id; a
    /// second logout falls back to the canonical guest.
    pub fn logout(&self) {
        let current = self.current();
        if current.is_logged {
            self.replace(User {
                is_logged: false,
                ..current
            });
        } else {
            self.replace(User::guest());
        }
    }

    #[cfg(test)]
    pub(crate) fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn replace(&self, user: User) {
        *self.current.borrow_mut() = user.clone();
        // Notify outside the borrows so observers may subscribe or read
        // while being called.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in &observers {
            observer(&user);
        }
    }
}

impl Default for UserSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn collect(session: &UserSession) -> (Subscription, Rc<RefCell<Vec<User>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = session.observe(move |user| sink.borrow_mut().push(user.clone()));
        (subscription, seen)
    }

    #[test]
    fn starts_as_guest() {
        let session = UserSession::new();
        assert_eq!(session.current(), User::guest());
    }

    #[test]
    fn login_replaces_current_user() {
        let session = UserSession::new();
        session.login("brian");
        assert_eq!(
            session.current(),
            User {
                id: 1,
                name: "brian".to_owned(),
                is_logged: true,
            }
        );
    }

    #[test]
    fn logout_keeps_name_of_an_active_session() {
        let session = UserSession::new();
        session.login("brian");
        session.logout();
        assert_eq!(
            session.current(),
            User {
                id: 1,
                name: "brian".to_owned(),
                is_logged: false,
            }
        );
    }

    #[test]
    fn logout_when_already_logged_out_resets_to_guest() {
        let session = UserSession::new();
        session.login("brian");
        session.logout();
        assert_ne!(session.current().name, "Guest");
        session.logout();
        assert_eq!(session.current(), User::guest());
    }

    #[test]
    fn is_logged_follows_the_most_recent_call() {
        let session = UserSession::new();
        assert!(!session.current().is_logged);
        session.login("a");
        assert!(session.current().is_logged);
        session.login("b");
        assert!(session.current().is_logged);
        session.logout();
        assert!(!session.current().is_logged);
        session.logout();
        assert!(!session.current().is_logged);
        session.login("c");
        assert!(session.current().is_logged);
    }

    #[test]
    fn empty_name_is_accepted() {
        let session = UserSession::new();
        session.login("");
        assert_eq!(session.current().name, "");
        assert!(session.current().is_logged);
    }

    #[test]
    fn observer_is_replayed_the_latest_value_only() {
        let session = UserSession::new();
        session.login("a");
        session.login("b");
        let (_subscription, seen) = collect(&session);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].name, "b");
    }

    #[test]
    fn observer_sees_every_change_in_order() {
        let session = UserSession::new();
        let (_subscription, seen) = collect(&session);
        session.login("brian");
        session.logout();
        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(*seen.first().unwrap(), User::guest());
        assert!(seen[1].is_logged);
        assert_eq!(seen[2].name, "brian");
        assert!(!seen[2].is_logged);
    }

    #[test]
    fn repeated_login_with_the_same_name_still_emits() {
        let session = UserSession::new();
        let (_subscription, seen) = collect(&session);
        session.login("brian");
        session.login("brian");
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn unsubscribed_observer_stops_receiving() {
        let session = UserSession::new();
        let (first, first_seen) = collect(&session);
        let (_second, second_seen) = collect(&session);
        session.unsubscribe(first);
        session.login("brian");
        assert_eq!(first_seen.borrow().len(), 1);
        assert_eq!(second_seen.borrow().len(), 2);
    }

    #[test]
    fn observers_are_notified_in_subscription_order() {
        let session = UserSession::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            session.observe(move |user| {
                if user.is_logged {
                    order.borrow_mut().push(label);
                }
            });
        }
        session.login("brian");
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }
}
