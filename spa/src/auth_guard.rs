use crate::routes::Route;
use crate::user_session::UserSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}

/// Route-entry predicate: one synchronous read of the session holder, allow
/// if logged in, otherwise redirect to the login page. No subscription is
/// retained.
pub fn check(target: &Route, session: &UserSession) -> RouteDecision {
    if !target.requires_login() {
        return RouteDecision::Allow;
    }
    if session.current().is_logged {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(Route::Login)
    }
}

/// The route that actually activates for a navigation attempt.
pub fn resolve(target: Route, session: &UserSession) -> Route {
    match check(&target, session) {
        RouteDecision::Allow => target,
        RouteDecision::Redirect(to) => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_is_redirected_to_login() {
        let session = UserSession::new();
        assert_eq!(
            check(&Route::Home, &session),
            RouteDecision::Redirect(Route::Login)
        );
        assert_eq!(
            check(&Route::Details { id: 3 }, &session),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn logged_in_user_is_allowed() {
        let session = UserSession::new();
        session.login("brian");
        assert_eq!(check(&Route::Home, &session), RouteDecision::Allow);
        assert_eq!(check(&Route::Details { id: 3 }, &session), RouteDecision::Allow);
    }

    #[test]
    fn login_page_is_always_reachable() {
        let session = UserSession::new();
        assert_eq!(check(&Route::Login, &session), RouteDecision::Allow);
        session.login("brian");
        assert_eq!(check(&Route::Login, &session), RouteDecision::Allow);
    }

    #[test]
    fn logging_out_again_gates_protected_routes() {
        let session = UserSession::new();
        session.login("brian");
        session.logout();
        assert_eq!(resolve(Route::Home, &session), Route::Login);
    }

    #[test]
    fn gate_does_not_leave_an_open_subscription() {
        let session = UserSession::new();
        let before = session.observer_count();
        let _ = check(&Route::Home, &session);
        let _ = resolve(Route::Details { id: 1 }, &session);
        assert_eq!(session.observer_count(), before);
    }
}
