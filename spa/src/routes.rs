/// The three navigable views of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Details { id: i64 },
    Login,
}

impl Route {
    /// Everything except the login page sits behind the auth gate.
    pub fn requires_login(&self) -> bool {
        !matches!(self, Route::Login)
    }
}
