use std::rc::Rc;

use shared::AppConfig;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::config_api;
use crate::auth_guard;
use crate::components::composite::login_form::{LoginForm, LoginFormData};
use crate::components::composite::navigation_bar::NavigationBar;
use crate::pages::details::Details;
use crate::pages::home::Home;
use crate::routes::Route;
use crate::user_session::UserSession;

/// Composition root: owns the session holder, the runtime config, and the
/// current route, and wires them into the pages.
#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |_| UserSession::new());
    let user = use_state(|| session.current());
    let config = use_state(AppConfig::default);
    let route = use_state(|| Route::Home);

    {
        let session = Rc::clone(&session);
        let user = user.clone();
        use_effect_with((), move |_| {
            let subscription = session.observe(move |value| user.set(value.clone()));
            move || session.unsubscribe(subscription)
        });
    }

    let is_first = use_is_first_mount();
    if is_first {
        let config = config.clone();
        spawn_local(async move {
            match config_api::load_config().await {
                Ok(loaded) => {
                    log::info!("Runtime config loaded, apiUrl={}", loaded.api_url());
                    config.set(loaded);
                }
                Err(error) => {
                    log::warn!("Fail to load config.json, using defaults, error: {error}");
                }
            }
        });
    }

    let on_navigate = {
        let route = route.clone();
        let session = Rc::clone(&session);
        Callback::from(move |target: Route| {
            route.set(auth_guard::resolve(target, &session));
        })
    };

    let on_select = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |id: i64| {
            on_navigate.emit(Route::Details { id });
        })
    };

    let on_login = {
        let session = Rc::clone(&session);
        let route = route.clone();
        Callback::from(move |data: LoginFormData| {
            session.login(data.username);
            route.set(Route::Home);
        })
    };

    let on_logout = {
        let session = Rc::clone(&session);
        Callback::from(move |()| {
            log::info!("User logged out");
            session.logout();
        })
    };

    // The gate also runs for the initial view, so a guest lands on the login
    // page even though the route state starts at home.
    let active = auth_guard::resolve(*route, &session);
    let api_url = config.api_url();

    let content = match active {
        Route::Home => html! {
            <Home api_url={api_url} on_select={on_select} />
        },
        Route::Details { id } => html! {
            <Details api_url={api_url} location_id={id} />
        },
        Route::Login => html! {
            <LoginForm on_login={on_login} />
        },
    };

    html! {
        <main>
            <NavigationBar user={(*user).clone()}
                on_navigate={on_navigate}
                on_logout={on_logout} />
            <section class="content container mt-4">
                { content }
            </section>
        </main>
    }
}
