use yew::prelude::*;

use crate::routes::Route;
use crate::user_session::User;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub user: User,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(NavigationBar)]
pub fn navigation_bar(props: &Props) -> Html {
    let on_brand_click = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            on_navigate.emit(Route::Home);
        })
    };

    let on_login_click = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            on_navigate.emit(Route::Login);
        })
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| {
            on_logout.emit(());
        })
    };

    let user_status = if props.user.is_logged {
        html! {
            <>
                <span class="navbar-text me-3">
                    { format!("Welcome, {}!", props.user.name) }
                </span>
                <button onclick={on_logout_click} class="btn btn-sm btn-outline-secondary">
                    {"Logout"}
                </button>
            </>
        }
    } else {
        html! {
            <button onclick={on_login_click} class="btn btn-sm btn-outline-primary">
                {"Login"}
            </button>
        }
    };

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid">
                <a class="navbar-brand" onclick={on_brand_click}>{"Homes"}</a>
                <div class="collapse navbar-collapse justify-content-end">
                    { user_status }
                </div>
            </div>
        </nav>
    }
}
