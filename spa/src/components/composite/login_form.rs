use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(Debug, PartialEq, Default, Clone)]
pub struct LoginFormData {
    pub username: String,
    pub password: String,
}

impl LoginFormData {
    // Mirrors the form validators: username at least three characters,
    // password merely present. The password is never sent anywhere.
    fn is_valid(&self) -> bool {
        self.username.trim().len() >= 3 && !self.password.is_empty()
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_login: Callback<LoginFormData>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &Props) -> Html {
    let state = use_state(LoginFormData::default);
    let password_visible = use_state(|| false);
    let show_errors = use_state(|| false);

    let on_change_username = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.username = input_text;
            state.set(data);
        })
    };

    let on_change_password = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.password = input_text;
            state.set(data);
        })
    };

    let on_toggle_password = {
        let password_visible = password_visible.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            password_visible.set(!*password_visible);
        })
    };

    let on_submit = {
        let state = state.clone();
        let show_errors = show_errors.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let data = (*state).clone();
            if data.is_valid() {
                on_login.emit(data);
            } else {
                show_errors.set(true);
            }
        })
    };

    let password_type = if *password_visible {
        InputType::Text
    } else {
        InputType::Password
    };

    html! {
        <div class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-4">
                    <h2 class="text-center mb-4">{ "Login" }</h2>
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label for="username" class="form-label">{ "User name" }</label>
                            <InputText
                                id="username"
                                name="username"
                                placeholder="Enter your user name"
                                class={"form-control"}
                                input_type={InputType::Text}
                                on_change={on_change_username} />
                            if *show_errors && state.username.trim().len() < 3 {
                                <div class="form-text text-danger">
                                    { "User name must be at least 3 characters" }
                                </div>
                            }
                        </div>
                        <div class="mb-3">
                            <label for="password" class="form-label">{ "Password" }</label>
                            <div class="input-group">
                                <InputText
                                    id="password"
                                    name="password"
                                    placeholder="Enter your password"
                                    input_type={password_type}
                                    class={"form-control"}
                                    on_change={on_change_password} />
                                <button class="btn btn-outline-secondary" onclick={on_toggle_password}>
                                    { if *password_visible { "Hide" } else { "Show" } }
                                </button>
                            </div>
                            if *show_errors && state.password.is_empty() {
                                <div class="form-text text-danger">
                                    { "Password is required" }
                                </div>
                            }
                        </div>
                        <div class="d-grid">
                            <input class="btn btn-primary" type="submit" value="Login" />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
