use shared::ApplicationRequest;
use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_apply: Callback<ApplicationRequest>,
}

/// Per-listing application form. Empty fields are accepted; the collaborator
/// treats missing values as empty strings.
#[function_component(ApplyForm)]
pub fn apply_form(props: &Props) -> Html {
    let state = use_state(ApplicationRequest::default);

    let on_change_first_name = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.first_name = input_text;
            state.set(data);
        })
    };

    let on_change_last_name = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.last_name = input_text;
            state.set(data);
        })
    };

    let on_change_email = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.email = input_text;
            state.set(data);
        })
    };

    let on_submit = {
        let state = state.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_apply.emit((*state).clone());
        })
    };

    html! {
        <section class="mt-4">
            <h2 class="h4">{ "Apply now to live here" }</h2>
            <form onsubmit={on_submit}>
                <div class="mb-3">
                    <label for="first-name" class="form-label">{ "First Name" }</label>
                    <InputText
                        id="first-name"
                        name="first-name"
                        placeholder="First name"
                        class={"form-control"}
                        input_type={InputType::Text}
                        on_change={on_change_first_name} />
                </div>
                <div class="mb-3">
                    <label for="last-name" class="form-label">{ "Last Name" }</label>
                    <InputText
                        id="last-name"
                        name="last-name"
                        placeholder="Last name"
                        class={"form-control"}
                        input_type={InputType::Text}
                        on_change={on_change_last_name} />
                </div>
                <div class="mb-3">
                    <label for="email" class="form-label">{ "Email" }</label>
                    <InputText
                        id="email"
                        name="email"
                        placeholder="Email address"
                        class={"form-control"}
                        input_type={InputType::Email}
                        on_change={on_change_email} />
                </div>
                <input class="btn btn-primary" type="submit" value="Apply now" />
            </form>
        </section>
    }
}
