use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_filter: Callback<String>,
}

/// City filter above the listing grid. Filtering happens client side, so the
/// filter text is emitted as-is on submit.
#[function_component(SearchBar)]
pub fn search_bar(props: &Props) -> Html {
    let filter = use_state(String::new);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |text: String| filter.set(text))
    };

    let on_submit = {
        let filter = filter.clone();
        let on_filter = props.on_filter.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_filter.emit((*filter).clone());
        })
    };

    html! {
        <div class="d-flex justify-content-between align-items-center mb-4">
            <form onsubmit={on_submit} class="d-flex" style="width: 100%;">
                <InputText
                    id="filter"
                    name="filter"
                    placeholder="Filter by city"
                    input_type={InputType::Search}
                    class={classes!("form-control", "me-2")}
                    on_change={on_filter_change} />
                <input class="btn btn-outline-primary" type="submit" value="Search" />
            </form>
        </div>
    }
}
