use shared::{ApplicationRequest, HousingLocationInfo};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::housing_api;
use crate::components::composite::apply_form::ApplyForm;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub api_url: String,
    pub location_id: i64,
}

#[function_component(Details)]
pub fn details(props: &Props) -> Html {
    let location = use_state(|| None::<HousingLocationInfo>);

    {
        let location = location.clone();
        use_effect_with(
            (props.api_url.clone(), props.location_id),
            move |(api_url, id)| {
                let api_url = api_url.clone();
                let id = *id;
                spawn_local(async move {
                    location.set(housing_api::get_housing_location_by_id(&api_url, id).await);
                });
            },
        );
    }

    let on_apply = Callback::from(move |application: ApplicationRequest| {
        log::debug!(
            "Submitting application, request={}",
            serde_json::to_string(&application).unwrap()
        );
        housing_api::submit_application(&application);
    });

    match location.as_ref() {
        Some(location) => html! {
            <article>
                <img class="listing-photo img-fluid rounded mb-3"
                    src={location.photo.clone()}
                    alt={format!("Exterior photo of {}", location.name)} />
                <section class="listing-description">
                    <h2 class="listing-heading">{ &location.name }</h2>
                    <p class="listing-location">
                        { format!("{}, {}", location.city, location.state) }
                    </p>
                </section>
                <section class="listing-features">
                    <h2 class="h4">{ "About this housing location" }</h2>
                    <ul>
                        <li>{ format!("Units available: {}", location.available_units) }</li>
                        <li>{ format!("Does this location have wifi: {}", location.wifi) }</li>
                        <li>{ format!("Does this location have laundry: {}", location.laundry) }</li>
                    </ul>
                </section>
                <ApplyForm on_apply={on_apply} />
            </article>
        },
        None => html! {
            <p>{ "Housing location not found." }</p>
        },
    }
}
