use shared::HousingLocationInfo;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::housing_api;
use crate::components::composite::housing_location_card::HousingLocationCard;
use crate::components::composite::search_bar::SearchBar;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub api_url: String,
    pub on_select: Callback<i64>,
}

#[function_component(Home)]
pub fn home(props: &Props) -> Html {
    let locations = use_state(Vec::<HousingLocationInfo>::new);
    let filter = use_state(String::new);

    {
        let locations = locations.clone();
        use_effect_with(props.api_url.clone(), move |api_url| {
            let api_url = api_url.clone();
            spawn_local(async move {
                locations.set(housing_api::get_all_housing_locations(&api_url).await);
            });
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |text: String| filter.set(text))
    };

    let filtered: Vec<HousingLocationInfo> = if filter.is_empty() {
        (*locations).clone()
    } else {
        let needle = filter.to_lowercase();
        locations
            .iter()
            .filter(|location| location.city.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    };

    html! {
        <>
            <SearchBar on_filter={on_filter} />
            <section class="row">
                { for filtered.iter().map(|location| html! {
                    <HousingLocationCard
                        key={location.id}
                        location={location.clone()}
                        on_select={props.on_select.clone()} />
                }) }
            </section>
        </>
    }
}
