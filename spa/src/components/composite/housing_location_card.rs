use shared::HousingLocationInfo;
use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub location: HousingLocationInfo,
    pub on_select: Callback<i64>,
}

#[function_component(HousingLocationCard)]
pub fn housing_location_card(props: &Props) -> Html {
    let on_learn_more = {
        let on_select = props.on_select.clone();
        let id = props.location.id;
        Callback::from(move |_| {
            on_select.emit(id);
        })
    };

    html! {
        <div class="col-md-4 mb-4">
            <section class="card h-100">
                <img class="card-img-top"
                    src={props.location.photo.clone()}
                    alt={format!("Exterior photo of {}", props.location.name)} />
                <div class="card-body">
                    <h2 class="card-title h5">{ &props.location.name }</h2>
                    <p class="card-text">
                        { format!("{}, {}", props.location.city, props.location.state) }
                    </p>
                    <button onclick={on_learn_more} class="btn btn-outline-primary">
                        {"Learn More"}
                    </button>
                </div>
            </section>
        </div>
    }
}
