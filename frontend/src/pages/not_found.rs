use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout>
            <div class="not-found-page">
                <h1>{"404"}</h1>
                <p>{"Oops! The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="cta-primary">
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </Layout>
    }
}
