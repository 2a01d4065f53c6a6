use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod site;
mod leads {
    pub mod lead;
    pub mod form;
    pub mod sink;
}
mod components {
    pub mod accordion;
    pub mod lead_form;
    pub mod nav;
    pub mod reveal;
    pub mod smart_image;
}
mod pages {
    pub mod content;
    pub mod home;
}

use components::nav::Header;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
