use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod pages;
mod utils;

use components::footer::Footer;
use components::navbar::Navbar;
use pages::home::Home;
use pages::privacy::Privacy;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Privacy => html! { <Privacy /> },
        Route::NotFound => html! {
            <div style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 6rem 2rem 2rem;">
                <h1>{"Page Not Found"}</h1>
                <p><a href="/">{"Back to the home page"}</a></p>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
