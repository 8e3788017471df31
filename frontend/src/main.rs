use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod forms;
mod motion;
mod components {
    pub mod cards;
    pub mod contact_form;
    pub mod footer;
    pub mod form_driver;
    pub mod form_fields;
    pub mod inquiry_form;
    pub mod media_slider;
    pub mod nav;
    pub mod project_showcase;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod project_detail;
    pub mod start_project;
}

use components::{footer::Footer, nav::Nav};
use content::SiteData;
use pages::{
    home::Home,
    not_found::NotFound,
    project_detail::ProjectDetail,
    start_project::StartProject,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/project/:id")]
    Project { id: String },
    #[at("/start-project")]
    StartProject,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, site: Rc<SiteData>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {site} /> }
        }
        Route::Project { id } => {
            info!("Rendering Project page for id {}", id);
            html! { <ProjectDetail {site} id={id} /> }
        }
        Route::StartProject => {
            info!("Rendering Start Project page");
            html! { <StartProject {site} /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let site = use_state(|| {
        SiteData::load().map(Rc::new).map_err(|e| {
            error!("Failed to load site content: {}", e);
            e
        })
    });

    let site = match &*site {
        Ok(site) => site.clone(),
        Err(e) => {
            return html! {
                <div class="load-error" style="padding: 4rem; text-align: center;">
                    <h1>{"Content unavailable"}</h1>
                    <p>{e.to_string()}</p>
                </div>
            };
        }
    };

    let render = {
        let site = site.clone();
        move |route: Route| switch(route, site.clone())
    };

    html! {
        <BrowserRouter>
            <Nav site={site.clone()} />
            <main>
                <Switch<Route> {render} />
            </main>
            <Footer {site} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
