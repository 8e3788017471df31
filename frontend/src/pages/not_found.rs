use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    #[prop_or(AttrValue::Static("Page Not Found"))]
    pub title: AttrValue,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    use_title(props.title.to_string());

    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 7rem 1.5rem;
                }
                .not-found h1 {
                    font-size: 2.5rem;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .not-found a {
                    background: #84cc16;
                    color: #fff;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .not-found a:hover { background: #65a30d; }
                "#}
            </style>
            <h1>{&props.title}</h1>
            <Link<Route> to={Route::Home}>{"Back to Home"}</Link<Route>>
        </div>
    }
}
