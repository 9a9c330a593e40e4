use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod session;
mod reconcile;
mod counter {
    pub mod easing;
    pub mod format;
    pub mod animation;
    pub mod frame;
    pub mod visibility;
    pub mod driver;
    pub mod mount;
    pub mod component;

    pub use component::AnimatedCounter;
}
mod components {
    pub mod faq;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod pricing;
    pub mod reconcile;
}

use pages::{
    home::Home,
    pricing::Pricing,
    reconcile::{ReconcileCreate, ReconcileList},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/reconcile/new")]
    ReconcileCreate,
    #[at("/reconcile")]
    ReconcileList,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::ReconcileCreate => {
            info!("Rendering ReconcileCreate page");
            html! { <ReconcileCreate /> }
        },
        Route::ReconcileList => {
            info!("Rendering ReconcileList page");
            html! { <ReconcileList /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            }
        },
    }
}

/// Scroll offset after which the nav switches to its solid background.
const NAV_SCROLL_THRESHOLD: i32 = 80;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub logged_in: bool,
    pub on_logout: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { logged_in, on_logout } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let handle_logout = {
        let on_logout = on_logout.clone();
        Callback::from(move |_| {
            on_logout.emit(());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"));

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Innovate Books"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Pricing} classes="nav-link">
                            {"Pricing"}
                        </Link<Route>>
                    </div>
                    {
                        if *logged_in {
                            html! {
                                <>
                                    <div onclick={close_menu.clone()}>
                                        <Link<Route> to={Route::ReconcileCreate} classes="nav-link">
                                            {"Reconcile"}
                                        </Link<Route>>
                                    </div>
                                    <button onclick={
                                        let close = close_menu.clone();
                                        let logout = handle_logout.clone();
                                        Callback::from(move |e: MouseEvent| {
                                            close.emit(e);
                                            logout.emit(());
                                        })
                                    } class="nav-logout-button">
                                        {"Logout"}
                                    </button>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 10;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(15, 23, 42, 0.95);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #e2e8f0;
                    text-decoration: none;
                }
                .nav-logout-button {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 6px;
                    padding: 0.4rem 1rem;
                    color: #e2e8f0;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem 2rem;
                        background: rgba(15, 23, 42, 0.98);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let logged_in = use_state(session::is_logged_in);
    let handle_logout = {
        Callback::from(move |_| {
            session::clear_token();
            if let Some(window) = window() {
                // Reload the page to reflect the logged out state
                let _ = window.location().reload();
            }
        })
    };

    html! {
        <BrowserRouter>
            <Nav logged_in={*logged_in} on_logout={handle_logout} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting Innovate Books site");
    yew::Renderer::<App>::new().render();
}
