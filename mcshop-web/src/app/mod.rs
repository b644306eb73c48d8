use crate::router::Route;
use crate::shop::Tab;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod handlers;
pub mod routing;
pub mod state;
pub mod view;

pub use handlers::{AppHandlers, CartAction, CartOutcome, cart_action_outcome};

#[derive(Properties, PartialEq, Clone, Default)]
pub struct ShellProps {
    /// Current location, `None` before the router resolves it
    #[prop_or_default]
    pub route: Option<Route>,
    /// Called when a tab change should update the location
    #[prop_or_default]
    pub on_navigate: Callback<Route>,
}

/// Tab to open with on first render. Unknown paths start on the home tab.
#[must_use]
pub fn initial_tab_for(route: Option<&Route>) -> Tab {
    route.and_then(Route::to_tab).unwrap_or_default()
}

/// Router-independent shop shell. Owns all view state.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let app_state = state::use_app_state(initial_tab_for(props.route.as_ref()));

    #[cfg(target_arch = "wasm32")]
    routing::use_sync_tab_with_route(&app_state.shop, props.route.clone());

    view::render_app(&app_state, props.route.as_ref(), &props.on_navigate)
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let on_navigate = Callback::from(move |target: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&target);
        }
    });

    html! { <Shell route={route} on_navigate={on_navigate} /> }
}
