use crate::router::Route;
use crate::shop::Tab;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Route to push after selecting `tab`, or `None` when already there.
#[must_use]
pub fn next_route_for_tab(tab: Tab, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_tab(tab);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

/// Tab to show after the location changed. `None` keeps the current tab.
#[must_use]
pub fn next_tab_for_route(current_tab: Tab, route: Option<&Route>) -> Option<Tab> {
    let new_tab = route.and_then(Route::to_tab)?;
    (new_tab != current_tab).then_some(new_tab)
}

/// Keep the shop's tab in step with browser history (back/forward, typed URLs).
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_tab_with_route(
    shop: &UseStateHandle<crate::shop::ShopState>,
    route: Option<Route>,
) {
    let shop = shop.clone();
    use_effect_with(route, move |route| {
        if let Some(tab) = next_tab_for_route(shop.tab, route.as_ref()) {
            let mut next = (*shop).clone();
            next.select_tab(tab);
            shop.set(next);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_route_for_tab_skips_when_unchanged() {
        assert!(next_route_for_tab(Tab::Catalog, Some(&Route::Catalog)).is_none());
        assert_eq!(next_route_for_tab(Tab::Home, None), Some(Route::Home));
        assert_eq!(
            next_route_for_tab(Tab::Home, Some(&Route::NotFound)),
            Some(Route::Home)
        );
    }

    #[test]
    fn next_tab_for_route_only_reports_changes() {
        assert_eq!(
            next_tab_for_route(Tab::Home, Some(&Route::Catalog)),
            Some(Tab::Catalog)
        );
        assert!(next_tab_for_route(Tab::Home, Some(&Route::Home)).is_none());
        assert!(next_tab_for_route(Tab::Catalog, Some(&Route::NotFound)).is_none());
        assert!(next_tab_for_route(Tab::Catalog, None).is_none());
    }
}
