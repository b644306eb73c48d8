use crate::shop::Tab;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/catalog")]
    Catalog,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_tab(tab: Tab) -> Self {
        match tab {
            Tab::Home => Self::Home,
            Tab::Catalog => Self::Catalog,
        }
    }

    /// Tab shown for this route. `None` keeps the current tab (404).
    #[must_use]
    pub const fn to_tab(&self) -> Option<Tab> {
        match self {
            Self::Home => Some(Tab::Home),
            Self::Catalog => Some(Tab::Catalog),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_round_trip_through_routes() {
        for tab in Tab::ALL {
            assert_eq!(Route::from_tab(tab).to_tab(), Some(tab));
        }
        assert_eq!(Route::NotFound.to_tab(), None);
    }

    #[test]
    fn routes_render_expected_paths() {
        assert_eq!(Route::Catalog.to_path(), "/catalog");
        assert_eq!(Route::recognize("/catalog"), Some(Route::Catalog));
        assert_eq!(Route::Home.to_path(), "/");
    }
}
