use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::add_item_dialog::AddItemDialog;
use crate::components::ui::cart_sheet::CartSheet;
use crate::pages::catalog::CatalogPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use crate::shop::Tab;
use yew::prelude::*;

fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    if matches!(route, Some(Route::NotFound)) {
        let go_home = {
            let cb = handlers.select_tab.clone();
            Callback::from(move |()| cb.emit(Tab::Home))
        };
        return html! { <NotFound on_go_home={go_home} /> };
    }

    match state.shop.tab {
        Tab::Home => {
            let view_catalog = {
                let cb = handlers.select_tab.clone();
                Callback::from(move |()| cb.emit(Tab::Catalog))
            };
            html! {
                <HomePage
                    popular={state.config.popular(state.catalog).to_vec()}
                    on_add={handlers.add_to_cart.clone()}
                    on_view_catalog={view_catalog}
                    on_sell={handlers.open_add_item.clone()} />
            }
        }
        Tab::Catalog => {
            let items = state
                .shop
                .visible_items(state.catalog)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            html! {
                <CatalogPage
                    items={items}
                    filter={state.shop.filter.clone()}
                    categories={state.config.category_order.clone()}
                    on_add={handlers.add_to_cart.clone()}
                    on_search={handlers.search.clone()}
                    on_category={handlers.category.clone()} />
            }
        }
    }
}

pub fn render_app(state: &AppState, route: Option<&Route>, on_navigate: &Callback<Route>) -> Html {
    let handlers = AppHandlers::new(state, route, on_navigate);
    let main_view = render_main_view(state, &handlers, route);
    let lang = (*state.current_language).clone();

    // Keyed on the language so every label re-renders after a switch.
    html! {
        <div class="shop-app" key={lang.clone()}>
            <Header
                active_tab={state.shop.tab}
                cart_count={state.cart_count()}
                on_select_tab={handlers.select_tab.clone()}
                on_open_add={handlers.open_add_item.clone()}
                on_open_cart={handlers.open_cart.clone()}
                current_lang={lang}
                on_lang_change={handlers.lang_change.clone()}
                high_contrast={*state.high_contrast}
                on_toggle_hc={handlers.toggle_hc.clone()} />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { main_view }
            </main>
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
            <CartSheet
                open={*state.cart_open}
                cart={state.shop.cart.clone()}
                on_close={handlers.close_cart.clone()}
                on_update_quantity={handlers.update_quantity.clone()}
                on_remove={handlers.remove_from_cart.clone()}
                on_checkout={handlers.checkout.clone()} />
            <AddItemDialog
                open={*state.add_item_open}
                draft={(*state.draft).clone()}
                error={(*state.draft_error).clone()}
                on_change={handlers.draft_change.clone()}
                on_submit={handlers.submit_draft.clone()}
                on_close={handlers.close_add_item.clone()}
                return_focus_id={Some((*state.add_item_focus).clone())} />
            <Footer />
        </div>
    }
}
