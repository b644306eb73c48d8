use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="shop-footer">
            <p class="brand-line">{ t("footer.copyright") }</p>
            <p class="muted">{ t("footer.tagline") }</p>
        </footer>
    }
}
