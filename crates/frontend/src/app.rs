use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::usecases::u501_select_filters::FilterContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Locale and catalog cache for the whole app.
    provide_context(AppGlobalContext::new());

    // Filter workflow state (store + edit session + confirmation).
    provide_context(FilterContext::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
