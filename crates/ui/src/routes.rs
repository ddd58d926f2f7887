use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use screening_core::model::Navigation;

use crate::views::{DashboardView, LoadingView, ScreeningFormView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ScreeningFormView)] Screening {},
        #[route("/loading", LoadingView)] Loading {},
        #[route("/dashboard", DashboardView)] Dashboard {},
}

impl From<Navigation> for Route {
    fn from(navigation: Navigation) -> Self {
        match navigation {
            Navigation::Loading => Route::Loading {},
            Navigation::Dashboard => Route::Dashboard {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "brand", to: Route::Screening {}, "Developmental Screening" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_targets_map_to_routes() {
        assert_eq!(Route::from(Navigation::Loading).to_string(), "/loading");
        assert_eq!(Route::from(Navigation::Dashboard).to_string(), "/dashboard");
    }
}
