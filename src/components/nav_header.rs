//! Navigation Header Component
//!
//! App title, links to the editor and the saved designs list, and the theme
//! toggle.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::ThemeToggle;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Editor,
    Saved,
}

impl NavLocation {
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Editor => "Editor",
            NavLocation::Saved => "Saved Designs",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Editor => Route::Editor {
                edit: String::new(),
            },
            NavLocation::Saved => Route::Gallery {},
        }
    }
}

#[component]
pub fn NavHeader(current: NavLocation) -> Element {
    let locations = [NavLocation::Editor, NavLocation::Saved];

    rsx! {
        header { class: "nav-header",
            span { class: "nav-title", "CardGen" }
            nav { class: "nav-links",
                for location in locations {
                    Link {
                        key: "{location.display_name()}",
                        class: if location == current { "nav-link nav-link--active" } else { "nav-link" },
                        to: location.route(),
                        "{location.display_name()}"
                    }
                }
            }
            ThemeToggle {}
        }
    }
}
