pub mod backend_url;
pub mod footer;
pub mod navbar;
pub mod navigation;

use leptos::prelude::*;

use footer::Footer;
use navbar::Navbar;

/// Persistent page frame. The navbar and footer stay mounted across
/// navigations; only `children` (the routed page) is swapped.
///
/// ```text
/// +------------------------------+
/// |           Navbar             |
/// +------------------------------+
/// |        routed page           |
/// +------------------------------+
/// |           Footer             |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
