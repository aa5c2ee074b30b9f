use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::navigation::ScrollToTop;
use crate::layout::Shell;
use crate::pages::{
    cloudinary::Cloudinary, forum::Forum, general::General, home::Home, login::LoginPage,
    not_found::NotFound, profile::Profile, profile_page::ProfilePage, profiles::Profiles,
    restore_password::RestorePassword, signup::SignupPage, single::Single,
};

#[component]
pub fn AppRoutes(#[prop(into)] basename: String) -> impl IntoView {
    view! {
        <Router base=basename>
            <ScrollToTop />
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/home") view=Home />
                    <Route path=path!("/general") view=General />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/cloudinary") view=Cloudinary />
                    <Route path=path!("/restorePassword/:uuid") view=RestorePassword />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/yourprofile") view=ProfilePage />
                    <Route path=path!("/forum") view=Forum />
                    <Route path=path!("/profiles") view=Profiles />
                    <Route path=path!("/profile") view=Profile />
                    <Route path=path!("/profilepage") view=ProfilePage />
                    <Route path=path!("/single/:theid") view=Single />
                </Routes>
            </Shell>
        </Router>
    }
}
