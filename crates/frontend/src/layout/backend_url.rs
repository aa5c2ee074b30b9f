use leptos::prelude::*;

/// Shown instead of the app when the bundle was built without `BACKEND_URL`.
#[component]
pub fn BackendUrlSetup() -> impl IntoView {
    view! {
        <div class="setup-guide">
            <h1>"Missing BACKEND_URL"</h1>
            <p>"The PetStar frontend does not know which backend to talk to."</p>
            <ol>
                <li>"Start the backend and note the URL it listens on, e.g. "<code>"http://localhost:3001"</code>"."</li>
                <li>"Rebuild the frontend with the variable set: "<code>"BACKEND_URL=http://localhost:3001 trunk serve"</code>"."</li>
                <li>"If the app is served from a subdirectory, also set "<code>"BASENAME"</code>", e.g. "<code>"BASENAME=/petstar"</code>"."</li>
            </ol>
            <p>"Image uploads additionally need "<code>"CLOUDINARY_CLOUD_NAME"</code>" and "<code>"CLOUDINARY_UPLOAD_PRESET"</code>"."</p>
        </div>
    }
}
