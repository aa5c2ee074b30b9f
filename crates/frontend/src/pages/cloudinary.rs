use contracts::cloudinary::UploadResponse;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use super::general::NewPostForm;
use crate::api::cloudinary::upload_image;
use crate::config::{AppConfig, CloudinaryConfig};
use crate::shared::notification::use_notifications;
use crate::store::use_store;

/// Whether the upload at `url` is the one currently being turned into a post.
fn is_publishing(selected: Option<&str>, url: &str) -> bool {
    selected == Some(url)
}

#[component]
pub fn Cloudinary() -> impl IntoView {
    let cloudinary = use_context::<AppConfig>().and_then(|c| c.cloudinary);

    match cloudinary {
        Some(config) => view! { <Gallery config=config /> }.into_any(),
        None => view! {
            <section class="gallery">
                <h1>"Gallery"</h1>
                <p class="muted">
                    "Image uploads are not configured. Rebuild with CLOUDINARY_CLOUD_NAME and CLOUDINARY_UPLOAD_PRESET set."
                </p>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn Gallery(config: CloudinaryConfig) -> impl IntoView {
    let store = use_store();
    let config = StoredValue::new(config);
    let notifications = use_notifications();
    let file_input = NodeRef::<Input>::new();

    let uploads = RwSignal::new(Vec::<UploadResponse>::new());
    let publishing = RwSignal::new(Option::<String>::None);
    let is_uploading = RwSignal::new(false);

    let on_upload = move |_: leptos::ev::MouseEvent| {
        let config = config.get_value();
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            notifications.error("No image selected", "Pick an image file first.");
            return;
        };

        is_uploading.set(true);
        spawn_local(async move {
            match upload_image(&config, &file).await {
                Ok(uploaded) => {
                    info!("uploaded {}", uploaded.public_id);
                    uploads.update(|u| u.insert(0, uploaded));
                    notifications.success("Image uploaded!");
                }
                Err(e) => {
                    warn!("upload failed: {}", e);
                    notifications.error("Upload failed", e.to_string());
                }
            }
            is_uploading.set(false);
        });
    };

    let logged_in = move || store.session.with(|s| s.is_authenticated());

    view! {
        <section class="gallery">
            <h1>"Gallery"</h1>
            <div class="gallery__upload">
                <input type="file" accept="image/*" node_ref=file_input />
                <thaw::Button
                    appearance=thaw::ButtonAppearance::Primary
                    disabled=is_uploading
                    on_click=on_upload
                >
                    {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
                </thaw::Button>
            </div>

            <div class="post-grid">
                <For
                    each=move || uploads.get()
                    key=|u: &UploadResponse| u.public_id.clone()
                    children=move |u: UploadResponse| {
                        let url = StoredValue::new(u.secure_url.clone());
                        let selected = move || {
                            publishing.with(|p| url.with_value(|url| is_publishing(p.as_deref(), url)))
                        };
                        view! {
                            <div class="gallery__item">
                                <img src=u.secure_url alt=u.public_id />
                                <Show when=logged_in>
                                    <button
                                        class="button button--ghost"
                                        on:click=move |_| publishing.set(Some(url.get_value()))
                                    >
                                        "Publish as post"
                                    </button>
                                </Show>
                                <Show when=selected>
                                    <NewPostForm
                                        photo=url.get_value()
                                        on_created=move |_: ()| publishing.set(None)
                                    />
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_chosen_upload_opens_the_post_form() {
        let chosen = "https://res.cloudinary.com/demo/image/upload/a.png";
        let other = "https://res.cloudinary.com/demo/image/upload/b.png";

        assert!(is_publishing(Some(chosen), chosen));
        assert!(!is_publishing(Some(chosen), other));
        assert!(!is_publishing(None, chosen));
    }
}
