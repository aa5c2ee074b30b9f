//! Transient, auto-dismissing notifications.
//!
//! `NotificationState` is the pure state machine: every `show` bumps a
//! generation and hands back a ticket, and `expire` only hides the notice if
//! its ticket is still the current one. A newer notice therefore cancels the
//! effect of any timer scheduled for an older one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

/// How long a notice stays visible.
pub const NOTICE_DURATION_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Info => "notice notice--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            text: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            text: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    current: Option<Notice>,
    generation: u64,
}

impl NotificationState {
    /// Makes `notice` visible, replacing any current one. Returns the ticket
    /// its expiry timer must present.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation += 1;
        self.current = Some(notice);
        self.generation
    }

    /// Hides the notice if `ticket` still belongs to it. Returns whether
    /// anything was hidden.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn visible(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// Context handle used by pages to raise notices.
#[derive(Clone, Copy)]
pub struct NotificationService {
    state: RwSignal<NotificationState>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NotificationState::default()),
        }
    }

    pub fn show(&self, notice: Notice) {
        debug!("notice: {:?} {}", notice.kind, notice.title);
        let mut ticket = 0;
        self.state.update(|s| ticket = s.show(notice));

        let state = self.state;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DURATION_MS).await;
            state.update(|s| {
                s.expire(ticket);
            });
        });
    }

    pub fn success(&self, title: impl Into<String>) {
        self.show(Notice::success(title));
    }

    pub fn error(&self, title: impl Into<String>, text: impl Into<String>) {
        self.show(Notice::error(title).with_text(text));
    }

    pub fn dismiss(&self) {
        self.state.update(NotificationState::dismiss);
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the visible notice, if any. Mount once near the root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        {move || {
            service.state.with(|s| s.visible().cloned()).map(|notice| {
                view! {
                    <div class=notice.kind.css_class() role="alert" on:click=move |_| service.dismiss()>
                        <strong class="notice__title">{notice.title}</strong>
                        {notice.text.map(|text| view! { <p class="notice__text">{text}</p> })}
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_notice_expires_with_its_ticket() {
        let mut state = NotificationState::default();
        let ticket = state.show(Notice::success("Account created successfully!"));
        assert_eq!(
            state.visible().map(|n| n.title.as_str()),
            Some("Account created successfully!")
        );

        assert!(state.expire(ticket));
        assert_eq!(state.visible(), None);
    }

    #[test]
    fn superseded_timer_does_not_hide_newer_notice() {
        let mut state = NotificationState::default();
        let first = state.show(Notice::error("Passwords do not match"));
        let second = state.show(Notice::success("Account created successfully!"));

        assert!(!state.expire(first));
        assert_eq!(state.visible().map(|n| n.kind), Some(NoticeKind::Success));

        assert!(state.expire(second));
        assert_eq!(state.visible(), None);
    }

    #[test]
    fn expiring_twice_or_after_dismiss_is_a_no_op() {
        let mut state = NotificationState::default();
        let ticket = state.show(Notice::info("Link sent"));
        state.dismiss();
        assert!(!state.expire(ticket));

        let ticket = state.show(Notice::info("again"));
        assert!(state.expire(ticket));
        assert!(!state.expire(ticket));
    }

    #[test]
    fn each_kind_has_its_own_style() {
        let info = Notice::info("You are logged out").with_text("See you soon!");
        assert_eq!(info.kind.css_class(), "notice notice--info");
        assert_eq!(Notice::success("ok").kind.css_class(), "notice notice--success");
        assert_eq!(Notice::error("no").kind.css_class(), "notice notice--error");
    }

    #[test]
    fn error_notice_carries_text() {
        let notice = Notice::error("Registration failed").with_text("The email used is already in use");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text.as_deref(), Some("The email used is already in use"));
    }
}
