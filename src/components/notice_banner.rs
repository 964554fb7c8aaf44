//! Dismissable notice stack.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Renders the current notices; each one dismisses itself after
/// `AUTO_DISMISS_MS` in the browser.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    {
        let scheduled = StoredValue::new(0_u64);
        Effect::new(move || {
            let floor = scheduled.get_value();
            let fresh: Vec<u64> = notices.with(|n| n.items.iter().map(|notice| notice.id).filter(|id| *id > floor).collect());
            let Some(newest) = fresh.iter().copied().max() else {
                return;
            };
            scheduled.set_value(newest);
            for id in fresh {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(crate::state::notice::AUTO_DISMISS_MS).await;
                    let _ = notices.try_update(|n| n.dismiss(id));
                });
            }
        });
    }

    let items = move || {
        notices
            .get()
            .items
            .into_iter()
            .map(|notice| {
                let id = notice.id;
                view! {
                    <div class=format!("notice {}", notice.level.css_modifier()) role="status">
                        <span class="notice__message">{notice.message}</span>
                        <button
                            class="notice__dismiss"
                            title="Dismiss"
                            on:click=move |_| notices.update(|n| n.dismiss(id))
                        >
                            "×"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! { <div class="notice-banner">{items}</div> }
}
