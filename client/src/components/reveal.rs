//! Wrapper that plays an [`AnimatedReveal`] on its children.

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::reveal::{AnimatedReveal, RevealLatch};

/// Renders `children` hidden in the reveal's starting pose and transitions
/// them in when the trigger fires.
#[component]
pub fn Reveal(reveal: AnimatedReveal, #[prop(into)] base_class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let shown = RwSignal::new(false);
    let latch = StoredValue::new(RevealLatch::new(reveal.play_once));

    // Returns whether the element still needs trigger observations.
    let trigger = move |visible: bool| -> bool {
        let mut settled = false;
        latch.update_value(|l| {
            if let Some(next) = l.observe(visible) {
                shown.set(next);
            }
            settled = l.is_settled();
        });
        !settled
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::util::reveal::RevealTrigger;

        let Some(el) = node.get() else {
            return;
        };
        match reveal.trigger {
            // Wait a frame so the hidden pose is painted before transitioning.
            RevealTrigger::OnMount => request_animation_frame(move || {
                trigger(true);
            }),
            RevealTrigger::OnScrollIntoView => {
                if let Err(e) = crate::util::viewport::observe_visibility(&el, trigger) {
                    log::warn!("visibility observer unavailable, revealing immediately: {e:?}");
                    trigger(true);
                }
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = trigger;

    view! {
        <div
            node_ref=node
            class=move || format!("{base_class} {}", reveal.class(shown.get()))
            style=reveal.style()
        >
            {children()}
        </div>
    }
}
