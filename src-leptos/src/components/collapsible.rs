//! Collapsible panel component
//!
//! Binds [`collapsible_types::Panel`] to the DOM: the trigger click, the
//! inner node measurement, the post-render settle effect with its deferred
//! collapse, and `transitionend` on the outer content element.

use collapsible_types::{
    AccordionPosition, Lifecycle, Overflow, Panel, PanelConfig, TriggerIntent, COLLAPSE_DELAY_MS,
    DEFAULT_CLASS_PARENT, DEFAULT_EASING, DEFAULT_TRANSITION_TIME,
};
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{MouseEvent, TransitionEvent};

#[component]
pub fn Collapsible(
    /// Trigger content
    #[prop(into, optional)]
    trigger: ViewFn,
    /// Trigger content while open, replaces `trigger`
    #[prop(into, optional)]
    trigger_when_open: Option<ViewFn>,
    /// Non-interactive markup rendered next to the trigger
    #[prop(into, optional)]
    trigger_sibling: Option<ViewFn>,
    /// Animation duration in milliseconds
    #[prop(default = DEFAULT_TRANSITION_TIME)]
    transition_time: u32,
    /// CSS easing keyword
    #[prop(into, default = DEFAULT_EASING.to_string())]
    easing: String,
    /// Initial state; later changes open or close the panel
    #[prop(into, optional)]
    open: MaybeProp<bool>,
    #[prop(into, default = DEFAULT_CLASS_PARENT.to_string())]
    class_parent_string: String,
    /// Wrapper class while closed
    #[prop(into, optional)]
    class_name: String,
    /// Wrapper class while open
    #[prop(into, optional)]
    opened_class_name: String,
    #[prop(into, optional)]
    trigger_class_name: String,
    #[prop(into, optional)]
    trigger_opened_class_name: String,
    #[prop(into, optional)]
    content_outer_class_name: String,
    #[prop(into, optional)]
    content_inner_class_name: String,
    /// Token passed to `handle_trigger_click`
    #[prop(into, optional)]
    accordion_position: Option<AccordionPosition>,
    /// Takes over open/close decisions: clicks only call this handler
    #[prop(into, optional)]
    handle_trigger_click: Option<Callback<Option<AccordionPosition>>>,
    #[prop(into, optional)] on_open: Option<Callback<()>>,
    #[prop(into, optional)] on_close: Option<Callback<()>>,
    #[prop(into, optional)] on_opening: Option<Callback<()>>,
    #[prop(into, optional)] on_closing: Option<Callback<()>>,
    #[prop(optional)] trigger_disabled: bool,
    /// Render children only once the panel has been opened
    #[prop(optional)]
    lazy_render: bool,
    /// Overflow once settled open
    #[prop(optional)]
    overflow_when_open: Overflow,
    children: ChildrenFn,
) -> impl IntoView {
    let config = PanelConfig {
        transition_time,
        easing,
        open: open.get_untracked().unwrap_or(false),
        class_parent_string,
        class_name,
        opened_class_name,
        trigger_class_name,
        trigger_opened_class_name,
        content_outer_class_name,
        content_inner_class_name,
        accordion_position,
        trigger_disabled,
        lazy_render,
        overflow_when_open,
    }
    .sanitized();

    let panel =
        RwSignal::new(Panel::new(config).externally_controlled(handle_trigger_click.is_some()));
    let view_model = Memo::new(move |_| panel.with(Panel::view_model));
    let inner_ref = NodeRef::<html::Div>::new();

    let notify = move |phase: Lifecycle| {
        let callback = match phase {
            Lifecycle::Opening => on_opening,
            Lifecycle::Opened => on_open,
            Lifecycle::Closing => on_closing,
            Lifecycle::Closed => on_close,
        };
        if let Some(callback) = callback {
            callback.run(());
        }
    };

    // Natural height of the children; None until the node is attached.
    let measure = move || inner_ref.get_untracked().map(|el| f64::from(el.offset_height()));

    let finish_open = move || {
        if let Some(done) = panel.try_update(|p| p.begin_open(measure())).flatten() {
            notify(done);
        }
    };

    // Callbacks run outside of `update` so they may read the panel.
    let run = move |intent: TriggerIntent| match intent {
        TriggerIntent::Open => {
            notify(Lifecycle::Opening);
            if panel.with_untracked(Panel::renders_children) {
                finish_open();
            } else {
                // Lazy children must be mounted before they can be measured.
                panel.update(Panel::reveal_children);
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    finish_open();
                });
            }
        }
        TriggerIntent::Close => {
            notify(Lifecycle::Closing);
            if let Some(done) = panel.try_update(|p| p.begin_close(measure())).flatten() {
                notify(done);
            }
        }
        TriggerIntent::Ignored | TriggerIntent::Delegate(_) => {}
    };

    let on_trigger_click = move |ev: MouseEvent| {
        ev.prevent_default();
        match panel.with_untracked(Panel::trigger_intent) {
            TriggerIntent::Delegate(position) => {
                log::debug!("Collapsible: delegating click at {position:?}");
                if let Some(handler) = handle_trigger_click {
                    handler.run(position);
                }
            }
            intent => run(intent),
        }
    };

    // Follow the `open` input after mount.
    Effect::new(move |previous: Option<bool>| {
        let wanted = open.get().unwrap_or(false);
        if previous.is_some_and(|previous| previous != wanted) {
            if let Some(intent) = panel.with_untracked(|p| p.intent_for_open(wanted)) {
                run(intent);
            }
        }
        wanted
    });

    // Post-render settle: once the pinned height has been committed,
    // collapse to zero after a short delay.
    Effect::new(move |_| {
        panel.track();
        let Some(ticket) = panel.try_update_untracked(Panel::commit).flatten() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(COLLAPSE_DELAY_MS).await;
            if panel.try_update(|p| p.collapse(ticket)).is_none() {
                log::debug!("Collapsible: disposed before collapse");
            }
        });
    });

    let on_transition_end = move |ev: TransitionEvent| {
        // Ignore transitions bubbling up from the children.
        if ev.property_name() != "height" || ev.target() != ev.current_target() {
            return;
        }
        if let Some(done) = panel.try_update(Panel::handle_transition_end).flatten() {
            notify(done);
        }
    };

    let trigger_content = move || match &trigger_when_open {
        Some(when_open) if view_model.with(|v| v.use_open_trigger) => when_open.run(),
        _ => trigger.run(),
    };

    let sibling_class = view_model.with_untracked(|v| v.sibling_class.clone());

    view! {
        <div class=move || view_model.with(|v| v.wrapper_class.clone())>
            <span
                class=move || view_model.with(|v| v.trigger_class.clone())
                on:click=on_trigger_click
            >
                {trigger_content}
            </span>
            {trigger_sibling.map(|sibling| view! {
                <span class=sibling_class>{sibling.run()}</span>
            })}
            <div
                class=move || view_model.with(|v| v.content_outer_class.clone())
                style=move || view_model.with(|v| v.style.to_css())
                on:transitionend=on_transition_end
            >
                <div
                    class=move || view_model.with(|v| v.content_inner_class.clone())
                    node_ref=inner_ref
                >
                    <Show when=move || view_model.with(|v| v.render_children)>
                        {children()}
                    </Show>
                </div>
            </div>
        </div>
    }
}
