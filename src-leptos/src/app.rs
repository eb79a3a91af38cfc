//! Demo App component

use crate::components::Collapsible;
use crate::demo::{accordion_items, AccordionItem};
use collapsible_types::{AccordionPosition, Overflow};
use leptos::prelude::*;

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    let last_event = RwSignal::new(String::from("none yet"));
    let record = move |event: &'static str| {
        Callback::new(move |()| {
            log::info!("Collapsible event: {event}");
            last_event.set(event.to_string());
        })
    };

    view! {
        <main class="demo">
            <h1>"Collapsible"</h1>
            <p class="demo-status">"Last event: " {move || last_event.get()}</p>

            <Collapsible
                trigger=|| "Show"
                trigger_when_open=|| "Hide"
                transition_time=300
                easing="ease"
                on_opening=record("opening")
                on_open=record("open")
                on_closing=record("closing")
                on_close=record("close")
            >
                <p>"The trigger text switches once the panel is open."</p>
            </Collapsible>

            <Collapsible trigger=|| "Lazy panel" lazy_render=true>
                <p>"Mounted on first open, kept mounted afterwards."</p>
            </Collapsible>

            <Collapsible
                trigger=|| "Open on load"
                open=true
                overflow_when_open=Overflow::Visible
                trigger_sibling=|| view! { <em>"(with a sibling)"</em> }
            >
                <p>"Starts open with visible overflow."</p>
            </Collapsible>

            <Collapsible trigger=|| "Disabled" trigger_disabled=true>
                <p>"Never shown."</p>
            </Collapsible>

            <h2>"Accordion"</h2>
            <Accordion items=accordion_items() />
        </main>
    }
}

/// Panels where at most one is open. The panels delegate clicks here and
/// follow `active` through their `open` input.
#[component]
fn Accordion(items: Vec<AccordionItem>) -> impl IntoView {
    let active = RwSignal::new(None::<usize>);

    let on_select = Callback::new(move |position: Option<AccordionPosition>| {
        let Some(AccordionPosition::Index(index)) = position else {
            log::warn!("Accordion: click without an index position");
            return;
        };
        let index = usize::try_from(index).ok();
        active.update(|current| {
            *current = if *current == index { None } else { index };
        });
    });

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let AccordionItem { title, body, config } = item;
            view! {
                <Collapsible
                    trigger=move || title.clone()
                    open=Signal::derive(move || Some(active.get() == Some(index)))
                    accordion_position=index
                    handle_trigger_click=on_select
                    transition_time=config.transition_time
                    easing=config.easing
                    lazy_render=config.lazy_render
                    overflow_when_open=config.overflow_when_open
                    class_parent_string="Accordion"
                >
                    <p>{body.clone()}</p>
                </Collapsible>
            }
        })
        .collect_view()
}
