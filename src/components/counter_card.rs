use leptos::prelude::*;

/// Counter markup, starting from `start`
#[component]
pub fn CounterCard(#[prop(default = 0)] start: i64) -> impl IntoView {
    view! {
        <section class="counter-card" data-counter-js-rsjs="">
            <span class="counter-label">"Clicks: "</span>
            <output data-counter-output="">{start.to_string()}</output>
            <button type="button" data-counter-increment="">"Increment"</button>
        </section>
    }
}
