//! Thaw `Card` that fades in when mounted.
//!
//! The `card-appear` keyframes come with the widget stylesheet.
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=0 title="Tổng quan">...</CardAnimated>
//! <CardAnimated delay_ms=80>...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay, used to stagger sibling cards
    #[prop(optional)]
    delay_ms: u32,
    /// Optional heading rendered above the content
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra inline styles appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = format!(
        "animation: card-appear 0.28s ease-out {}ms both; {}",
        delay_ms, style
    );

    view! {
        <Card attr:style=full_style>
            {title.map(|t| view! { <div class="card__title">{t}</div> })}
            {children()}
        </Card>
    }
}
