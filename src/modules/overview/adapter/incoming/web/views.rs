use leptos::prelude::*;

use crate::modules::overview::domain::entities::Overview;
use crate::shared::view::widgets::{empty_state, TitleSection};

fn overview_card(title: &'static str, count: u64, icon: &'static str) -> impl IntoView {
    view! {
        <div class="overview-card">
            <div class="overview-figures">
                <span class="overview-title">{title}</span>
                <span class="overview-count">{count.to_string()}</span>
            </div>
            <div class="overview-icon">
                <i class=icon></i>
            </div>
        </div>
    }
}

/// Six count cards, or an empty state when the counts could not be loaded.
pub fn overview_page(overview: Option<Overview>) -> impl IntoView {
    let content = match overview {
        Some(overview) => {
            let cards = overview
                .cards()
                .into_iter()
                .map(|(title, count, icon)| overview_card(title, count, icon))
                .collect_view();
            view! { <div class="overview-grid">{cards}</div> }.into_any()
        }
        None => empty_state("No data found 😔".to_string()).into_any(),
    };

    view! {
        <section class="dashboard-section">
            <TitleSection heading="Dashboard Overview" sub_heading="Admin Dashboard"/>
            {content}
        </section>
    }
}
