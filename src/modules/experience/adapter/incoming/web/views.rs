// src/modules/experience/adapter/incoming/web/views.rs
use leptos::prelude::*;

use crate::modules::content::adapter::incoming::web::dashboard_routes::DashboardSection;
use crate::modules::content::adapter::incoming::web::views::{
    area_field, entry_controls, text_field, typed_field,
};
use crate::modules::experience::domain::entities::{Experience, ExperienceForm};
use crate::shared::forms::checkbox;
use crate::shared::state::{Keyed, LoadState, SectionList, Visibility};
use crate::shared::view::widgets::{empty_state, month_year, reveal, show_toggle, TitleSection};
use crate::shared::view::DashboardTab;

/// `Jan 2024 - Present` style range.
pub fn date_range(experience: &Experience) -> String {
    let start = experience
        .start_date
        .as_deref()
        .map(month_year)
        .unwrap_or_default();
    let end = if experience.is_current {
        "Present".to_string()
    } else {
        experience
            .end_date
            .as_deref()
            .map(month_year)
            .unwrap_or_default()
    };
    format!("{} - {}", start, end)
}

fn experience_item(experience: &Experience, controls: Option<AnyView>) -> impl IntoView {
    let title = experience.title.clone();
    let employer = format!("{} - {}", experience.company, experience.position);
    let range = date_range(experience);
    let description = experience.description.clone();
    let location = format!("Location: {}", experience.location);
    let technologies = format!("Technologies: {}", experience.technologies_line());
    let certificate = experience.certificate_img.clone().map(|href| {
        view! {
            <a class="card-link" href=href target="_blank" rel="noopener noreferrer">
                <i class="fa-solid fa-certificate"></i>
                " Certificate"
            </a>
        }
    });

    view! {
        <article class="timeline-item">
            <span class="timeline-dot"></span>
            <div class="card timeline-card">
                <h3 class="card-title">{title}</h3>
                <p class="card-subtitle">{employer}</p>
                <p class="card-date">{range}</p>
                <p class="card-text">{description}</p>
                <p class="card-meta">{location}</p>
                <p class="card-meta">{technologies}</p>
                {certificate}
                {controls}
            </div>
        </article>
    }
}

pub fn experience_listing(list: &SectionList<Experience>, limit: usize, expanded: bool) -> AnyView {
    let content = match list.state() {
        LoadState::Failed(reason) => empty_state(reason.clone()).into_any(),
        _ if list.is_empty() => empty_state("No experience listed yet.".to_string()).into_any(),
        _ => {
            let items = list
                .visible(Visibility::from_toggle(limit, expanded))
                .iter()
                .map(|entry| experience_item(&entry.item, None))
                .collect_view();
            view! { <div class="timeline">{items}</div> }.into_any()
        }
    };
    let toggle = show_toggle(
        list.has_more_than(limit),
        expanded,
        ("View All Experience", "/?experience=all#experience".to_string()),
        ("Hide Experience", "/#experience".to_string()),
    );

    view! {
        <section id="experience" class="section">
            <div class="container">
                <TitleSection heading="My Experiences" sub_heading="Where I've worked"/>
                {reveal(content)}
                {toggle}
            </div>
        </section>
    }
    .into_any()
}

impl DashboardSection for Experience {
    const SLUG: &'static str = "experience";
    const TITLE: &'static str = "Experience";
    const TAB: DashboardTab = DashboardTab::Experience;

    fn render_entries(entries: &[Keyed<Self>]) -> AnyView {
        let items = entries
            .iter()
            .map(|entry| experience_item(&entry.item, Some(entry_controls(Self::SLUG, entry.key))))
            .collect_view();
        view! { <div class="timeline">{items}</div> }.into_any()
    }

    fn render_fields(form: &ExperienceForm) -> AnyView {
        let current = checkbox(&form.is_current);

        view! {
            {text_field("Title", "title", form.title.clone(), true)}
            {text_field("Company", "company", form.company.clone(), true)}
            {text_field("Position", "position", form.position.clone(), false)}
            <div class="form-row">
                {typed_field("Start Date", "start_date", "date", form.start_date.clone())}
                {typed_field("End Date", "end_date", "date", form.end_date.clone())}
            </div>
            <label class="form-check">
                <input type="checkbox" name="is_current" value="on" checked=current/>
                <span>"Current Job (end date is ignored)"</span>
            </label>
            {area_field("Description", "description", form.description.clone(), false)}
            {text_field("Technologies (comma separated)", "technologies", form.technologies.clone(), false)}
            {text_field("Location", "location", form.location.clone(), false)}
            {typed_field("Certificate Image URL", "certificate_img", "url", form.certificate_img.clone())}
        }
        .into_any()
    }

    fn summary(&self) -> String {
        format!("{} at {} will be removed.", self.title, self.company)
    }
}
