// src/modules/skill/adapter/incoming/web/views.rs
use leptos::prelude::*;

use crate::modules::content::adapter::incoming::web::dashboard_routes::DashboardSection;
use crate::modules::content::adapter::incoming::web::views::{entry_controls, text_field};
use crate::modules::skill::domain::entities::{Skill, SkillCategory, SkillForm};
use crate::shared::state::{Keyed, LoadState, SectionList};
use crate::shared::view::widgets::{empty_state, reveal, TitleSection};
use crate::shared::view::DashboardTab;

fn skill_item(skill: &Skill) -> impl IntoView {
    let brand = skill.brand();
    let icon = format!("skill-icon {}", brand.icon);
    let style = format!("color: {}", brand.color);
    let name = skill.name.clone();

    view! {
        <li class="skill-item">
            <i class=icon style=style></i>
            <span>{name}</span>
        </li>
    }
}

fn skill_group(category: SkillCategory, skills: Vec<&Skill>) -> impl IntoView {
    let icon = category.icon();
    let items = skills.into_iter().map(skill_item).collect_view();

    view! {
        <div class="skill-group">
            <h3 class="skill-group-title">
                <i class=icon></i>
                " "
                {category.as_str()}
            </h3>
            <ul class="skill-list">{items}</ul>
        </div>
    }
}

/// Home page skills, grouped Frontend, Backend, Tools. Skills in any other
/// category are left out, as are groups with nothing in them.
pub fn skills_section(list: &SectionList<Skill>) -> AnyView {
    let content = match list.state() {
        LoadState::Failed(reason) => empty_state(reason.clone()).into_any(),
        _ if list.is_empty() => empty_state("No skills listed yet.".to_string()).into_any(),
        _ => SkillCategory::GROUPS
            .into_iter()
            .filter_map(|category| {
                let skills: Vec<&Skill> = list
                    .entries()
                    .iter()
                    .map(|e| &e.item)
                    .filter(|s| s.category == category)
                    .collect();
                (!skills.is_empty()).then(|| skill_group(category, skills))
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <section id="skills" class="section">
            <div class="container">
                <TitleSection heading="Skills" sub_heading="What I Work With"/>
                {reveal(view! { <div class="skill-groups">{content}</div> })}
            </div>
        </section>
    }
    .into_any()
}

impl DashboardSection for Skill {
    const SLUG: &'static str = "skills";
    const TITLE: &'static str = "Skills";
    const TAB: DashboardTab = DashboardTab::Skills;

    fn render_entries(entries: &[Keyed<Self>]) -> AnyView {
        let cards = entries
            .iter()
            .map(|entry| {
                let brand = entry.item.brand();
                let icon = format!("skill-icon {}", brand.icon);
                let style = format!("color: {}", brand.color);
                let name = entry.item.name.clone();
                let category = entry.item.category.as_str();
                view! {
                    <article class="card skill-card">
                        <div class="card-body">
                            <i class=icon style=style></i>
                            <h3 class="card-title">{name}</h3>
                            <span class="badge">{category}</span>
                            {entry_controls(Self::SLUG, entry.key)}
                        </div>
                    </article>
                }
            })
            .collect_view();
        view! { <div class="grid">{cards}</div> }.into_any()
    }

    fn render_fields(form: &SkillForm) -> AnyView {
        let current = form.category.clone();
        let options = SkillCategory::GROUPS
            .into_iter()
            .map(|category| {
                let value = category.as_str();
                let selected = current.eq_ignore_ascii_case(value);
                view! { <option value=value selected=selected>{value}</option> }
            })
            .collect_view();

        view! {
            {text_field("Name", "name", form.name.clone(), true)}
            <label class="form-field">
                <span>"Category"</span>
                <select name="category" required=true>
                    <option value="">"Select a category"</option>
                    {options}
                </select>
            </label>
        }
        .into_any()
    }

    fn summary(&self) -> String {
        format!("{} ({}) will be removed.", self.name, self.category)
    }
}
