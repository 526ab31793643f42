// src/modules/content/adapter/incoming/web/views.rs
//
// Dashboard frames shared by every section: the list toolbar, the
// create/edit form wrapper and the delete confirmation.

use leptos::prelude::*;

use super::dashboard_routes::{DashboardSection, FormMode};
use crate::shared::state::{LoadState, RecordKey, SectionList};
use crate::shared::view::widgets::{confirm_prompt, empty_state};

pub fn list_url(slug: &str) -> String {
    format!("/dashboard/{}", slug)
}

/// Edit and delete links for a stored entry. Entries still under a
/// temporary key get a marker instead, since there is no id to target.
pub fn entry_controls(slug: &'static str, key: RecordKey) -> AnyView {
    match key.persisted_id() {
        Some(id) => {
            let edit = format!("/dashboard/{}/{}/edit", slug, id);
            let delete = format!("/dashboard/{}/{}/delete", slug, id);
            view! {
                <div class="card-actions">
                    <a class="btn btn-small" href=edit>
                        <i class="fa-solid fa-pen"></i>
                        " Edit"
                    </a>
                    <a class="btn btn-small btn-danger" href=delete>
                        <i class="fa-solid fa-trash"></i>
                        " Delete"
                    </a>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="card-actions">
                <span class="pending-tag">"Saved. Refresh to manage this entry."</span>
            </div>
        }
        .into_any(),
    }
}

pub fn section_page<R: DashboardSection>(list: &SectionList<R>) -> impl IntoView {
    let refresh = format!("{}?refresh=1", list_url(R::SLUG));
    let add = R::EDITABLE.then(|| {
        let href = format!("/dashboard/{}/new", R::SLUG);
        let text = format!("Add {}", R::LABEL);
        view! {
            <a class="btn btn-solid" href=href>
                <i class="fa-solid fa-plus"></i>
                " "
                {text}
            </a>
        }
    });

    let content = match list.state() {
        LoadState::Failed(reason) => empty_state(reason.clone()).into_any(),
        _ if list.is_empty() => empty_state(format!("No {} yet.", R::TITLE.to_lowercase())).into_any(),
        _ => R::render_entries(list.entries()),
    };

    view! {
        <section class="dashboard-section">
            <div class="dashboard-toolbar">
                <h1>{R::TITLE}</h1>
                <div class="card-links">
                    <a class="btn btn-muted" href=refresh>
                        <i class="fa-solid fa-rotate"></i>
                        " Refresh"
                    </a>
                    {add}
                </div>
            </div>
            {content}
        </section>
    }
}

pub fn form_page<R: DashboardSection>(mode: FormMode, form: &R::Form) -> impl IntoView {
    let (heading, action, submit) = match mode {
        FormMode::Create => (
            format!("Create {}", R::LABEL),
            list_url(R::SLUG),
            format!("Create {}", R::LABEL),
        ),
        FormMode::Edit(id) => (
            format!("Edit {}", R::LABEL),
            format!("{}/{}", list_url(R::SLUG), id),
            "Save Changes".to_string(),
        ),
    };
    let cancel = list_url(R::SLUG);
    let fields = R::render_fields(form);

    view! {
        <section class="dashboard-section">
            <h1>{heading}</h1>
            <form class="form" method="post" action=action>
                {fields}
                <div class="form-actions">
                    <a class="btn btn-muted" href=cancel>"Cancel"</a>
                    <button type="submit" class="btn btn-solid">{submit}</button>
                </div>
            </form>
        </section>
    }
}

pub fn confirm_page<R: DashboardSection>(id: i64, summary: String) -> impl IntoView {
    let message = format!(
        "Are you sure you want to delete this {}? {}",
        R::label_lower(),
        summary
    );
    let action = format!("{}/{}/delete", list_url(R::SLUG), id);

    view! {
        <section class="dashboard-section">
            <h1>{format!("Delete {}", R::LABEL)}</h1>
            {confirm_prompt(message, action, list_url(R::SLUG))}
        </section>
    }
}

/// `<label>` wrapping a single-line input.
pub fn text_field(
    label: &'static str,
    name: &'static str,
    value: String,
    required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input type="text" name=name value=value required=required/>
        </label>
    }
}

pub fn typed_field(
    label: &'static str,
    name: &'static str,
    kind: &'static str,
    value: String,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input type=kind name=name value=value/>
        </label>
    }
}

pub fn area_field(
    label: &'static str,
    name: &'static str,
    value: String,
    required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <textarea name=name required=required>{value}</textarea>
        </label>
    }
}
