// src/modules/blog/adapter/incoming/web/views.rs
use leptos::prelude::*;

use crate::modules::blog::domain::entities::{Blog, BlogForm};
use crate::modules::content::adapter::incoming::web::dashboard_routes::DashboardSection;
use crate::modules::content::adapter::incoming::web::views::{
    area_field, entry_controls, text_field, typed_field,
};
use crate::shared::state::{Keyed, LoadState, SectionList, Visibility};
use crate::shared::view::widgets::{
    empty_state, excerpt, long_date, reveal, show_toggle, TitleSection, EXCERPT_CHARS,
};
use crate::shared::view::DashboardTab;

fn blog_card(entry: &Keyed<Blog>, controls: Option<AnyView>) -> impl IntoView {
    let blog = &entry.item;
    let src = blog.thumbnail_src();
    let alt = blog.title.clone();
    let title = blog.title.clone();
    let date = blog.created_at.as_deref().map(long_date);
    let summary = excerpt(&blog.content, EXCERPT_CHARS);
    let read_more = entry.key.persisted_id().map(|id| {
        let href = format!("/blogs/{}", id);
        view! { <a class="card-link" href=href>"Read More"</a> }
    });

    view! {
        <article class="card blog-card">
            <img class="card-image" src=src alt=alt/>
            <div class="card-body">
                <h3 class="card-title">{title}</h3>
                {date.map(|d| view! { <p class="card-date">{d}</p> })}
                <p class="card-text">{summary}</p>
                {read_more}
                {controls}
            </div>
        </article>
    }
}

/// Public grid of blog cards.
pub fn blog_grid(entries: &[Keyed<Blog>]) -> AnyView {
    let cards = entries
        .iter()
        .map(|entry| blog_card(entry, None))
        .collect_view();
    view! { <div class="grid">{cards}</div> }.into_any()
}

/// The blog listing as shown on the home page and on `/blogs`.
///
/// `expand` and `collapse` are the toggle links; the toggle only shows up
/// when the preview hides something.
pub fn blog_listing(
    list: &SectionList<Blog>,
    limit: usize,
    expanded: bool,
    expand: String,
    collapse: String,
) -> AnyView {
    let content = match list.state() {
        LoadState::Failed(reason) => empty_state(reason.clone()).into_any(),
        _ if list.is_empty() => empty_state("No blogs published yet.".to_string()).into_any(),
        _ => blog_grid(list.visible(Visibility::from_toggle(limit, expanded))),
    };
    let toggle = show_toggle(
        list.has_more_than(limit),
        expanded,
        ("Show All Blogs", expand),
        ("Show Less", collapse),
    );

    view! {
        <section id="blog" class="section">
            <div class="container">
                <TitleSection heading="Blogs" sub_heading="My Latest Writing"/>
                {reveal(content)}
                {toggle}
            </div>
        </section>
    }
    .into_any()
}

pub fn blog_detail(blog: &Blog) -> impl IntoView {
    let src = blog.thumbnail_src();
    let alt = blog.title.clone();
    let title = blog.title.clone();
    let date = blog.created_at.as_deref().map(long_date);
    let content = blog.content.clone();

    view! {
        <section class="section">
            <article class="container blog-detail">
                <a class="card-link" href="/blogs">
                    <i class="fa-solid fa-arrow-left"></i>
                    " All blogs"
                </a>
                <img class="blog-detail-image" src=src alt=alt/>
                <h1>{title}</h1>
                {date.map(|d| view! { <p class="card-date">{d}</p> })}
                <div class="blog-content">{content}</div>
            </article>
        </section>
    }
}

pub fn blog_missing(message: String) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container blog-detail">
                <h1>"Blog not found"</h1>
                {empty_state(message)}
                <a class="btn btn-muted" href="/blogs">"Back to blogs"</a>
            </div>
        </section>
    }
}

impl DashboardSection for Blog {
    const SLUG: &'static str = "blogs";
    const TITLE: &'static str = "Blogs";
    const TAB: DashboardTab = DashboardTab::Blogs;

    fn render_entries(entries: &[Keyed<Self>]) -> AnyView {
        let cards = entries
            .iter()
            .map(|entry| blog_card(entry, Some(entry_controls(Self::SLUG, entry.key))))
            .collect_view();
        view! { <div class="grid">{cards}</div> }.into_any()
    }

    fn render_fields(form: &BlogForm) -> AnyView {
        view! {
            {text_field("Title", "title", form.title.clone(), true)}
            {typed_field("Thumbnail URL", "thumbnail", "url", form.thumbnail.clone())}
            {area_field("Content", "content", form.content.clone(), true)}
        }
        .into_any()
    }

    fn summary(&self) -> String {
        format!("\"{}\" will be removed permanently.", self.title)
    }
}
