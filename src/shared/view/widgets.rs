// src/shared/view/widgets.rs
use leptos::prelude::*;

use crate::shared::forms::parse_stored_date;
use crate::shared::notice::Notice;

pub const NOT_FOUND_IMAGE: &str = "/static/not-found.svg";
pub const EXCERPT_CHARS: usize = 120;

#[component]
pub fn TitleSection(heading: &'static str, sub_heading: &'static str) -> impl IntoView {
    view! {
        <div class="title-section">
            <p class="title-sub">{sub_heading}</p>
            <h2 class="title-heading">{heading}</h2>
            <span class="title-rule"></span>
        </div>
    }
}

/// Link styled as the site's outlined call-to-action button.
#[component]
pub fn MainButton(#[prop(into)] text: String, #[prop(into)] href: String) -> impl IntoView {
    view! {
        <div class="main-button-row">
            <a class="main-button" href=href>
                <span>{text}</span>
            </a>
        </div>
    }
}

/// Fade-in wrapper. The animation itself lives in the stylesheet.
pub fn reveal(content: impl IntoView) -> impl IntoView {
    view! { <div class="reveal">{content}</div> }
}

pub fn notice_banner(notices: Vec<Notice>) -> impl IntoView {
    let items = notices
        .into_iter()
        .map(|notice| {
            let class = notice.css_class();
            let message = notice.message;
            view! { <div class=class role="status">{message}</div> }
        })
        .collect_view();

    view! { <div class="notices">{items}</div> }
}

/// Replacement for a browser confirm dialog: the question plus a form that
/// performs the action and a link back.
pub fn confirm_prompt(message: String, action: String, cancel_href: String) -> impl IntoView {
    view! {
        <div class="confirm-prompt">
            <p class="confirm-message">{message}</p>
            <div class="confirm-actions">
                <form method="post" action=action>
                    <button type="submit" class="btn btn-danger">"Yes, delete"</button>
                </form>
                <a class="btn btn-muted" href=cancel_href>"Cancel"</a>
            </div>
        </div>
    }
}

pub fn empty_state(message: String) -> impl IntoView {
    view! { <p class="empty-state">{message}</p> }
}

/// "Show all" / "show less" link. Nothing is rendered while the list fits
/// in its preview.
pub fn show_toggle(
    hidden_items: bool,
    expanded: bool,
    expand: (&'static str, String),
    collapse: (&'static str, String),
) -> impl IntoView {
    let shown = hidden_items || expanded;
    let (text, href) = if expanded { collapse } else { expand };
    shown.then(|| view! { <MainButton text=text href=href/> })
}

/// Cuts `content` to `max` characters and marks the cut with `...`.
pub fn excerpt(content: &str, max: usize) -> String {
    if content.chars().count() <= max {
        return content.to_string();
    }
    let cut: String = content.chars().take(max).collect();
    format!("{}...", cut)
}

/// Image source with the bundled fallback for a missing picture.
pub fn image_or_fallback(src: Option<&str>) -> String {
    match src.map(str::trim) {
        Some(src) if !src.is_empty() => src.to_string(),
        _ => NOT_FOUND_IMAGE.to_string(),
    }
}

/// `Mar 2024` for an experience timeline; unparseable input is shown as-is.
pub fn month_year(raw: &str) -> String {
    parse_stored_date(raw)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `March 1, 2024` for blog posts.
pub fn long_date(raw: &str) -> String {
    parse_stored_date(raw)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_content_untouched() {
        assert_eq!(excerpt("short", EXCERPT_CHARS), "short");
        let exact = "a".repeat(EXCERPT_CHARS);
        assert_eq!(excerpt(&exact, EXCERPT_CHARS), exact);
    }

    #[test]
    fn test_excerpt_cuts_on_characters() {
        let long = "é".repeat(130);
        let cut = excerpt(&long, EXCERPT_CHARS);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn test_image_or_fallback() {
        assert_eq!(image_or_fallback(Some("https://x/y.png")), "https://x/y.png");
        assert_eq!(image_or_fallback(Some("  ")), NOT_FOUND_IMAGE);
        assert_eq!(image_or_fallback(None), NOT_FOUND_IMAGE);
    }

    #[test]
    fn test_dates() {
        assert_eq!(month_year("2024-03-01T00:00:00.000Z"), "Mar 2024");
        assert_eq!(long_date("2024-03-01T00:00:00.000Z"), "March 1, 2024");
        assert_eq!(month_year("someday"), "someday");
    }

    #[test]
    fn test_notice_banner_renders_each_notice() {
        let html = notice_banner(vec![
            Notice::success("Saved"),
            Notice::error("Failed <again>"),
        ])
        .to_html();

        assert!(html.contains("notice-success"));
        assert!(html.contains("Saved"));
        assert!(html.contains("Failed &lt;again&gt;"));
    }

    #[test]
    fn test_show_toggle_only_when_something_is_hidden() {
        let more = ("Show All", "/?projects=all".to_string());
        let less = ("Show Less", "/#projects".to_string());

        let html = show_toggle(false, false, more.clone(), less.clone()).to_html();
        assert!(!html.contains("main-button"));

        let html = show_toggle(true, false, more.clone(), less.clone()).to_html();
        assert!(html.contains("Show All"));
        assert!(html.contains(r#"href="/?projects=all""#));

        let html = show_toggle(false, true, more, less).to_html();
        assert!(html.contains("Show Less"));
    }

    #[test]
    fn test_confirm_prompt_posts_to_action() {
        let html = confirm_prompt(
            "Delete this blog?".to_string(),
            "/dashboard/blogs/3/delete".to_string(),
            "/dashboard/blogs".to_string(),
        )
        .to_html();

        assert!(html.contains(r#"action="/dashboard/blogs/3/delete""#));
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"href="/dashboard/blogs""#));
    }
}
