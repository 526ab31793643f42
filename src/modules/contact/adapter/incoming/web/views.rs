use leptos::prelude::*;

use crate::modules::home::profile;
use crate::shared::view::widgets::{reveal, TitleSection};

fn contact_card() -> impl IntoView {
    let links = profile::CONTACT_LINKS
        .iter()
        .map(|link| {
            let (href, icon, label) = (link.href, link.icon, link.label);
            view! {
                <a class="contact-link" href=href target="_blank" rel="noopener noreferrer">
                    <i class=icon></i>
                    <span>{label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="contact-card">
            <h3 class="contact-name">{profile::NAME}</h3>
            <div class="contact-links">{links}</div>
        </div>
    }
}

fn contact_form() -> impl IntoView {
    view! {
        <form class="contact-form" method="post" action="/contact">
            <label class="form-field">
                <span class="form-label">"Name"</span>
                <input type="text" name="name" placeholder="Enter your full name" required/>
            </label>
            <label class="form-field">
                <span class="form-label">"Email"</span>
                <input type="email" name="email" placeholder="Enter your email address" required/>
            </label>
            <label class="form-field">
                <span class="form-label">"Message"</span>
                <textarea name="message" rows="5" placeholder="Write your message here" required></textarea>
            </label>
            <button type="submit" class="btn btn-primary">"SUBMIT"</button>
        </form>
    }
}

/// Contact details beside the message form.
pub fn contact_section() -> AnyView {
    view! {
        <section id="contact" class="section">
            <div class="container">
                <TitleSection heading="STAY IN TOUCH" sub_heading="Contact Me"/>
                {reveal(view! {
                    <div class="contact-layout">
                        {contact_card()}
                        {contact_form()}
                    </div>
                })}
            </div>
        </section>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_section_lists_links_and_form() {
        let html = contact_section().to_html();

        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r#"href="mailto:arman-miaa36@gmail.com""#));
        assert!(html.contains(r#"href="https://m.me/arman2mia""#));
        assert!(html.contains(r#"action="/contact""#));
        for field in ["name", "email", "message"] {
            assert!(html.contains(&format!(r#"name="{}""#, field)));
        }
    }
}
