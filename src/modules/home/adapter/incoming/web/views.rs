use leptos::prelude::*;

use crate::modules::home::profile;
use crate::shared::view::widgets::{reveal, TitleSection};

pub fn hero() -> AnyView {
    let roles = profile::ROLES
        .iter()
        .map(|role| {
            let role = *role;
            view! { <span class="hero-role" data-text=role>{role}</span> }
        })
        .collect_view();

    let socials = profile::HERO_SOCIALS
        .iter()
        .map(|social| {
            let (href, icon, label) = (social.href, social.icon, social.label);
            view! {
                <a class="social-icon" href=href target="_blank" rel="noopener noreferrer" aria-label=label>
                    <i class=icon></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="section hero">
            <div class="container hero-layout">
                <div class="hero-text">
                    <h1>"Hi, I'm " <span class="accent">{profile::NAME}</span></h1>
                    <h2 class="hero-roles">{roles}</h2>
                    <p class="hero-bio">{profile::BIO}</p>
                    <div class="hero-actions">
                        <a class="btn btn-solid" href=profile::RESUME target="_blank" rel="noopener noreferrer">
                            "Resume"
                        </a>
                        <a class="btn btn-outline" href="#contact">"Hire Me"</a>
                    </div>
                    <div class="hero-socials">{socials}</div>
                </div>
                <img class="hero-portrait" src=profile::PORTRAIT alt=profile::NAME/>
            </div>
        </section>
    }
    .into_any()
}

pub fn about() -> AnyView {
    let boxes = profile::ABOUT_BOXES
        .iter()
        .map(|(icon, title, text)| {
            let (icon, title, text) = (*icon, *title, *text);
            view! {
                <div class="about-box">
                    <i class=icon></i>
                    <h3>{title}</h3>
                    <p>{text}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section">
            <div class="container">
                <TitleSection heading="About Me" sub_heading="My Introduction"/>
                {reveal(view! {
                    <div class="about-layout">
                        <p class="about-text">
                            "Hi there! I'm "
                            <strong>{profile::NAME}</strong>
                            ", "
                            {profile::ABOUT}
                        </p>
                        <div class="about-boxes">{boxes}</div>
                        <a class="main-button" href="#contact"><span>"Let's Talk"</span></a>
                    </div>
                })}
            </div>
        </section>
    }
    .into_any()
}
