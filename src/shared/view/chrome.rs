// src/shared/view/chrome.rs
//
// Page furniture around the routed content: the public navbar and footer,
// and the dashboard sidebar.

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::modules::home::profile;

/// Which surrounding layout a page gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// Navbar and footer. `active` is the highlighted section anchor.
    Public { active: &'static str, admin: bool },
    Dashboard { tab: DashboardTab },
    /// Bare layout for the login page.
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Blogs,
    Projects,
    Skills,
    Experience,
    Messages,
    CreateBlog,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 7] = [
        DashboardTab::Overview,
        DashboardTab::Blogs,
        DashboardTab::Projects,
        DashboardTab::Skills,
        DashboardTab::Experience,
        DashboardTab::Messages,
        DashboardTab::CreateBlog,
    ];

    pub fn href(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "/dashboard",
            DashboardTab::Blogs => "/dashboard/blogs",
            DashboardTab::Projects => "/dashboard/projects",
            DashboardTab::Skills => "/dashboard/skills",
            DashboardTab::Experience => "/dashboard/experience",
            DashboardTab::Messages => "/dashboard/messages",
            DashboardTab::CreateBlog => "/dashboard/create-blog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Blogs => "Blogs",
            DashboardTab::Projects => "Projects",
            DashboardTab::Skills => "Skills",
            DashboardTab::Experience => "Experience",
            DashboardTab::Messages => "Messages",
            DashboardTab::CreateBlog => "Create Blog",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "fa-solid fa-chart-line",
            DashboardTab::Blogs => "fa-solid fa-file-lines",
            DashboardTab::Projects => "fa-solid fa-folder",
            DashboardTab::Skills => "fa-solid fa-code",
            DashboardTab::Experience => "fa-solid fa-briefcase",
            DashboardTab::Messages => "fa-solid fa-envelope",
            DashboardTab::CreateBlog => "fa-solid fa-circle-plus",
        }
    }
}

pub const NAV_LINKS: [(&str, &str, &str); 6] = [
    ("#home", "Home", "fa-solid fa-house"),
    ("#about", "About", "fa-solid fa-circle-info"),
    ("#skills", "Skills", "fa-solid fa-laptop-code"),
    ("#projects", "Projects", "fa-solid fa-diagram-project"),
    ("#blog", "Blogs", "fa-solid fa-file-contract"),
    ("#contact", "Contact", "fa-solid fa-file-contract"),
];

fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    }
}

pub fn navbar(active: &'static str, admin: bool) -> impl IntoView {
    let links = NAV_LINKS
        .iter()
        .map(|(anchor, label, icon)| {
            let href = format!("/{}", anchor);
            let class = link_class(*anchor == active);
            let icon = *icon;
            let label = *label;
            view! {
                <li>
                    <a class=class href=href>
                        <i class=icon></i>
                        " "
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    let dashboard = admin.then(|| {
        view! {
            <li>
                <a class="nav-link nav-link-dashboard" href="/dashboard">
                    <i class="fa-solid fa-gauge"></i>
                    " Dashboard"
                </a>
            </li>
        }
    });

    view! {
        <header class="navbar">
            <nav class="navbar-inner">
                <a class="navbar-brand" href="/">{profile::NAME}</a>
                <ul class="navbar-links">
                    {links}
                    {dashboard}
                </ul>
            </nav>
        </header>
    }
}

pub fn footer() -> impl IntoView {
    let socials = profile::FOOTER_SOCIALS
        .iter()
        .map(|(href, icon)| {
            let class = format!("fa-brands {}", icon);
            let href = *href;
            view! {
                <a class="social-icon" href=href target="_blank" rel="noopener noreferrer">
                    <i class=class></i>
                </a>
            }
        })
        .collect_view();

    let copyright = format!("© {} {} - All rights reserved.", Utc::now().year(), profile::NAME);

    view! {
        <footer class="site-footer reveal">
            <div class="footer-profile">
                <p class="footer-name">{profile::NAME}</p>
                <h2 class="footer-role">{profile::FOOTER_ROLE}</h2>
            </div>
            <div class="footer-socials">{socials}</div>
            <div class="footer-copyright">
                <p>{copyright}</p>
            </div>
        </footer>
    }
}

pub fn dashboard_sidebar(current: DashboardTab) -> impl IntoView {
    let links = DashboardTab::ALL
        .iter()
        .map(|tab| {
            let class = link_class(*tab == current);
            let href = tab.href();
            let icon = tab.icon();
            let label = tab.label();
            view! {
                <a class=class href=href>
                    <i class=icon></i>
                    " "
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <nav class="sidebar-nav">
                <a class="nav-link" href="/">
                    <i class="fa-solid fa-house"></i>
                    " Home"
                </a>
                {links}
            </nav>
            <form class="sidebar-logout" method="post" action="/logout">
                <button type="submit" class="btn btn-danger">"Logout"</button>
            </form>
        </aside>
    }
}
