// src/modules/message/adapter/incoming/web/views.rs
use leptos::prelude::*;

use crate::modules::content::adapter::incoming::web::dashboard_routes::DashboardSection;
use crate::modules::content::adapter::incoming::web::views::list_url;
use crate::modules::message::domain::entities::{Message, MessageForm};
use crate::shared::state::Keyed;
use crate::shared::view::widgets::long_date;
use crate::shared::view::DashboardTab;

fn message_row(entry: &Keyed<Message>) -> impl IntoView {
    let msg = &entry.item;
    let name = msg.name.clone();
    let mailto = format!("mailto:{}", msg.email);
    let email = msg.email.clone();
    let body = msg.message.clone();
    let received = msg.created_at.as_deref().map(long_date).unwrap_or_default();
    let delete = entry.key.persisted_id().map(|id| {
        let href = format!("{}/{}/delete", list_url(Message::SLUG), id);
        view! {
            <a class="btn btn-small btn-danger" href=href>
                <i class="fa-solid fa-trash"></i>
                " Delete"
            </a>
        }
    });

    view! {
        <tr class="message-row">
            <td>{name}</td>
            <td><a href=mailto>{email}</a></td>
            <td class="message-body">{body}</td>
            <td>{received}</td>
            <td>{delete}</td>
        </tr>
    }
}

impl DashboardSection for Message {
    const SLUG: &'static str = "messages";
    const TITLE: &'static str = "Messages";
    const TAB: DashboardTab = DashboardTab::Messages;
    const EDITABLE: bool = false;

    fn render_entries(entries: &[Keyed<Self>]) -> AnyView {
        let rows = entries.iter().map(message_row).collect_view();

        view! {
            <table class="message-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Message"</th>
                        <th>"Received"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    }

    fn render_fields(_form: &MessageForm) -> AnyView {
        ().into_any()
    }

    fn summary(&self) -> String {
        format!("The message from {} <{}> will be removed.", self.name, self.email)
    }
}
