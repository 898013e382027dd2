use dioxus::prelude::*;

use super::layout::Layout;
use super::{AnnouncementView, CampaignView, MessageView};
use crate::templates::render_to_html;

const TABS: &[(&str, &str)] = &[
    ("messages", "Messages"),
    ("announcements", "Announcements"),
    ("campaigns", "Email Campaigns"),
];

#[allow(non_snake_case)]
#[component]
fn Communication(
    tab: String,
    messages: Vec<MessageView>,
    announcements: Vec<AnnouncementView>,
    campaigns: Vec<CampaignView>,
) -> Element {
    rsx! {
        Layout { title: "Communication".to_string(), active_page: "communication".to_string(),
            div { class: "max-w-6xl mx-auto p-6",
                div { class: "mb-6",
                    h2 { class: "text-2xl font-bold", "Communication" }
                    p { class: "text-gray-500 mt-1", "Manage student communication and announcements" }
                }

                div { class: "border-b border-gray-200 mb-6",
                    nav { class: "flex gap-6",
                        for (key, label) in TABS.iter() {
                            {
                                let class = if *key == tab {
                                    "pb-2 text-sm font-medium text-teal-700 border-b-2 border-teal-600 no-underline"
                                } else {
                                    "pb-2 text-sm font-medium text-gray-500 hover:text-gray-700 no-underline"
                                };
                                rsx! {
                                    a { href: "/dashboard/communication?tab={key}", class: class, "{label}" }
                                }
                            }
                        }
                    }
                }

                if tab == "messages" {
                    div { class: "bg-white border border-gray-200 rounded-lg divide-y divide-gray-100",
                        for message in messages.iter() {
                            div { class: "p-4 flex items-start justify-between",
                                div { class: "min-w-0",
                                    div { class: "flex items-center gap-2",
                                        span { class: "font-medium", "{message.sender}" }
                                        if !message.read {
                                            span { class: "inline-block w-2 h-2 rounded-full bg-teal-600" }
                                        }
                                    }
                                    p { class: "text-sm text-gray-900 mt-0.5", "{message.subject}" }
                                    p { class: "text-sm text-gray-500 mt-0.5 truncate", "{message.preview}" }
                                }
                                span { class: "text-xs text-gray-400 shrink-0 ml-4", "{message.time}" }
                            }
                        }
                    }
                } else if tab == "announcements" {
                    div { class: "bg-white border border-gray-200 rounded-lg p-5",
                        table { class: "w-full text-sm",
                            thead {
                                tr {
                                    th { class: "text-left pb-2 text-gray-500 font-medium", "Title" }
                                    th { class: "text-left pb-2 text-gray-500 font-medium", "Date" }
                                    th { class: "text-right pb-2 text-gray-500 font-medium", "Recipients" }
                                    th { class: "text-right pb-2 text-gray-500 font-medium", "Status" }
                                }
                            }
                            tbody {
                                for ann in announcements.iter() {
                                    tr { class: "border-t border-gray-100",
                                        td { class: "py-2.5 pr-2 font-medium", "{ann.title}" }
                                        td { class: "py-2.5 pr-2 text-gray-400", "{ann.date}" }
                                        td { class: "py-2.5 text-right text-gray-500", "{ann.recipients}" }
                                        td { class: "py-2.5 text-right",
                                            span { class: "inline-block px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-600",
                                                "{ann.status}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div { class: "bg-white border border-gray-200 rounded-lg p-5",
                        table { class: "w-full text-sm",
                            thead {
                                tr {
                                    th { class: "text-left pb-2 text-gray-500 font-medium", "Campaign" }
                                    th { class: "text-left pb-2 text-gray-500 font-medium", "Subject" }
                                    th { class: "text-right pb-2 text-gray-500 font-medium", "Sent" }
                                    th { class: "text-right pb-2 text-gray-500 font-medium", "Opens" }
                                    th { class: "text-right pb-2 text-gray-500 font-medium", "Clicks" }
                                    th { class: "text-right pb-2 text-gray-500 font-medium", "Status" }
                                }
                            }
                            tbody {
                                for c in campaigns.iter() {
                                    tr { class: "border-t border-gray-100",
                                        td { class: "py-2.5 pr-2 font-medium", "{c.name}" }
                                        td { class: "py-2.5 pr-2 text-gray-500", "{c.subject}" }
                                        td { class: "py-2.5 text-right text-gray-500", "{c.sent}" }
                                        td { class: "py-2.5 text-right text-gray-500", "{c.opens}" }
                                        td { class: "py-2.5 text-right text-gray-500", "{c.clicks}" }
                                        td { class: "py-2.5 text-right",
                                            span { class: "inline-block px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-600",
                                                "{c.status}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_communication(
    tab: String,
    messages: Vec<MessageView>,
    announcements: Vec<AnnouncementView>,
    campaigns: Vec<CampaignView>,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        Communication,
        CommunicationProps { tab, messages, announcements, campaigns },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}
