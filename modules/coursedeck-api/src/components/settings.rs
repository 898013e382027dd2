use dioxus::prelude::*;

use super::layout::Layout;
use super::ProfileView;
use crate::templates::render_to_html;

const NOTIFICATIONS: &[(&str, bool)] = &[
    ("New student enrollments", true),
    ("Course completions", true),
    ("Weekly summary email", false),
    ("Product updates", false),
];

#[allow(non_snake_case)]
#[component]
fn Settings(profile: ProfileView) -> Element {
    rsx! {
        Layout { title: "Settings".to_string(), active_page: "settings".to_string(),
            div { class: "max-w-3xl mx-auto p-6",
                div { class: "mb-6",
                    h2 { class: "text-2xl font-bold", "Settings" }
                    p { class: "text-gray-500 mt-1", "Your account and notification preferences" }
                }

                div { class: "bg-white border border-gray-200 rounded-lg p-6 mb-6",
                    h3 { class: "text-lg font-semibold mb-4", "Profile" }
                    dl { class: "space-y-3 text-sm",
                        div { class: "flex justify-between",
                            dt { class: "text-gray-500", "Name" }
                            dd { class: "font-medium", "{profile.name}" }
                        }
                        div { class: "flex justify-between",
                            dt { class: "text-gray-500", "Email" }
                            dd { class: "font-medium", "{profile.email}" }
                        }
                        div { class: "flex justify-between",
                            dt { class: "text-gray-500", "School" }
                            dd { class: "font-medium", "{profile.school}" }
                        }
                    }
                }

                div { class: "bg-white border border-gray-200 rounded-lg p-6",
                    h3 { class: "text-lg font-semibold mb-4", "Notifications" }
                    div { class: "space-y-3",
                        for (label, enabled) in NOTIFICATIONS.iter() {
                            div { class: "flex items-center justify-between text-sm",
                                span { class: "text-gray-700", "{label}" }
                                if *enabled {
                                    span { class: "inline-block px-2 py-0.5 rounded-full text-xs font-semibold bg-green-50 text-green-800",
                                        "On"
                                    }
                                } else {
                                    span { class: "inline-block px-2 py-0.5 rounded-full text-xs font-semibold bg-gray-100 text-gray-600",
                                        "Off"
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

pub fn render_settings(profile: ProfileView) -> String {
    let mut dom = VirtualDom::new_with_props(Settings, SettingsProps { profile });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
