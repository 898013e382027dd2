use dioxus::prelude::*;

use super::layout::Layout;
use super::StatView;
use crate::templates::render_to_html;

struct QuickAction {
    title: &'static str,
    subtitle: &'static str,
    href: &'static str,
}

const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Create New Website",
        subtitle: "Start building your course site",
        href: "/dashboard/websites",
    },
    QuickAction {
        title: "Add New Course",
        subtitle: "Create engaging content",
        href: "/dashboard/courses",
    },
    QuickAction {
        title: "Invite Students",
        subtitle: "Grow your community",
        href: "/dashboard/users",
    },
];

#[allow(non_snake_case)]
#[component]
fn Home(stats: Vec<StatView>) -> Element {
    rsx! {
        Layout { title: "Dashboard".to_string(), active_page: "home".to_string(),
            div { class: "max-w-6xl mx-auto p-6",
                h2 { class: "text-2xl font-bold", "Dashboard" }
                p { class: "text-gray-500 mt-1 mb-6",
                    "Welcome back! Here's what's happening with your courses."
                }

                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-8",
                    for stat in stats.iter() {
                        div { class: "bg-white border border-gray-200 rounded-lg p-5",
                            p { class: "text-sm text-gray-500", "{stat.name}" }
                            p { class: "text-3xl font-bold mt-1", "{stat.value}" }
                            div { class: "mt-3 text-sm",
                                span { class: "text-green-600 font-medium", "{stat.change}" }
                                span { class: "text-gray-400 ml-1", "from last month" }
                            }
                        }
                    }
                }

                div { class: "bg-white border border-gray-200 rounded-lg p-6",
                    h3 { class: "text-lg font-semibold mb-4", "Quick Actions" }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        for action in QUICK_ACTIONS.iter() {
                            a {
                                href: action.href,
                                class: "block p-6 border-2 border-dashed border-gray-200 rounded-lg hover:border-teal-600 hover:bg-teal-50 transition-colors text-center no-underline",
                                p { class: "text-sm font-semibold text-gray-900", "{action.title}" }
                                p { class: "text-xs text-gray-500 mt-1", "{action.subtitle}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_home(stats: Vec<StatView>) -> String {
    let mut dom = VirtualDom::new_with_props(Home, HomeProps { stats });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
