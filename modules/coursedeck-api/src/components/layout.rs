use dioxus::prelude::*;

struct NavItem {
    key: &'static str,
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { key: "home", label: "Dashboard", href: "/dashboard" },
    NavItem { key: "courses", label: "Courses", href: "/dashboard/courses" },
    NavItem { key: "websites", label: "Websites", href: "/dashboard/websites" },
    NavItem { key: "users", label: "Users", href: "/dashboard/users" },
    NavItem { key: "communication", label: "Communication", href: "/dashboard/communication" },
    NavItem { key: "search", label: "Search", href: "/dashboard/search" },
    NavItem { key: "settings", label: "Settings", href: "/dashboard/settings" },
];

/// Console layout with sidebar navigation.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, active_page: String, children: Element) -> Element {
    let full_title = format!("{title} — CourseDeck");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "flex min-h-screen bg-gray-50 font-sans text-gray-900",
            div { class: "w-56 bg-gray-900 text-white flex flex-col shrink-0 fixed inset-y-0 left-0 z-50",
                div { class: "px-5 py-4 text-lg font-semibold border-b border-gray-700",
                    "CourseDeck"
                }
                nav { class: "flex flex-col py-3 flex-1",
                    for item in NAV_ITEMS.iter() {
                        {
                            let class = if item.key == active_page {
                                "block px-5 py-2.5 text-sm text-white bg-teal-600"
                            } else {
                                "block px-5 py-2.5 text-sm text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
                            };
                            let href = item.href;
                            let label = item.label;
                            rsx! { a { href: href, class: class, "{label}" } }
                        }
                    }
                }
                form { method: "POST", action: "/logout", class: "px-5 py-4 border-t border-gray-700",
                    button {
                        r#type: "submit",
                        class: "text-sm text-gray-400 hover:text-white cursor-pointer",
                        "Sign out"
                    }
                }
            }
            div { class: "ml-56 flex-1 min-w-0",
                {children}
            }
        }
    }
}
