use dioxus::prelude::*;

use super::layout::Layout;
use super::CategoryView;
use crate::templates::render_to_html;

#[allow(non_snake_case)]
#[component]
fn Search(popular: Vec<String>, categories: Vec<CategoryView>) -> Element {
    rsx! {
        Layout { title: "Search".to_string(), active_page: "search".to_string(),
            div { class: "max-w-4xl mx-auto p-6",
                div { class: "mb-6",
                    h2 { class: "text-2xl font-bold", "Search" }
                    p { class: "text-gray-500 mt-1", "Find courses, students, and content" }
                }

                form { method: "GET", action: "/dashboard/search", class: "mb-8",
                    input {
                        r#type: "search", name: "q",
                        placeholder: "Search everything…",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg text-base"
                    }
                }

                div { class: "mb-8",
                    h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider mb-3",
                        "Popular Searches"
                    }
                    div { class: "flex flex-wrap gap-2",
                        for term in popular.iter() {
                            span { class: "px-3 py-1.5 bg-white border border-gray-200 rounded-full text-sm text-gray-600",
                                "{term}"
                            }
                        }
                    }
                }

                div {
                    h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider mb-3",
                        "Browse by Category"
                    }
                    div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                        for category in categories.iter() {
                            div { class: "bg-white border border-gray-200 rounded-lg p-4 text-center",
                                p { class: "font-medium", "{category.name}" }
                                p { class: "text-xs text-gray-400 mt-1", "{category.count} items" }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_search(popular: Vec<String>, categories: Vec<CategoryView>) -> String {
    let mut dom = VirtualDom::new_with_props(Search, SearchProps { popular, categories });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
