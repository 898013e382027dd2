use dioxus::prelude::*;

use super::layout::Layout;
use super::{SiteCardView, TemplateOptionView};
use crate::templates::render_to_html;

#[allow(non_snake_case)]
#[component]
fn Websites(
    sites: Vec<SiteCardView>,
    templates: Vec<TemplateOptionView>,
    error: Option<String>,
    notice: Option<String>,
) -> Element {
    rsx! {
        Layout { title: "Websites".to_string(), active_page: "websites".to_string(),
            div { class: "max-w-6xl mx-auto p-6",
                div { class: "flex items-center justify-between mb-6",
                    div {
                        h2 { class: "text-2xl font-bold", "Websites" }
                        p { class: "text-gray-500 mt-1", "Manage your course websites" }
                    }
                }

                if let Some(err) = &error {
                    div { class: "bg-red-50 border border-red-200 text-red-800 text-sm px-3 py-2 rounded mb-4",
                        "{err}"
                    }
                }
                if let Some(msg) = &notice {
                    div { class: "bg-green-50 border border-green-200 text-green-800 text-sm px-3 py-2 rounded mb-4",
                        "{msg}"
                    }
                }

                // Create a new site from a template
                div { class: "bg-white border border-gray-200 rounded-lg p-5 mb-8",
                    h3 { class: "text-sm font-semibold text-gray-500 uppercase tracking-wider mb-3",
                        "Create a New Site"
                    }
                    form { method: "POST", action: "/dashboard/websites", class: "flex flex-wrap items-end gap-3",
                        div { class: "flex-1 min-w-48",
                            label { r#for: "name", class: "block text-sm text-gray-500 mb-1", "Site name" }
                            input {
                                r#type: "text", name: "name", id: "name",
                                placeholder: "My Course Site",
                                class: "w-full px-3 py-2 border border-gray-300 rounded text-sm"
                            }
                        }
                        div { class: "flex-1 min-w-48",
                            label { r#for: "template_id", class: "block text-sm text-gray-500 mb-1", "Template" }
                            select {
                                name: "template_id", id: "template_id",
                                class: "w-full px-3 py-2 border border-gray-300 rounded text-sm bg-white",
                                option { value: "", "Choose a template…" }
                                for template in templates.iter() {
                                    option { value: "{template.id}",
                                        "{template.name} — {template.category}"
                                    }
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-teal-600 text-white rounded text-sm font-medium cursor-pointer hover:bg-teal-700",
                            "Create New Site"
                        }
                    }
                }

                if sites.is_empty() {
                    p { class: "text-gray-400 text-center py-10",
                        "No sites yet. Create one from a template above."
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for site in sites.iter() {
                        div { class: "bg-white border border-gray-200 rounded-lg overflow-hidden hover:shadow-md transition-shadow",
                            div { class: "p-5",
                                div { class: "flex items-center justify-between mb-2",
                                    h3 { class: "font-semibold", "{site.name}" }
                                    span { class: "px-2 py-1 text-xs font-medium rounded-full {site.status_class}",
                                        "{site.status_label}"
                                    }
                                }
                                p { class: "text-sm text-gray-500 mb-1", "{site.url}" }
                                p { class: "text-xs text-gray-400 mb-1", "Template: {site.template_name}" }
                                p { class: "text-xs text-gray-400 mb-4", "Last edited: {site.last_edited}" }
                                div { class: "flex items-center gap-2",
                                    a {
                                        href: "/builder/{site.id}",
                                        class: "px-3 py-1.5 text-sm bg-teal-50 text-teal-700 rounded-md hover:bg-teal-100 font-medium no-underline",
                                        "Edit"
                                    }
                                    form { method: "POST", action: "/dashboard/websites/{site.id}/delete",
                                        button {
                                            r#type: "submit",
                                            class: "px-3 py-1.5 text-sm bg-red-100 text-red-700 rounded-md hover:bg-red-200 cursor-pointer",
                                            "Delete"
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

pub fn render_websites(
    sites: Vec<SiteCardView>,
    templates: Vec<TemplateOptionView>,
    error: Option<String>,
    notice: Option<String>,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        Websites,
        WebsitesProps { sites, templates, error, notice },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}
