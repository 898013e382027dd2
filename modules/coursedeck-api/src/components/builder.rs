use dioxus::prelude::*;

use coursedeck_builder::session::SelectedElement;

use super::BuilderView;
use crate::templates::render_to_html;

const BLOCKS: &[&str] = &["Section", "Heading", "Text", "Image", "Video", "Button"];

const INSPECTOR_TABS: &[&str] = &["Screen", "Actions", "Layout", "Effects"];

#[allow(non_snake_case)]
#[component]
fn Toolbar(view: BuilderView) -> Element {
    rsx! {
        header { class: "h-14 bg-white border-b border-gray-200 flex items-center justify-between px-4 shrink-0",
            div { class: "flex items-center gap-4",
                a { href: "/dashboard/websites", class: "text-sm text-gray-500 hover:text-gray-900 no-underline",
                    "← Websites"
                }
                div {
                    span { class: "text-sm font-semibold", "{view.site_name}" }
                    span { class: "text-xs text-gray-400 ml-2", "{view.derived_url}" }
                }
            }
            div { class: "flex items-center gap-2",
                span { class: "px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-600",
                    "{view.page_name}"
                }
                button { class: "px-3 py-1.5 text-sm border border-gray-300 rounded-md text-gray-600 hover:bg-gray-50",
                    "Preview"
                }
                button { class: "px-3 py-1.5 text-sm bg-teal-600 text-white rounded-md hover:bg-teal-700",
                    "Publish"
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn BlocksSidebar() -> Element {
    rsx! {
        aside { class: "w-56 bg-white border-r border-gray-200 p-4 shrink-0 overflow-y-auto",
            h3 { class: "text-xs font-semibold text-gray-500 uppercase tracking-wider mb-3",
                "Blocks"
            }
            div { class: "grid grid-cols-2 gap-2",
                for block in BLOCKS.iter() {
                    div {
                        class: "p-3 border border-gray-200 rounded-md text-center text-sm text-gray-600 cursor-move hover:border-teal-600 hover:text-teal-700",
                        draggable: true,
                        "{block}"
                    }
                }
            }
        }
    }
}

fn toggle_badge(enabled: bool) -> Element {
    if enabled {
        rsx! {
            span { class: "inline-block px-2 py-0.5 rounded-full text-xs font-semibold bg-green-50 text-green-800",
                "On"
            }
        }
    } else {
        rsx! {
            span { class: "inline-block px-2 py-0.5 rounded-full text-xs font-semibold bg-gray-100 text-gray-600",
                "Off"
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Inspector(selected: SelectedElement) -> Element {
    let opacity = selected.capabilities.opacity;
    rsx! {
        aside { class: "w-80 bg-white border-l border-gray-200 flex flex-col shrink-0",
            div { class: "p-4 border-b border-gray-200",
                h3 { class: "text-sm font-semibold", "Properties" }
                p { class: "text-xs text-gray-400 mt-0.5", "{selected.element_type} — {selected.id}" }
            }
            div { class: "border-b border-gray-200",
                nav { class: "flex p-1 gap-1",
                    for (i, tab) in INSPECTOR_TABS.iter().enumerate() {
                        {
                            let class = if i == 0 {
                                "flex-1 px-2 py-2 text-sm font-medium rounded-md bg-gray-100 text-gray-800 text-center"
                            } else {
                                "flex-1 px-2 py-2 text-sm font-medium rounded-md text-gray-500 hover:bg-gray-50 text-center"
                            };
                            rsx! { span { class: class, "{tab}" } }
                        }
                    }
                }
            }
            div { class: "flex-1 overflow-y-auto p-4 space-y-6",
                div { class: "space-y-3",
                    h4 { class: "text-xs font-semibold text-gray-500 uppercase", "Overlay" }
                    div { class: "flex items-center justify-between text-sm",
                        span { class: "text-gray-700", "Apply overlay" }
                        { toggle_badge(selected.capabilities.overlay) }
                    }
                    div {
                        div { class: "flex items-center justify-between mb-1 text-sm",
                            span { class: "text-gray-700", "Opacity" }
                            span { class: "text-gray-500", "{opacity}%" }
                        }
                        input {
                            r#type: "range", min: "0", max: "100", value: "{opacity}",
                            class: "w-full h-2 bg-gray-200 rounded-lg appearance-none"
                        }
                    }
                }
                div { class: "space-y-3",
                    h4 { class: "text-xs font-semibold text-gray-500 uppercase", "Screen Caption" }
                    div { class: "flex items-center justify-between text-sm",
                        span { class: "text-gray-700", "Add screen caption" }
                        { toggle_badge(selected.capabilities.caption) }
                    }
                }
                div { class: "space-y-3",
                    h4 { class: "text-xs font-semibold text-gray-500 uppercase", "Popup" }
                    div { class: "flex items-center justify-between text-sm",
                        span { class: "text-gray-700", "Open in pop-up window" }
                        { toggle_badge(selected.capabilities.popup) }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn BuilderPage(
    view: BuilderView,
    library_css: String,
    library_js: String,
    boot_script: String,
    selected: Option<SelectedElement>,
) -> Element {
    let page_title = format!("{} — Builder — CourseDeck", view.site_name);
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{page_title}" }
            script { src: "https://cdn.tailwindcss.com" }
            link { rel: "stylesheet", href: "{library_css}" }
            script { src: "{library_js}" }
        }
        body { class: "h-screen flex flex-col bg-gray-100 font-sans text-gray-800",
            Toolbar { view: view.clone() }
            div { class: "flex-1 flex overflow-hidden",
                BlocksSidebar {}
                main { class: "flex-1 overflow-auto",
                    div { id: "builder-canvas", class: "w-full h-full" }
                }
                if let Some(sel) = selected {
                    Inspector { selected: sel }
                }
            }
            script { dangerous_inner_html: "{boot_script}" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn BuilderLoading(view: BuilderView) -> Element {
    let page_title = format!("{} — Builder — CourseDeck", view.site_name);
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{page_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "h-screen flex flex-col bg-gray-100 font-sans text-gray-800",
            Toolbar { view: view.clone() }
            div { class: "flex-1 flex overflow-hidden",
                BlocksSidebar {}
                main { class: "flex-1 flex items-center justify-center",
                    div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-teal-600" }
                }
            }
        }
    }
}

pub fn render_builder(
    view: BuilderView,
    library_css: String,
    library_js: String,
    boot_script: String,
    selected: Option<SelectedElement>,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        BuilderPage,
        BuilderPageProps { view, library_css, library_js, boot_script, selected },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}

/// Rendered while the template markup is loading, and left in place if the
/// load fails. Reloading the page retries.
pub fn render_builder_loading(view: BuilderView) -> String {
    let mut dom = VirtualDom::new_with_props(BuilderLoading, BuilderLoadingProps { view });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
