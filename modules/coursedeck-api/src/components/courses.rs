use dioxus::prelude::*;

use super::layout::Layout;
use super::CourseView;
use crate::templates::render_to_html;

#[allow(non_snake_case)]
#[component]
fn Courses(courses: Vec<CourseView>) -> Element {
    rsx! {
        Layout { title: "Courses".to_string(), active_page: "courses".to_string(),
            div { class: "max-w-6xl mx-auto p-6",
                div { class: "flex items-center justify-between mb-6",
                    div {
                        h2 { class: "text-2xl font-bold", "Courses & Programs" }
                        p { class: "text-gray-500 mt-1", "Manage your educational content" }
                    }
                }

                if courses.is_empty() {
                    p { class: "text-gray-400 text-center py-10", "No courses yet." }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for course in courses.iter() {
                        div { class: "bg-white border border-gray-200 rounded-lg overflow-hidden hover:shadow-md transition-shadow",
                            div { class: "p-4",
                                span { class: "inline-block px-2 py-0.5 rounded-full text-xs font-medium {course.status_class}",
                                    "{course.status_label}"
                                }
                                h3 { class: "font-semibold mt-2", "{course.title}" }
                                p { class: "text-sm text-gray-500 mt-1 mb-4", "{course.description}" }
                                div { class: "flex items-center justify-between text-sm text-gray-400",
                                    span { "{course.students} students" }
                                    span { "{course.duration}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_courses(courses: Vec<CourseView>) -> String {
    let mut dom = VirtualDom::new_with_props(Courses, CoursesProps { courses });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
