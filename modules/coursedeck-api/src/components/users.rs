use dioxus::prelude::*;

use super::layout::Layout;
use super::StudentView;
use crate::templates::render_to_html;

#[allow(non_snake_case)]
#[component]
fn Users(students: Vec<StudentView>) -> Element {
    rsx! {
        Layout { title: "Users".to_string(), active_page: "users".to_string(),
            div { class: "max-w-6xl mx-auto p-6",
                div { class: "mb-6",
                    h2 { class: "text-2xl font-bold", "Users" }
                    p { class: "text-gray-500 mt-1", "Students enrolled across your courses" }
                }

                div { class: "bg-white border border-gray-200 rounded-lg p-5",
                    table { class: "w-full text-sm",
                        thead {
                            tr {
                                th { class: "text-left pb-2 text-gray-500 font-medium", "Name" }
                                th { class: "text-left pb-2 text-gray-500 font-medium", "Email" }
                                th { class: "text-left pb-2 text-gray-500 font-medium", "Course" }
                                th { class: "text-left pb-2 text-gray-500 font-medium", "Enrolled" }
                                th { class: "text-right pb-2 text-gray-500 font-medium", "Progress" }
                            }
                        }
                        tbody {
                            for student in students.iter() {
                                tr { class: "border-t border-gray-100",
                                    td { class: "py-2.5 pr-2 font-medium", "{student.name}" }
                                    td { class: "py-2.5 pr-2 text-gray-500", "{student.email}" }
                                    td { class: "py-2.5 pr-2 text-gray-500", "{student.course}" }
                                    td { class: "py-2.5 pr-2 text-gray-400", "{student.enrolled}" }
                                    td { class: "py-2.5 text-right",
                                        span { class: "text-teal-700 font-semibold", "{student.progress}%" }
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

pub fn render_users(students: Vec<StudentView>) -> String {
    let mut dom = VirtualDom::new_with_props(Users, UsersProps { students });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
