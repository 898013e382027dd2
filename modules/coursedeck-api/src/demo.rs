//! Fixture data backing the dashboard sections. Everything here is
//! synthetic and deterministic; there is no live course platform behind
//! the console.

use crate::components::{
    AnnouncementView, CampaignView, CategoryView, CourseView, MessageView, ProfileView, StatView,
    StudentView,
};

pub fn dashboard_stats() -> Vec<StatView> {
    vec![
        stat("Total Websites", "12", "+2"),
        stat("Active Students", "1,234", "+12%"),
        stat("Course Completions", "456", "+8%"),
        stat("Revenue", "$12,345", "+15%"),
    ]
}

fn stat(name: &str, value: &str, change: &str) -> StatView {
    StatView {
        name: name.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    }
}

pub fn courses() -> Vec<CourseView> {
    vec![
        course(
            "Complete React Development",
            "Learn React from basics to advanced concepts",
            145,
            "12 hours",
            true,
        ),
        course(
            "JavaScript Fundamentals",
            "Master the basics of JavaScript programming",
            89,
            "8 hours",
            false,
        ),
        course(
            "CSS Grid & Flexbox",
            "Modern CSS layout techniques",
            67,
            "6 hours",
            true,
        ),
    ]
}

fn course(title: &str, description: &str, students: u32, duration: &str, published: bool) -> CourseView {
    let (status_label, status_class) = if published {
        ("published", "bg-green-100 text-green-800")
    } else {
        ("draft", "bg-yellow-100 text-yellow-800")
    };
    CourseView {
        title: title.to_string(),
        description: description.to_string(),
        students,
        duration: duration.to_string(),
        status_label: status_label.to_string(),
        status_class: status_class.to_string(),
    }
}

pub fn students() -> Vec<StudentView> {
    vec![
        student("Amara Okafor", "amara@example.com", "Complete React Development", "2025-01-03", 82),
        student("Jonas Lindqvist", "jonas@example.com", "JavaScript Fundamentals", "2025-01-05", 64),
        student("Priya Raman", "priya@example.com", "CSS Grid & Flexbox", "2025-01-08", 91),
        student("Mateo Alvarez", "mateo@example.com", "Complete React Development", "2025-01-10", 37),
        student("Hana Sato", "hana@example.com", "JavaScript Fundamentals", "2025-01-12", 55),
    ]
}

fn student(name: &str, email: &str, course: &str, enrolled: &str, progress: u8) -> StudentView {
    StudentView {
        name: name.to_string(),
        email: email.to_string(),
        course: course.to_string(),
        enrolled: enrolled.to_string(),
        progress,
    }
}

pub fn messages() -> Vec<MessageView> {
    vec![
        message("Amara Okafor", "Question about module 4", "Hi! I'm stuck on the exercise about state management…", "2h ago", false),
        message("Jonas Lindqvist", "Certificate request", "Could you issue my completion certificate for…", "5h ago", false),
        message("Priya Raman", "Thank you!", "Just wanted to say the CSS course was fantastic…", "1d ago", true),
        message("Mateo Alvarez", "Refund question", "I enrolled twice by accident, can you…", "2d ago", true),
        message("Hana Sato", "Video playback issue", "Lesson 7 won't load on my tablet…", "3d ago", true),
    ]
}

fn message(sender: &str, subject: &str, preview: &str, time: &str, read: bool) -> MessageView {
    MessageView {
        sender: sender.to_string(),
        subject: subject.to_string(),
        preview: preview.to_string(),
        time: time.to_string(),
        read,
    }
}

pub fn announcements() -> Vec<AnnouncementView> {
    vec![
        announcement("New course: CSS Grid & Flexbox", 412, "2025-01-12", "published"),
        announcement("Holiday schedule", 387, "2025-01-08", "published"),
        announcement("Live Q&A next Friday", 256, "2025-01-15", "scheduled"),
        announcement("Platform maintenance window", 0, "2025-01-16", "draft"),
    ]
}

fn announcement(title: &str, recipients: u32, date: &str, status: &str) -> AnnouncementView {
    AnnouncementView {
        title: title.to_string(),
        recipients,
        date: date.to_string(),
        status: status.to_string(),
    }
}

pub fn campaigns() -> Vec<CampaignView> {
    vec![
        campaign("January enrollment push", "Start the year with a new skill", 845, 512, 134, "sent"),
        campaign("React course launch", "Our biggest course yet is live", 792, 488, 156, "sent"),
        campaign("Winter sale", "20% off all programs this week", 810, 365, 98, "sent"),
        campaign("February newsletter", "What's coming next month", 0, 0, 0, "draft"),
    ]
}

fn campaign(name: &str, subject: &str, sent: u32, opens: u32, clicks: u32, status: &str) -> CampaignView {
    CampaignView {
        name: name.to_string(),
        subject: subject.to_string(),
        sent,
        opens,
        clicks,
        status: status.to_string(),
    }
}

pub fn popular_searches() -> Vec<String> {
    ["react hooks", "certificates", "refund policy", "css grid", "video upload"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn search_categories() -> Vec<CategoryView> {
    vec![
        category("Courses", 24),
        category("Students", 1234),
        category("Websites", 12),
        category("Messages", 86),
    ]
}

fn category(name: &str, count: u32) -> CategoryView {
    CategoryView {
        name: name.to_string(),
        count,
    }
}

pub fn profile() -> ProfileView {
    ProfileView {
        name: "Alex Morgan".to_string(),
        email: "alex@coursedeck.example".to_string(),
        school: "Morgan Academy".to_string(),
    }
}
