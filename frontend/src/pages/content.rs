//! Static copy for the company profile page.

pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
    pub bullets: [&'static str; 3],
    pub icon: &'static str,
}

pub struct Photo {
    pub src: &'static str,
    pub mobile_src: &'static str,
    pub preview_src: &'static str,
    /// Plain JPEG of the same shot, used if the optimized asset fails.
    pub fallback_src: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

macro_rules! photo {
    ($id:literal, $alt:literal) => {
        Photo {
            src: concat!("https://images.unsplash.com/", $id, "?auto=format&fit=crop&w=2400&q=80"),
            mobile_src: concat!("https://images.unsplash.com/", $id, "?auto=format&fit=crop&w=900&q=75"),
            preview_src: concat!("https://images.unsplash.com/", $id, "?auto=format&fit=crop&w=32&q=20&blur=40"),
            fallback_src: concat!("https://images.unsplash.com/", $id, "?fm=jpg&fit=crop&w=2400&h=1600&q=80"),
            width: 2400,
            height: 1600,
            alt: $alt,
        }
    };
}

pub static HERO_PHOTO: Photo = photo!("photo-1587614382346-4ec70e388b28", "African professional working on a laptop");
pub static ABSTRACT_PHOTO: Photo = photo!("photo-1550751827-4bd374c3f58b", "Technology background");
pub static OFFICE_PHOTO: Photo = photo!("photo-1521737604893-d14cc237f11d", "African professionals collaborating");

pub static HERO_PILLS: [&str; 3] = ["Digital Transformation", "Internal Systems", "Security-First"];

pub static HERO_HIGHLIGHTS: [(&str, &str); 4] = [
    ("Secure by design", "Role-based access & audit trails"),
    ("Fast & reliable", "Optimized performance & premium UX"),
    ("Multi-branch ready", "Head office + branch visibility"),
    ("Workflow automation", "Trackable approvals & requests"),
];

pub static HERO_STATS: [(&str, &str); 3] = [
    ("RLS", "Role security"),
    ("Real-time", "Live updates"),
    ("Scalable", "Grows cleanly"),
];

pub static DELIVERY_STANDARDS: [&str; 5] = [
    "Security-first access",
    "Audit-friendly logs",
    "Clean premium UX",
    "Mobile + desktop ready",
    "Scalable architecture",
];

pub static PILLARS: [(&str, &str); 3] = [
    (
        "Vision",
        "To be a trusted partner in building modern, intelligent systems that power efficient organizations across Africa.",
    ),
    (
        "Mission",
        "To design and deliver secure digital solutions that streamline operations, improve accountability, and unlock data-driven decision-making.",
    ),
    (
        "Values",
        "Clarity • Security • Craft • Alignment. Business goals first, technology as the enabler.",
    ),
];

pub static SERVICES: [Service; 4] = [
    Service {
        title: "Internal Systems & Portals",
        desc: "Custom internal platforms that centralize work and reduce dependency on scattered tools.",
        bullets: ["Staff portals", "Operations dashboards", "Approval workflows"],
        icon: "⌁",
    },
    Service {
        title: "Workflow Digitization & Automation",
        desc: "We convert manual or WhatsApp-driven processes into trackable digital workflows.",
        bullets: ["Requests & approvals", "Tracking pipelines", "Digital registers"],
        icon: "↻",
    },
    Service {
        title: "Dashboards & Operational Reporting",
        desc: "Real-time reporting that helps management see what’s happening across teams and branches.",
        bullets: ["KPIs & trends", "Operational summaries", "Audit-friendly logs"],
        icon: "▦",
    },
    Service {
        title: "Secure System Design & Integration",
        desc: "Security-first systems with role-based access control and integration-ready architecture.",
        bullets: ["Access controls (RLS)", "Head office vs branch roles", "Scalable foundations"],
        icon: "⛉",
    },
];

pub static SOLUTIONS: [(&str, &str); 5] = [
    (
        "Ticketing & Issue Tracking",
        "Track issues, requests, and tasks from start to resolution with clear ownership, priorities, and timelines so nothing falls through the cracks.",
    ),
    (
        "Multi-Branch Dashboards",
        "Give head office real-time visibility across branches, while allowing each branch to manage its own day-to-day operations.",
    ),
    (
        "Client Portals",
        "Provide clients or staff with a single place to submit requests, upload documents, track progress, and communicate without endless emails or WhatsApp messages.",
    ),
    (
        "Approval Workflows",
        "Digitize approvals so requests move smoothly through the right people, with clear status updates and a full record of who approved what and when.",
    ),
    (
        "Inventory & Sales Tracking",
        "Monitor stock levels, sales activity, and branch performance in one system, helping management make informed decisions using accurate data.",
    ),
];

pub static SOLUTION_TAGS: [&str; 4] = ["Role-Based Access", "Audit Trails", "Multi-Branch", "Real-time"];

pub static INDUSTRIES: [&str; 6] = [
    "Financial Services",
    "Construction & Engineering",
    "Retail & Multi-Branch SMEs",
    "Education & Institutions",
    "Hospitality & Service Businesses",
    "Professional Services",
];

pub static WHY_POINTS: [(&str, &str); 4] = [
    ("Business-first thinking", "We map workflows before we code."),
    ("Security-first design", "Access control and audit logs by default."),
    ("Scalable architecture", "Built to grow across branches and teams."),
    ("Premium UX + performance", "Fast, modern, and easy to use."),
];

pub static FAQS: [(&str, &str); 4] = [
    (
        "How does a project start?",
        "With a consultation. We map the workflow you want to improve, agree on roles and access, and recommend a solution path before any code is written.",
    ),
    (
        "Can you work with our existing tools?",
        "Yes. Systems are designed to be integration-ready, so spreadsheets, email and existing databases can be brought in rather than thrown away.",
    ),
    (
        "How is access controlled across branches?",
        "Head office and branch roles are separated with row-level security, and every sensitive action is recorded in an audit trail.",
    ),
    (
        "Do the systems work on phones?",
        "Every system we deliver is built for mobile and desktop, so staff in the field see the same live data as the office.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_variants_share_the_same_shot() {
        for photo in [&HERO_PHOTO, &ABSTRACT_PHOTO, &OFFICE_PHOTO] {
            let id = photo.src.split('?').next().unwrap();
            assert!(photo.mobile_src.starts_with(id));
            assert!(photo.preview_src.starts_with(id));
            assert!(photo.fallback_src.starts_with(id));
            assert_ne!(photo.fallback_src, photo.src);
        }
    }

    #[test]
    fn photo_dimensions_are_landscape() {
        assert_eq!((HERO_PHOTO.width, HERO_PHOTO.height), (2400, 1600));
    }
}
