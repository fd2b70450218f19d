//! The built-in HealthSync AI MVP dataset.
//!
//! Authored once; every value is literal. Swap it out with an external
//! TOML dataset to reuse the renderers for other content.

use indexmap::IndexMap;

use crate::journey::StepKind;
use crate::report::{FeatureRow, RoiRow, TechSpecRow};

use super::{
    ArchitectureData, ComponentSpec, ConnectionSpec, Dataset, JourneyData, OverlaySpec,
    ReportData, StepSpec,
};

fn component(name: &str, x: f32, y: f32, category: &str) -> ComponentSpec {
    ComponentSpec {
        name: name.to_string(),
        pos: [x, y],
        category: category.to_string(),
    }
}

fn connection(source: &str, target: &str) -> ConnectionSpec {
    ConnectionSpec {
        source: source.to_string(),
        target: target.to_string(),
    }
}

fn step(
    id: u32,
    title: &str,
    display_title: &str,
    description: &str,
    kind: StepKind,
    time: &str,
) -> StepSpec {
    StepSpec {
        id,
        title: title.to_string(),
        display_title: display_title.to_string(),
        description: description.to_string(),
        kind,
        time: time.to_string(),
    }
}

fn feature(category: &str, feature: &str, benefit: &str, minutes_saved: u32) -> FeatureRow {
    FeatureRow {
        category: category.to_string(),
        feature: feature.to_string(),
        status: "Complete".to_string(),
        benefit: benefit.to_string(),
        minutes_saved,
    }
}

fn roi(metric: &str, baseline: f64, with_healthsync: f64, improvement: f64) -> RoiRow {
    RoiRow {
        metric: metric.to_string(),
        baseline,
        with_healthsync,
        improvement,
    }
}

fn tech_spec(component: &str, technology: &str, capability: &str) -> TechSpecRow {
    TechSpecRow {
        component: component.to_string(),
        technology: technology.to_string(),
        capability: capability.to_string(),
    }
}

impl Dataset {
    /// Returns the embedded HealthSync AI MVP dataset.
    pub fn builtin() -> Self {
        Self {
            architecture: architecture(),
            journey: journey(),
            reports: reports(),
        }
    }
}

fn architecture() -> ArchitectureData {
    // Healthcare color scheme: blues and greens, red for security.
    let palette: IndexMap<String, String> = [
        ("frontend", "#1565C0"),
        ("ai", "#2E7D32"),
        ("data", "#0277BD"),
        ("output", "#388E3C"),
        ("integration", "#0288D1"),
        ("security", "#D32F2F"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    ArchitectureData {
        title: "HealthSync AI MVP Architecture".to_string(),
        // Systematic left-to-right layout in the unit square.
        components: vec![
            component("User Interface", 0.1, 0.6, "frontend"),
            component("Insurance OCR", 0.3, 0.8, "ai"),
            component("Preference AI", 0.3, 0.4, "ai"),
            component("Coverage Data", 0.5, 0.8, "data"),
            component("Health Profile", 0.5, 0.4, "data"),
            component("Scheduling AI", 0.7, 0.6, "ai"),
            component("Provider DB", 0.7, 0.2, "data"),
            component("Calendar Gen", 0.9, 0.6, "output"),
            component("Communication", 0.9, 0.2, "integration"),
        ],
        connections: vec![
            connection("User Interface", "Insurance OCR"),
            connection("User Interface", "Preference AI"),
            connection("Insurance OCR", "Coverage Data"),
            connection("Preference AI", "Health Profile"),
            connection("Coverage Data", "Scheduling AI"),
            connection("Health Profile", "Scheduling AI"),
            connection("Scheduling AI", "Provider DB"),
            connection("Provider DB", "Calendar Gen"),
            connection("Calendar Gen", "User Interface"),
            connection("Calendar Gen", "Communication"),
        ],
        palette,
        overlay: OverlaySpec {
            label: "Privacy Layer".to_string(),
            sublabel: "PIPEDA".to_string(),
            marker_color: "#D32F2F".to_string(),
            region_fill: "rgba(211, 47, 47, 0.05)".to_string(),
            region_stroke: "rgba(211, 47, 47, 0.3)".to_string(),
        },
    }
}

fn journey() -> JourneyData {
    let palette: IndexMap<String, String> = [
        ("start", "#1FB8CD"),
        ("action", "#5D878F"),
        ("ai", "#13343B"),
        ("review", "#ECEBD5"),
        ("decision", "#1FB8CD"),
        ("monitoring", "#5D878F"),
        ("end", "#1FB8CD"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    JourneyData {
        title: "HealthSync User Journey".to_string(),
        steps: vec![
            step(1, "Welcome Landing", "Welcome", "User arrives at HealthSync AI", StepKind::Start, "30 seconds"),
            step(2, "Upload Insurance", "Upload Docs", "Upload policy document", StepKind::Action, "2 minutes"),
            step(3, "AI Processing", "AI Process", "OCR extracts coverage data", StepKind::Ai, "30 seconds"),
            step(4, "Review Coverage", "Review Plan", "Verify extracted information", StepKind::Review, "1 minute"),
            step(5, "Health Questionnaire", "Health Survey", "Answer preference questions", StepKind::Action, "5 minutes"),
            step(6, "AI Profile Generation", "AI Profile", "Create health profile", StepKind::Ai, "15 seconds"),
            step(7, "View Annual Calendar", "View Calendar", "See proposed appointments", StepKind::Review, "3 minutes"),
            step(8, "Appointment Details", "Appt Details", "Review provider information", StepKind::Review, "2 minutes"),
            step(9, "Make Changes?", "Accept/Modify?", "Accept or modify appointments", StepKind::Decision, "1 minute"),
            step(10, "Send to Providers", "Send Requests", "Submit appointment requests", StepKind::Action, "30 seconds"),
            step(11, "Track Status", "Track Status", "Monitor appointment confirmations", StepKind::Monitoring, "Ongoing"),
            step(12, "Confirmation", "Confirmation", "Receive provider responses", StepKind::End, "24-48 hours"),
        ],
        palette,
    }
}

fn reports() -> ReportData {
    ReportData {
        features: vec![
            feature("Insurance Processing", "OCR Document Upload", "Automated data entry", 15),
            feature("Insurance Processing", "Coverage Extraction", "Instant coverage analysis", 10),
            feature("Insurance Processing", "Insurance Validation", "Error reduction", 5),
            feature("Health Preferences", "Adaptive Questionnaire", "Personalized care", 20),
            feature("Health Preferences", "Health Profile Generation", "Tailored recommendations", 10),
            feature("Health Preferences", "Preference Learning", "Improved accuracy", 5),
            feature("AI Scheduling", "Annual Calendar Creation", "Proactive scheduling", 60),
            feature("AI Scheduling", "Provider Matching", "Optimal provider matching", 30),
            feature("AI Scheduling", "Appointment Optimization", "Reduced conflicts", 15),
            feature("User Experience", "Responsive Web Design", "Easy access", 5),
            feature("User Experience", "Real-time Updates", "Real-time information", 10),
            feature("User Experience", "Multi-device Support", "Convenience", 5),
            feature("Privacy & Security", "PIPEDA Compliance", "Data protection", 30),
            feature("Privacy & Security", "Data Encryption", "Secure handling", 20),
            feature("Privacy & Security", "User Consent Management", "Transparent control", 10),
            feature("Provider Integration", "Provider Communication", "Streamlined booking", 25),
            feature("Provider Integration", "Appointment Confirmation", "Confirmed appointments", 15),
        ],
        roi: vec![
            roi("Time Saved per User (hours/year)", 0.0, 8.5, 8.5),
            roi("Missed Appointments Reduction (%)", 0.0, 25.0, 25.0),
            roi("Administrative Cost Savings ($/user/year)", 0.0, 150.0, 150.0),
            roi("Patient Satisfaction Improvement (%)", 70.0, 90.0, 20.0),
            roi("Provider Efficiency Gain (%)", 60.0, 85.0, 25.0),
            roi("Healthcare Utilization Optimization (%)", 65.0, 85.0, 20.0),
            roi("User Adoption Rate (%)", 0.0, 75.0, 75.0),
            roi("System Accuracy Rate (%)", 75.0, 95.0, 20.0),
            roi("Privacy Compliance Score (%)", 80.0, 98.0, 18.0),
            roi("Provider Integration Success (%)", 40.0, 80.0, 40.0),
        ],
        tech_specs: vec![
            tech_spec(
                "Frontend Framework",
                "React.js with responsive design",
                "Cross-platform accessibility",
            ),
            tech_spec(
                "Insurance OCR Engine",
                "Advanced OCR with ML validation",
                "95% accuracy in coverage extraction",
            ),
            tech_spec(
                "AI Questionnaire System",
                "Adaptive AI with natural language processing",
                "Learns from user responses",
            ),
            tech_spec(
                "Scheduling Algorithm",
                "Multi-objective optimization engine",
                "Optimizes for cost, location, and preference",
            ),
            tech_spec(
                "Database Architecture",
                "Encrypted cloud storage with local caching",
                "Secure, scalable data management",
            ),
            tech_spec(
                "Security Implementation",
                "End-to-end encryption, PIPEDA compliant",
                "Meets Canadian healthcare regulations",
            ),
            tech_spec(
                "Provider API Integration",
                "RESTful APIs with healthcare standards",
                "Real-time provider communication",
            ),
            tech_spec(
                "Calendar Interface",
                "Interactive annual view with drag-drop",
                "Visual appointment management",
            ),
            tech_spec(
                "Mobile Responsiveness",
                "Progressive Web App (PWA) ready",
                "Works on all devices seamlessly",
            ),
            tech_spec(
                "Privacy Compliance",
                "Built-in privacy controls and audit logs",
                "Transparent data handling",
            ),
        ],
    }
}
