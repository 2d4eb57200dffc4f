use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CostOfInactionCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactCard {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub website: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToActionCopy {
    pub heading: &'static str,
    pub body: &'static str,
    pub callout: &'static str,
    pub triangle_reminder: &'static str,
    pub contact: ContactCard,
}

pub static COI_COPY: CostOfInactionCopy = CostOfInactionCopy {
    heading: "The Downstream Cost of Skipping Layer 1",
    intro: "Layer 1 failures don't surface as Layer 1 problems. They surface at Layer 2 as low pilot adoption, at Layer 3 as results that can't be replicated, and at Layer 4 as organisations reverting to previous behaviours after the programme ends.",
    body: "By the time the Layer 1 failure is visible, the initiative has already consumed significant resources — pilot time, sponsor goodwill, team credibility — trying to solve a Layer 2 or Layer 3 problem that isn't one. Initiative teams misattribute the cause. They invest in change management (the symptom) rather than internal market clarity (the cause). The question this diagnostic surfaces is not \"how do we fix adoption?\" It is: \"Do we have an internal market to adopt anything?\"",
};

pub static CTA_COPY: CallToActionCopy = CallToActionCopy {
    heading: "What This Diagnostic Surfaces — and What It Can't Fix",
    body: "This tool reveals where your internal market clarity has structural gaps. It doesn't close them — because resolution requires direct, substantive contact with the people who would need to change their behaviour: observing them in their operational environment, building relationships, and co-developing the value proposition in their vocabulary.\n\nSelf-assessment can name the gap. It cannot bridge it.",
    callout: "If your profile shows gaps in two or more dimensions, a structured Layer 1 workshop can help identify what has to be true before any pilot is designed — and what kind of direct customer work would get you there.",
    triangle_reminder: "This diagnostic focuses on Layer 1. If your results raise questions across multiple layers — about pilot design, scaling, or embedding — the Corporate Innovation Diagnostic provides a full-frame view of where your organisation stands across the entire Critical Path.",
    contact: ContactCard {
        name: "Alexandra N.",
        title: "Founder, Aieutics",
        subtitle: "Executive coaching & strategic transformation",
        website: "aieutics.com",
        email: "hello@aieutics.com",
    },
};

pub const ATTRIBUTION: &str = "Developed by Aieutics from the Critical Path Layers (Corporate) framework. Based on patterns observed across executive coaching, corporate accelerator programmes, and consulting engagements.";

/// Dimensions with gaps needed before the workshop callout is shown.
pub const WORKSHOP_CALLOUT_MIN_GAPS: usize = 2;
