// Crisis resources, quick coping techniques and the surfacing hook

use serde::Serialize;
use tracing::warn;

use crate::random::{choose, RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
    pub availability: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopingTechnique {
    pub name: &'static str,
    pub steps: &'static str,
}

pub const CRISIS_RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        name: "National Mental Health Crisis Hotline",
        contact: "1553",
        availability: Some("24/7, free call"),
    },
    CrisisResource {
        name: "Natasha Goulbourn Foundation Hopeline",
        contact: "(02) 8804-4673",
        availability: None,
    },
    CrisisResource {
        name: "Emergency Services",
        contact: "911",
        availability: None,
    },
    CrisisResource {
        name: "National Center for Mental Health Crisis Hotline",
        contact: "0917-899-8727",
        availability: None,
    },
    CrisisResource {
        name: "In Touch Community Services Crisis Line",
        contact: "(02) 8893-7603",
        availability: None,
    },
    CrisisResource {
        name: "Philippine Mental Health Association",
        contact: "(02) 8921-4958",
        availability: None,
    },
    CrisisResource {
        name: "Mind You Mental Health",
        contact: "0917-709-3556",
        availability: None,
    },
    CrisisResource {
        name: "Manila Lifeline Centre",
        contact: "(02) 896-9191",
        availability: None,
    },
    CrisisResource {
        name: "DOH Mental Health Program",
        contact: "1553",
        availability: None,
    },
    CrisisResource {
        name: "Globe Telecom's GCash Helpline",
        contact: "2882",
        availability: None,
    },
];

pub const QUICK_COPING_TECHNIQUES: &[CopingTechnique] = &[
    CopingTechnique {
        name: "5-4-3-2-1 Grounding",
        steps: "Name 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, 1 thing you can taste",
    },
    CopingTechnique {
        name: "Box Breathing",
        steps: "Breathe in for 4 counts, hold for 4 counts, breathe out for 4 counts, hold for 4 counts. Repeat 4 times.",
    },
    CopingTechnique {
        name: "Temperature Change",
        steps: "Hold an ice cube or splash cold water on your face to reset your nervous system",
    },
    CopingTechnique {
        name: "Progressive Muscle Relaxation",
        steps: "Tense and then release each muscle group from your toes to your head",
    },
];

/// Phrases that surface crisis resources whatever reply path is taken
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "want to die",
    "harm myself",
    "not worth living",
    "better off dead",
    "can't take it anymore",
];

pub fn contains_crisis_phrase(text: &str) -> bool {
    let text = text.to_lowercase();
    CRISIS_PHRASES.iter().any(|phrase| text.contains(phrase))
}

pub fn random_technique(random: &dyn RandomSource) -> CopingTechnique {
    *choose(random, QUICK_COPING_TECHNIQUES)
}

/// Hotline list plus one technique to try right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisAlert {
    pub technique: CopingTechnique,
    pub resources: Vec<CrisisResource>,
}

impl CrisisAlert {
    pub fn new(random: &dyn RandomSource) -> Self {
        Self {
            technique: random_technique(random),
            resources: CRISIS_RESOURCES.to_vec(),
        }
    }
}

/// Receives alerts when a turn calls for crisis resources
pub trait CrisisNotifier: Send + Sync {
    fn surface(&self, alert: &CrisisAlert);
}

/// Records the alert in the log; delivery happens with the turn response
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl CrisisNotifier for LoggingNotifier {
    fn surface(&self, alert: &CrisisAlert) {
        warn!(
            technique = alert.technique.name,
            resources = alert.resources.len(),
            "Surfacing crisis resources"
        );
    }
}
