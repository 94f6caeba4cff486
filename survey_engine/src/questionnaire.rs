//! The fixed script of the M&E questionnaire.

use crate::config::*;

pub const SURVEY_TITLE: &str = "Assessment of Monitoring & Evaluation Strategies on the Performance of Professional Soccer Clubs in Kenya";

pub const CONSENT_TITLE: &str = "Research Consent";

pub const CONSENT_TEXT: &str = "You are invited to participate in a study on how Monitoring & Evaluation (M&E) strategies influence the performance of professional soccer clubs in Kenya.

Your participation is voluntary, and all information provided will be treated confidentially.
You may skip any question or stop at any point. Your honest responses will help improve club management and performance evaluation in Kenya.";

pub const CONSENT_QUESTION: &str =
    "I have read and understood the above, and I voluntarily agree to participate.";

pub const THANK_YOU_TEXT: &str = "Your response has been successfully recorded and securely stored.
Your contribution helps improve the understanding and effectiveness of M&E in Kenyan soccer clubs.
We truly appreciate your time and input.";

const SECTION_A: &[Question] = &[
    Question {
        id: "club_name",
        prompt: "Club’s name",
        kind: QuestionKind::Text {
            placeholder: Some("e.g., Gor Mahia, AFC Leopards, Bandari FC"),
        },
    },
    Question {
        id: "league",
        prompt: "League you are participating in",
        kind: QuestionKind::Select {
            placeholder: "— Select your league —",
            options: &["Kenya Premier League", "National Super League", "Other"],
            other: None,
        },
    },
    Question {
        id: "role",
        prompt: "Your role in the club",
        kind: QuestionKind::Select {
            placeholder: "— Select your role —",
            options: &[
                "President",
                "Secretary General",
                "Treasurer",
                "Team Manager",
                "Coach",
                "Player",
                "Performance Analyst",
                OTHER_SPECIFY,
            ],
            other: Some("If Other, specify your role"),
        },
    },
    Question {
        id: "duration_in_club",
        prompt: "How long have you been in the club?",
        kind: QuestionKind::Select {
            placeholder: "— Select duration —",
            options: &[
                "Less than 1 year",
                "1–4 years",
                "5–8 years",
                "More than 8 years",
            ],
            other: None,
        },
    },
];

const SECTION_B: &[Question] = &[
    Question {
        id: "q5_know_M&E",
        prompt: "5. Do you have any idea of monitoring and evaluation in managing a soccer club?",
        kind: QuestionKind::Radio {
            options: &["Yes", "No"],
        },
    },
    Question {
        id: "q6_M&E_system_in_place",
        prompt: "6. Is there a monitoring and evaluation system currently in place in your club?",
        kind: QuestionKind::Radio {
            options: &["Yes", "No", "Not sure"],
        },
    },
    Question {
        id: "q7_M&E_duration",
        prompt: "7. If M&E has been implemented, how long has it been in use?",
        kind: QuestionKind::Select {
            placeholder: "— Select duration —",
            options: &[
                "Less than 1 year",
                "1–3 years",
                "More than 3 years",
                "Not sure",
            ],
            other: None,
        },
    },
    Question {
        id: "q8_aspects",
        prompt: "8. What aspects of your club does M&E focus on?",
        kind: QuestionKind::MultiSelect {
            options: &[
                "Player performance",
                "Staff performance (e.g., coaches, trainers)",
                "Club governance",
                "Financial management",
                "Community involvement",
                OTHER_SPECIFY,
            ],
            other: Some("If Other, specify aspects"),
        },
    },
];

const SECTION_C: &[Question] = &[
    Question {
        id: "q9_effectiveness",
        prompt: "9. To what extent would you say M&E strategies are effective in enhancing club performance?",
        kind: QuestionKind::Radio {
            options: &[
                "Very effective",
                "Moderately effective",
                "Slightly effective",
                "Not effective",
                "Not applicable",
            ],
        },
    },
    Question {
        id: "q10_metrics",
        prompt: "10. What metrics does your club’s M&E system measure?",
        kind: QuestionKind::MultiSelect {
            options: &[
                "Player performance",
                "Financial management",
                "Club administration",
                "Coaching strategies",
                "Fan engagement",
                "Talent scouting",
                OTHER_SPECIFY,
            ],
            other: Some("If Other, specify metrics"),
        },
    },
    Question {
        id: "q11_report_frequency",
        prompt: "11. When are M&E reports conducted?",
        kind: QuestionKind::Select {
            placeholder: "— Select frequency —",
            options: &[
                "Weekly",
                "Monthly",
                "Quarterly",
                "Annually",
                "Not applicable",
            ],
            other: None,
        },
    },
    Question {
        id: "q12_most_improvement",
        prompt: "12. Where has M&E brought the most improvement?",
        kind: QuestionKind::MultiSelect {
            options: &[
                "Player performance",
                "Financial management",
                "Club administration",
                "Coaching strategies",
                "Talent scouting",
                "Fan engagement",
                OTHER_SPECIFY,
            ],
            other: Some("If Other, specify improvements"),
        },
    },
];

const SECTION_D: &[Question] = &[
    Question {
        id: "qD_challenges",
        prompt: "What challenges has your club faced in implementing M&E?",
        kind: QuestionKind::MultiSelect {
            options: &[
                "Lack of funding",
                "Inadequate training",
                "Resistance from staff",
                "Lack of technology",
                "Time constraints",
                OTHER_SPECIFY,
            ],
            other: Some("If Other, specify challenges"),
        },
    },
    Question {
        id: "qD_measures",
        prompt: "What measures does the club take to handle the challenges above?",
        kind: QuestionKind::TextArea,
    },
    Question {
        id: "q_do_more_detailed_M&E",
        prompt: "Do you believe a more detailed M&E system would improve performance?",
        kind: QuestionKind::Radio {
            options: &[
                "Strongly agree",
                "Agree",
                "Neutral",
                "Disagree",
                "Strongly disagree",
            ],
        },
    },
];

const SECTION_E: &[Question] = &[
    Question {
        id: "q16_resources",
        prompt: "What resources would make your M&E system better?",
        kind: QuestionKind::MultiSelect {
            options: &[
                "More funding",
                "Better technology",
                "External experts",
                "Staff training",
                "Collaboration with other clubs",
                OTHER_SPECIFY,
            ],
            other: Some("If Other, specify"),
        },
    },
    Question {
        id: "q17_concrete_changes",
        prompt: "What concrete changes could improve your club’s M&E system?",
        kind: QuestionKind::TextArea,
    },
    Question {
        id: "q18_other_comments",
        prompt: "Any additional comments?",
        kind: QuestionKind::TextArea,
    },
];

pub static SECTIONS: [Section; 5] = [
    Section {
        step: Step::Background,
        title: "Section A: Background Information",
        caption: Some("This section helps us understand your role and background."),
        help: None,
        questions: SECTION_A,
    },
    Section {
        step: Step::MEAwareness,
        title: "Section B: Monitoring and Evaluation (M&E) Strategies",
        caption: None,
        help: Some((
            "What is M&E?",
            "Monitoring and Evaluation (M&E) involves tracking activities and assessing performance to improve club management and outcomes.",
        )),
        questions: SECTION_B,
    },
    Section {
        step: Step::Effectiveness,
        title: "Section C: Effectiveness of M&E Strategies",
        caption: Some("Think of how much M&E has helped improve your club’s performance, organization, or decision-making."),
        help: None,
        questions: SECTION_C,
    },
    Section {
        step: Step::Implementation,
        title: "Section D: Implementing M&E Strategies",
        caption: None,
        help: None,
        questions: SECTION_D,
    },
    Section {
        step: Step::Suggestions,
        title: "Section E: Suggestions for Improvement",
        caption: None,
        help: None,
        questions: SECTION_E,
    },
];

/// The page shown for a step. The confirmation step has none.
pub fn section(step: Step) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.step == step)
}

/// Every key a completed response carries, timestamp excluded, in column order.
pub fn all_keys() -> Vec<&'static str> {
    SECTIONS.iter().flat_map(|s| s.keys()).collect()
}
