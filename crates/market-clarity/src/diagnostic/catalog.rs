use super::domain::{Dimension, Question, QuestionId};

pub const INTERNAL_CUSTOMER_IDENTIFICATION: &str = "internal-customer-identification";
pub const VP_TRANSLATION: &str = "vp-translation";
pub const ADOPTION_COST_AWARENESS: &str = "adoption-cost-awareness";
pub const TRIANGLE_HEALTH: &str = "triangle-health";
pub const CHANNEL_CLASSIFICATION_ALIGNMENT: &str = "channel-classification-alignment";

/// Number of questions across every dimension.
pub const QUESTION_COUNT: usize = 18;

/// The questionnaire, in presentation order.
pub static DIMENSIONS: &[Dimension] = &[
    Dimension {
        id: INTERNAL_CUSTOMER_IDENTIFICATION,
        name: "Internal Customer Identification",
        subtitle: "Can you name the people — not functions — who will change their behaviour if this succeeds?",
        questions: &[
            Question {
                id: QuestionId(1),
                text: "Can you name at least three people — by name and role — inside the organisation who will need to change how they work if this initiative succeeds?",
            },
            Question {
                id: QuestionId(2),
                text: "Do you know specifically what those people are currently doing on Monday morning that this initiative would change?",
            },
            Question {
                id: QuestionId(3),
                text: "Is there evidence that these people are actively experiencing the problem this initiative is meant to solve — not just that they've agreed it sounds valuable when asked?",
            },
            Question {
                id: QuestionId(4),
                text: "Can you clearly distinguish the people who would need to change their behaviour (who will adopt) from those who fund the initiative (sponsors) and those who simply have an opinion on it (stakeholders)?",
            },
        ],
        threshold: 2,
        reflection: "Your internal customer is still a function, not a person. Functions don't change their Monday morning. People do.",
        reflection_prompt: "If you emailed three people by name and asked them what they would need to stop doing to make room for this initiative, who would those three people be — and do you already know their answer?",
    },
    Dimension {
        id: VP_TRANSLATION,
        name: "Value Proposition Translation",
        subtitle: "Is the value stated in the internal customer's vocabulary — not yours?",
        questions: &[
            Question {
                id: QuestionId(5),
                text: "Can you state why this initiative should matter to the people who would need to adopt it — using the exact words they use to describe their own work, with no strategy, innovation, or programme terminology?",
            },
            Question {
                id: QuestionId(6),
                text: "Have you stated the case for this initiative directly to at least one person who would need to adopt it — and did they recognise themselves in it without being prompted?",
            },
            Question {
                id: QuestionId(7),
                text: "Does your case for this initiative explain why it is better than what those people are already doing — on criteria they actually care about, not criteria you think they should care about?",
            },
            Question {
                id: QuestionId(8),
                text: "Have you considered what happens to a person's career and standing if they adopt this initiative and it is then discontinued — and does your case for adoption account for that risk?",
            },
        ],
        threshold: 2,
        reflection: "Your value proposition exists in your language, not theirs. If the internal customer can't repeat it without your slides, you haven't translated. You've presented.",
        reflection_prompt: "If one of your internal customers had to explain this initiative to their team tomorrow — with no documents from you — what words would they use? Have you ever heard those words?",
    },
    Dimension {
        id: ADOPTION_COST_AWARENESS,
        name: "Adoption Cost Awareness",
        subtitle: "Has the initiative team counted what adoption will cost the people whose behaviour needs to change?",
        questions: &[
            Question {
                id: QuestionId(9),
                text: "Have you estimated how much time and effort it will take for people to learn and integrate this initiative into their working week — and is that estimate based on what they say, not what you assume?",
            },
            Question {
                id: QuestionId(10),
                text: "Have you considered the career risk of adoption: whether being publicly associated with this initiative could create exposure for someone if it stalls, or mark them as 'the innovation person' in a culture that rewards operational delivery?",
            },
            Question {
                id: QuestionId(11),
                text: "Have you mapped what people will have to stop doing — or stop prioritising — while adopting this initiative, and whether those activities affect their performance review?",
            },
            Question {
                id: QuestionId(12),
                text: "Have you considered what it would cost people to revert to their previous way of working if this initiative is discontinued — and have you taken steps to make that reversal easier or less risky?",
            },
        ],
        threshold: 2,
        reflection: "The initiative team is counting the value. The internal customer is counting the cost. You've been working with one column. They're working with two.",
        reflection_prompt: "Of the four cost types — workload, political, opportunity, switching — which one has the most power to kill adoption in your specific context? Is that assessment yours, or did an internal customer tell you that?",
    },
    Dimension {
        id: TRIANGLE_HEALTH,
        name: "Triangle Health",
        subtitle: "Is the relationship between your initiative team, your sponsor, and the people you need to adopt this understood and actively managed?",
        questions: &[
            Question {
                id: QuestionId(13),
                text: "Do you understand what the executive sponsor actually needs from this initiative — what success looks like for them personally, and what would cause them to withdraw support — beyond their stated backing?",
            },
            Question {
                id: QuestionId(14),
                text: "Have you had a direct conversation with at least one person who would need to adopt this initiative about why they personally would or would not change how they work?",
            },
            Question {
                id: QuestionId(15),
                text: "Can you identify the most likely way this initiative could fail — well-funded but never actually adopted by the people who matter, genuinely supported by users but without the institutional backing to sustain it, or appearing to progress while no one's actual working patterns are changing — and do you have specific evidence for that assessment?",
            },
        ],
        threshold: 1,
        reflection: "The triangle has three vertices. You're managing two. The one you haven't managed is where the initiative will stall.",
        reflection_prompt: "Which of the three failure modes — funded but not adopted, grassroots without structure, or innovation theatre — is your initiative closest to right now? What evidence supports that answer, and what would have to change before it didn't?",
    },
    Dimension {
        id: CHANNEL_CLASSIFICATION_ALIGNMENT,
        name: "Channel & Classification Alignment",
        subtitle: "Is your approach to reaching internal customers calibrated for what your initiative actually is?",
        questions: &[
            Question {
                id: QuestionId(16),
                text: "Have you clearly defined what kind of change this initiative actually requires — incremental improvement to existing practice, a new capability alongside current work, or a fundamental shift in how people operate — and is that distinction actively shaping how you approach the adoption challenge?",
            },
            Question {
                id: QuestionId(17),
                text: "Is the way you're reaching the people who need to adopt this initiative appropriate for the scale of change it requires — for example, not relying primarily on top-down instruction for something that requires people to fundamentally change how they work?",
            },
            Question {
                id: QuestionId(18),
                text: "Is the effort you've invested in identifying who would adopt this, understanding why they would, and mapping what it will cost them — proportionate to how significant a change this initiative actually requires?",
            },
        ],
        threshold: 1,
        reflection: "Classification isn't a label you apply once and file. It determines everything: who the internal customer is, what the value proposition must do, how to reach them, and how much adoption cost is acceptable before the initiative becomes unviable.",
        reflection_prompt: "If your initiative is transformation-class, are you doing transformation-level Layer 1 work — months of direct customer contact, multi-channel reach, value proposition co-development? Or are you treating it like an optimisation?",
    },
];

pub fn dimension(id: &str) -> Option<&'static Dimension> {
    DIMENSIONS.iter().find(|dimension| dimension.id == id)
}

pub fn question(id: QuestionId) -> Option<(&'static Dimension, &'static Question)> {
    DIMENSIONS.iter().find_map(|dimension| {
        dimension
            .questions
            .iter()
            .find(|question| question.id == id)
            .map(|question| (dimension, question))
    })
}

pub fn questions() -> impl Iterator<Item = &'static Question> {
    DIMENSIONS
        .iter()
        .flat_map(|dimension| dimension.questions.iter())
}
