//! Relationship concerns.

use super::Table;
use crate::types::AgeGroup;

pub(super) fn table(age: AgeGroup) -> Table {
    match age {
        AgeGroup::Teen => TEEN,
        AgeGroup::YoungAdult => YOUNG_ADULT,
        AgeGroup::Adult => ADULT,
        AgeGroup::Senior => SENIOR,
    }
}

const TEEN: Table = &[
    (
        "Friendships and crushes can be so beautiful and so hard at the same time, can't they? 💝 Whatever happened, your feelings are real and they matter. Do you want to tell me about it?",
        &[
            "💗 Give yourself time to feel before reacting",
            "📵 Don't post about it online while you're upset",
            "🧑‍🤝‍🧑 Talk to a friend who's outside the situation",
            "👪 A parent or trusted adult may have been through this too",
            "🤲 You deserve to be treated with kindness",
        ],
    ),
    (
        "Fights with friends or people we care about can hurt so much. 💫 It doesn't mean the relationship is over. Let's slow down and think about what you actually need. What happened?",
        &[
            "📝 Write down what you'd really like to say",
            "🌬️ Wait until you're calm before talking it out",
            "👂 Try to hear their side too, when you're ready",
            "🧘 Take some time for yourself",
            "💝 You are worthy of good friends",
        ],
    ),
];

const YOUNG_ADULT: Table = &[
    (
        "Relationships can be so beautiful and so hard at the same time, can't they? 💝 I hear the hurt in your words. All relationships have difficult moments - it doesn't mean anything is broken. Would you like to talk about what happened?",
        &[
            "💗 Give yourself space to feel before reacting",
            "📝 Write down what you'd really like to say",
            "🤲 Remember that you deserve to be treated with kindness",
            "👥 Talk to someone who will support you",
            "🧘 It's okay to take time for yourself",
        ],
    ),
    (
        "Breakups and arguments can shake everything. 💫 It makes sense that you're hurting. Let's take it one step at a time. What's the hardest part right now?",
        &[
            "📵 Take a break from checking their social media",
            "🧑‍🤝‍🧑 Spend time with friends who lift you up",
            "✍️ Journal what you need from a relationship",
            "🌿 Keep up small routines - sleep, meals, walks",
            "💝 Healing isn't linear, and that's okay",
        ],
    ),
];

const ADULT: Table = &[
    (
        "Relationships carry so much of our hearts, and when they're strained it affects everything. 💝 I hear how much you care. Difficult seasons don't mean something is broken. Would you like to talk about what's been happening?",
        &[
            "💗 Give yourself space to feel before responding",
            "🗣️ Use calm 'I feel' statements when you talk",
            "🤝 Consider a counsellor for couples or families",
            "👥 Lean on friends who support you",
            "🤲 You deserve respect and kindness",
        ],
    ),
    (
        "Conflict with someone you love can be exhausting. 💫 It's okay to step back and catch your breath. What do you most need from them, and from yourself, right now?",
        &[
            "⏸️ Pause the argument and agree to return to it",
            "📝 Write down the core issue in one sentence",
            "👂 Listen for the need behind their words",
            "🧘 Protect some time for yourself",
            "💝 Your feelings deserve to be heard too",
        ],
    ),
];

const SENIOR: Table = &[
    (
        "The people we love shape our lives, and when things are hard with them it touches everything. 💝 Your feelings are so valid. Would you like to tell me what's been happening?",
        &[
            "💗 Take a quiet moment before responding",
            "📞 Talk things over with a trusted friend",
            "✍️ Write a letter, even if you never send it",
            "🤝 Family counselling can help at any stage of life",
            "🤲 You deserve kindness and respect",
        ],
    ),
    (
        "Disagreements with family or old friends can weigh on the heart. 💫 Years of love don't disappear in one argument. What would you like to see happen?",
        &[
            "⏸️ Give it a little time before reaching out",
            "👂 Try to understand where they're coming from",
            "🍵 Suggest a calm chat over tea",
            "👥 Spend time with people who bring you peace",
            "💝 You are deeply valued",
        ],
    ),
];
