//! Work pressure.

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
        "Juggling a job alongside everything else at your age takes real effort. 🤗 It's okay to feel stretched. You're learning how to handle responsibility, and that's hard. What's making work feel heavy right now - the hours, the people, or something else?",
        &[
            "🗓️ Keep your shifts and school deadlines on one calendar",
            "💬 It's okay to tell a manager when you can't take more hours",
            "🧑‍🤝‍🧑 Talk to a parent or trusted adult about what's happening",
            "😴 Don't let shifts eat into your sleep",
            "✨ You're allowed to put school and health first",
        ],
    ),
    (
        "That sounds like a lot of pressure for one person. 💫 I'm really glad you shared it with me. Work should never make you feel small. Do you want to talk about what happened today?",
        &[
            "📝 Write down what's expected of you so it's clear",
            "🙋 Ask questions when instructions are confusing - that's allowed",
            "🚶 Take your full break, away from your station",
            "🎧 Decompress after work with something you enjoy",
            "💝 You're doing your best, and that is enough",
        ],
    ),
];

const YOUNG_ADULT: Table = &[
    (
        "My dear, early-career pressure can feel relentless. 🤗 I can feel how much this is weighing on you. You don't have to prove everything at once. Your peace of mind comes first - no job is worth your wellbeing. What part of work feels heaviest right now?",
        &[
            "🌿 Set small boundaries - even a 5-minute walk helps",
            "📝 Make a list and do just ONE thing at a time",
            "💬 Ask your manager which task matters most today",
            "🏠 Leave work at work; your home is your sanctuary",
            "✨ Tomorrow is a new day with new possibilities",
        ],
    ),
    (
        "Deadlines stacking up can make it hard to breathe. 💫 That feeling of never catching up is exhausting, and it isn't a sign you're failing. Let's look at this together. Which deadline is closest, and what would make it lighter?",
        &[
            "⏱️ Time-box tasks so no single one swallows your day",
            "🔕 Turn off work notifications after hours",
            "🤝 Lean on a colleague you trust",
            "🥗 Eat lunch away from your desk",
            "🌈 Your career is long - this week is one small part of it",
        ],
    ),
];

const ADULT: Table = &[
    (
        "Work can be so demanding these days, especially with everything else you carry. 🤗 Remember that you're doing your best, and that's always enough. No job is worth your health. What part of work feels heaviest right now? Let's talk it through together.",
        &[
            "🌿 Set one firm boundary this week and keep it",
            "📝 Prioritise three tasks a day and let the rest wait",
            "💬 Have an honest conversation about workload with your manager",
            "🏠 Create a ritual that marks the end of your workday",
            "✨ Rest is part of doing good work, not a reward for it",
        ],
    ),
    (
        "Pressure from a boss or a deadline can follow us home and into our sleep. 💫 It makes sense that you're feeling it. You've handled hard seasons before. What would help most right now - venting, or planning a next step?",
        &[
            "📋 Write tomorrow's plan before you log off tonight",
            "🙅 Practise saying 'not this week' to new requests",
            "🚶 Take a short walk at lunch to reset",
            "👥 Talk to someone outside work about how you're feeling",
            "💝 Your value isn't measured by your output",
        ],
    ),
];

const SENIOR: Table = &[
    (
        "Carrying work pressure at this stage of life takes a great deal of strength. 🤗 You've given so much over the years, and it's natural to feel weary of it. What's making work difficult at the moment?",
        &[
            "🌿 Pace your day with regular, unhurried breaks",
            "📝 Delegate where you can - you've earned the trust",
            "💬 Share your concerns with someone you respect",
            "🏡 Keep evenings for rest and the people you love",
            "✨ Your experience is a gift to those around you",
        ],
    ),
    (
        "Deadlines and demands can feel heavier as the years go on. 💫 That isn't weakness - it's your body and mind asking for balance. Would you like to talk about what an easier week might look like?",
        &[
            "🗓️ Keep a simple list of what truly must be done",
            "🙋 Ask for the support or tools that would make work easier",
            "🚶 A gentle walk after work helps you let go of the day",
            "😴 Guard your sleep, especially before busy days",
            "💝 You have nothing left to prove",
        ],
    ),
];
