//! Default reply when no category matched.

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
        "Thanks for talking to me. 🤍 You don't need the perfect words - I'm just happy you're here. How are you feeling right now?",
        &[
            "🌬️ Take three deep breaths right now",
            "💧 Drink a glass of water",
            "🎵 Put on a song you like",
            "💝 Be gentle with yourself",
            "🌈 I'm proud of you for reaching out",
        ],
    ),
    (
        "I'm here, and I'm listening. 🌸 Whatever's on your mind, big or small, it matters. Want to tell me more?",
        &[
            "✍️ Write down one thing on your mind",
            "🚶 Stretch or move around for a minute",
            "🌟 You're doing the best you can",
            "📞 Check in with a friend today",
            "🌈 I'm proud of you for reaching out",
        ],
    ),
    (
        "Hey, I hear you. 💫 There's no right or wrong way to feel. Take your time - what's going on?",
        &[
            "🌬️ Slow your breathing for a moment",
            "💧 Grab some water",
            "🌱 Step outside for a minute",
            "💝 This moment is yours",
            "🌈 I'm here whenever you want to talk",
        ],
    ),
];

const YOUNG_ADULT: Table = &[
    (
        "Thank you for sharing with me, dear. 🤍 Sometimes just saying things out loud helps us understand our own feelings better. I'm here to listen, not to judge. How are you feeling right now, in this moment?",
        &[
            "🌬️ Take three deep breaths right now",
            "💧 Drink a glass of water - it's self-care",
            "🌟 You're doing the best you can, and that's wonderful",
            "💝 This moment is yours - be gentle with yourself",
            "🌈 I'm proud of you for reaching out",
        ],
    ),
    (
        "I'm here, sweetheart. 🌸 You don't have to have the perfect words. Just being here, reaching out - that's brave. Tell me more about what's on your mind.",
        &[
            "🌬️ Take three deep breaths right now",
            "💧 Drink a glass of water - it's self-care",
            "🌟 You're doing the best you can, and that's wonderful",
            "💝 This moment is yours - be gentle with yourself",
            "🌈 I'm proud of you for reaching out",
        ],
    ),
    (
        "I hear you, love. 💫 Whatever you're feeling right now is valid. There's no right or wrong way to feel. Would you like to tell me more? I'm listening with my whole heart.",
        &[
            "🌬️ Take three deep breaths right now",
            "💧 Drink a glass of water - it's self-care",
            "🌟 You're doing the best you can, and that's wonderful",
            "💝 This moment is yours - be gentle with yourself",
            "🌈 I'm proud of you for reaching out",
        ],
    ),
];

const ADULT: Table = &[
    (
        "Thank you for sharing with me. 🤍 Putting things into words can help us understand them. I'm here to listen, without judgement. How are you feeling right now?",
        &[
            "🌬️ Take three deep breaths right now",
            "💧 Drink a glass of water - it's self-care",
            "🌟 You're doing the best you can",
            "📝 Jot down what's on your mind",
            "🌈 I'm glad you reached out",
        ],
    ),
    (
        "I'm here with you. 🌸 You don't need to have it all figured out. Tell me more about what's on your mind.",
        &[
            "🚶 Take a short break and stretch",
            "🍵 Make yourself a warm drink",
            "💝 This moment is yours - be gentle with yourself",
            "📞 Check in with someone you care about",
            "🌈 I'm glad you reached out",
        ],
    ),
    (
        "I hear you. 💫 Whatever you're feeling is valid. Would you like to tell me more? I'm listening.",
        &[
            "🌬️ Pause and breathe slowly for a minute",
            "💧 Drink some water",
            "🌱 Step outside for some fresh air",
            "🌟 You're doing better than you think",
            "🌈 I'm glad you reached out",
        ],
    ),
];

const SENIOR: Table = &[
    (
        "Thank you for talking with me. 🤍 It's always good to share what's on our minds. How are you feeling today?",
        &[
            "🌬️ Take a few slow, deep breaths",
            "💧 Have a glass of water",
            "🌷 Spend a moment by a sunny window",
            "📞 Call someone you enjoy talking to",
            "🌈 I'm glad you're here",
        ],
    ),
    (
        "I'm here and listening. 🌸 Take all the time you need. What would you like to talk about?",
        &[
            "🍵 Make yourself a cup of tea",
            "🎵 Play some music you love",
            "🚶 Take a gentle stroll if you feel up to it",
            "💝 Be kind to yourself today",
            "🌈 I'm glad you're here",
        ],
    ),
    (
        "I hear you. 💫 Every feeling is welcome here. Would you like to tell me more?",
        &[
            "🌬️ Breathe slowly and relax your shoulders",
            "📖 Enjoy a few pages of a favourite book",
            "🌱 Get a little fresh air",
            "🌟 You're doing wonderfully",
            "🌈 I'm glad you're here",
        ],
    ),
];
