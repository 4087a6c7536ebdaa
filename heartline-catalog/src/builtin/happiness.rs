//! Positive mood.

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
        "Yay, I love hearing that you're happy! 🌟 Tell me everything - what's making today so good?",
        &[
            "📸 Capture the moment - a photo, a note, anything",
            "🧑‍🤝‍🧑 Share the good news with a friend",
            "✍️ Write down what made you smile today",
            "💃 Celebrate with something fun",
            "💝 You deserve days like this",
        ],
    ),
    (
        "That's wonderful! 🌈 Your happiness is contagious. Soak it up - good days are worth noticing. What's the best part?",
        &[
            "🙏 Say thank you to someone who helped make today great",
            "🎵 Make a happy playlist for later",
            "🌱 Notice what helped you feel this way",
            "📓 Start a small gratitude list",
            "✨ Remember this feeling on harder days",
        ],
    ),
];

const YOUNG_ADULT: Table = &[
    (
        "That's so lovely to hear! 🌟 Moments like this are worth savouring. What's been bringing you joy?",
        &[
            "📓 Write down three good things from today",
            "📞 Share the moment with someone you love",
            "🎉 Celebrate the win, big or small",
            "🌱 Notice what helped you get here",
            "💝 You deserve to feel this good",
        ],
    ),
    (
        "I'm so happy for you! 🌈 Good energy like this is a gift - to you and to the people around you. Tell me more about what's going well.",
        &[
            "🙏 Thank someone who's been part of this",
            "📸 Save a reminder of today",
            "🚶 Take a walk and enjoy the feeling",
            "🎵 Put on music that matches your mood",
            "✨ Carry a little of this into tomorrow",
        ],
    ),
];

const ADULT: Table = &[
    (
        "How wonderful! 🌟 With everything life asks of us, feeling happy deserves a proper pause. What's made things feel so good?",
        &[
            "📓 Note what went right today",
            "👪 Share the joy with the people close to you",
            "🎉 Celebrate, even in a small way",
            "🌱 Notice what you'd like more of in your life",
            "💝 Let yourself enjoy it fully",
        ],
    ),
    (
        "That's lovely to hear. 🌈 Happiness often comes from the small things we build day by day, and you've clearly built something good. What's the highlight?",
        &[
            "🙏 Express gratitude to someone today",
            "📸 Capture a memory of this moment",
            "🍽️ Share a meal with someone you care about",
            "🚶 Take a moment outdoors to savour it",
            "✨ Remember this on harder days",
        ],
    ),
];

const SENIOR: Table = &[
    (
        "How lovely to hear you're feeling happy! 🌟 Joy is such a gift at every stage of life. What's brightening your day?",
        &[
            "📞 Share the good news with family or friends",
            "📓 Write down this happy memory",
            "🌷 Enjoy some time outdoors",
            "🎵 Play your favourite music",
            "💝 You deserve every bit of this happiness",
        ],
    ),
    (
        "That warms my heart. 🌈 Thank you for sharing your happiness with me. What made today special?",
        &[
            "🙏 Let someone know they made you smile",
            "📸 Look through photos of other happy days",
            "🍵 Celebrate with a favourite treat",
            "👥 Spend time with people you love",
            "✨ Savour this moment",
        ],
    ),
];
