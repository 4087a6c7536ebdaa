//! Anger and frustration.

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
        "I can feel how frustrated you are, and it's completely okay to feel this way. 💫 Anger usually means something important to you got stepped on. Let's breathe together for a second before anything else. What happened?",
        &[
            "🚶 Walk away for 10 minutes if you can - distance helps",
            "✍️ Write down everything you want to say, then tear the paper up",
            "🎧 Blast a song and let some energy out",
            "💦 Splash cold water on your face",
            "👂 Talk to someone who will just listen",
        ],
    ),
    (
        "Ugh, that sounds really annoying. 😤 Your feelings make sense. It's what we do next that matters, and you get to choose that calmly. Do you want to vent first? I'm here for it.",
        &[
            "🌬️ Take three slow breaths before replying to anyone",
            "🏀 Move your body - run, dance, shoot hoops",
            "📵 Don't send that message yet - sleep on it",
            "🧑‍🤝‍🧑 Tell a trusted adult if someone is treating you unfairly",
            "💝 Being angry doesn't make you a bad person",
        ],
    ),
];

const YOUNG_ADULT: Table = &[
    (
        "I can sense the frustration in your words, and it's completely okay to feel this way. 💫 Take a deep breath with me... in through your nose... and out through your mouth. Sometimes anger is just hurt wearing a loud jacket. What happened that made you feel this way?",
        &[
            "🚶 Step away for 10 minutes if you can",
            "✍️ Write down what you're feeling, then tear the paper",
            "🌬️ Take three deep breaths right now",
            "🏋️ Burn off the energy with a quick workout",
            "👂 Talk to someone who will just listen",
        ],
    ),
    (
        "That sounds maddening, honestly. 😤 It's fair to be upset. Let's give the feeling some room so it doesn't make decisions for you. What part of this is bothering you the most?",
        &[
            "⏸️ Pause before responding to the person involved",
            "📝 Separate what happened from the story you're telling yourself",
            "💦 Cold water or fresh air can cool the body fast",
            "🎯 Decide what outcome you actually want",
            "💝 You're allowed to set boundaries",
        ],
    ),
];

const ADULT: Table = &[
    (
        "I can hear how frustrated you are, and that's completely valid. 💫 Anger often shows up when we feel unheard or stretched too thin. Let's breathe together for a moment. What happened?",
        &[
            "🚶 Step outside for a few minutes before you respond",
            "🌬️ Breathe in for 4, out for 6, a few times",
            "✍️ Write the unsent letter - say it all on paper",
            "🗣️ Use 'I feel' statements when you do talk it through",
            "👂 Find someone who will listen without fixing",
        ],
    ),
    (
        "That would frustrate anyone. 😤 You're carrying a lot, and this pushed you over the edge. It's okay. Once the heat settles a little, we can think about what you need. Do you want to tell me more?",
        &[
            "⏸️ Give it a night before making big decisions",
            "🏃 Physical activity helps clear built-up tension",
            "🧭 Ask yourself what boundary was crossed",
            "💦 Cool water on your wrists can calm you quickly",
            "💝 Your anger is information, not a flaw",
        ],
    ),
];

const SENIOR: Table = &[
    (
        "I can hear the frustration in your words, and it's entirely understandable. 💫 Let's take a slow breath together. Feeling unheard or disrespected hurts at any age. What happened?",
        &[
            "🚶 A short walk can help the feeling settle",
            "🌬️ Breathe slowly and let your shoulders drop",
            "✍️ Put your thoughts on paper before speaking",
            "☕ Make a cup of tea and give yourself a quiet moment",
            "👂 Share it with someone you trust",
        ],
    ),
    (
        "That sounds genuinely irritating. 😤 You have every right to feel upset. With all your experience, you know the heat will pass - but it's still hard in the moment. What would help you feel more at peace?",
        &[
            "⏸️ Wait until tomorrow to address it, if you can",
            "🌷 Spend a little time somewhere calm",
            "📞 Talk it over with a friend",
            "🧭 Decide what matters most to you in this",
            "💝 Your feelings deserve respect",
        ],
    ),
];
