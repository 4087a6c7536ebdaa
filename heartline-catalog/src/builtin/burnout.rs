//! Tiredness, exhaustion, burnout.

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
        "Oh sweetheart, you sound so tired. 🌙 Growing up is a lot of work, and your body needs more rest than people think. It's not lazy to rest - it's necessary. When did you last have a proper break?",
        &[
            "😴 Aim for 8-10 hours of sleep - teens really need it",
            "📵 Put your phone away an hour before bed",
            "🥗 Eat something nourishing, your body needs fuel",
            "🐢 Do only what's necessary today",
            "💝 Resting is taking care of yourself",
        ],
    ),
    (
        "Feeling drained is your body's way of asking for a pause. 💫 You're allowed to take it. Let's think about what could come off your plate, even just for today. What's wearing you out most?",
        &[
            "☁️ Even 10 minutes of doing nothing helps reset",
            "💧 Drink some water and get a little fresh air",
            "🗓️ Tell a parent or teacher if your schedule is too full",
            "🎮 Pick restful fun, not more screen time at midnight",
            "🌈 Tomorrow can be gentler",
        ],
    ),
];

const YOUNG_ADULT: Table = &[
    (
        "Oh sweetheart, you sound so tired. Your body and mind are telling you they need rest. 🌙 It's not weak to rest - it's necessary, like charging a phone. You can't pour from an empty cup. When did you last take time just for yourself?",
        &[
            "🐢 Take today slowly - do only what's absolutely necessary",
            "🛌 Sleep is medicine - rest early tonight",
            "☁️ Even 10 minutes of doing nothing helps reset",
            "🥗 Eat something nourishing, your body needs fuel",
            "🚫 Say 'no' to one thing today - protect your energy",
        ],
    ),
    (
        "Burnout sneaks up when we keep pushing past our limits. 💫 You don't have to earn rest. Let's talk about what's been draining you and what could give you a little breathing room.",
        &[
            "🗓️ Block a real day off and protect it",
            "🔕 Mute notifications for an evening",
            "🚶 Gentle movement beats another coffee",
            "🤝 Ask for help with one task this week",
            "💝 Rest is productive too",
        ],
    ),
];

const ADULT: Table = &[
    (
        "You sound completely worn out. 🌙 When we carry work, family, and everything in between, exhaustion is a signal, not a failure. You can't pour from an empty cup. What's been draining you the most?",
        &[
            "🐢 Do only the essentials today",
            "🛌 Go to bed early tonight, without guilt",
            "🤝 Hand off one responsibility, even temporarily",
            "🥗 Eat something nourishing and drink water",
            "🚫 Say 'no' to one request this week",
        ],
    ),
    (
        "That kind of tiredness goes deeper than a bad night's sleep. 💫 Burnout is real, and it deserves attention. Let's think about where you could find a little rest. What would help most right now?",
        &[
            "🗓️ Schedule a proper break and treat it as non-negotiable",
            "☁️ Take 10 quiet minutes without a screen",
            "🚶 A short walk outdoors can restore some energy",
            "🩺 If exhaustion lingers, check in with your doctor",
            "💝 You matter as much as the things you take care of",
        ],
    ),
];

const SENIOR: Table = &[
    (
        "You sound very tired, my dear. 🌙 Our bodies ask for more rest as the years go by, and listening to them is wisdom, not weakness. How have you been sleeping?",
        &[
            "🛌 Rest when you need to - a short afternoon nap is fine",
            "🍵 Keep a calm evening routine",
            "🥗 Eat regular, nourishing meals",
            "🩺 Mention ongoing fatigue to your doctor",
            "💝 Go gently with yourself today",
        ],
    ),
    (
        "Feeling drained is hard, especially when you're used to doing so much. 💫 You've earned the right to slow down. What could you set aside today to give yourself some rest?",
        &[
            "🐢 Take the day at your own pace",
            "🌷 Sit somewhere peaceful for a while",
            "🤝 Let family or friends help with errands",
            "💧 Drink enough water through the day",
            "🌈 Tomorrow is a fresh start",
        ],
    ),
];
