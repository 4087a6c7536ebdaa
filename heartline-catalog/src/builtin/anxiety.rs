//! Anxiety and worry.

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
        "Oh sweetheart, anxiety can feel so overwhelming. 🦋 You're safe right now, in this moment. Let's breathe together: in for 4... hold for 4... out for 4. What's making you feel so worried?",
        &[
            "🔍 Try 5-4-3-2-1: name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste",
            "🌬️ Breathe slowly - your body will follow",
            "📵 Take a break from scrolling",
            "🧑‍🏫 Tell a trusted adult if the worry won't go away",
            "🌈 This feeling will pass, it always does",
        ],
    ),
    (
        "Feeling nervous is your brain trying to protect you, even when it overdoes it. 💫 That's okay. You're not alone with this. Can you tell me what you're most scared might happen?",
        &[
            "✍️ Write the worry down and put the paper away",
            "🎧 Listen to a calming playlist",
            "🧸 Hold something soft or cold to ground yourself",
            "🚶 Move around a little to shake out the tension",
            "💪 You've gotten through 100% of your hard days so far",
        ],
    ),
];

const YOUNG_ADULT: Table = &[
    (
        "Oh my dear, anxiety can feel so overwhelming. 🦋 I want you to know that you're safe right now, in this moment. Let's breathe together: in for 4 counts... hold for 4... out for 4. What's worrying you right now? Sometimes naming our fears makes them smaller.",
        &[
            "🔍 Try the 5-4-3-2-1 technique to ground yourself",
            "🌬️ Breathe slowly - your body will follow",
            "🌈 This feeling will pass, it always does",
            "💪 You've gotten through 100% of your hard days so far",
            "💭 Be kind to your anxious thoughts, they're trying to protect you",
        ],
    ),
    (
        "Overthinking can turn one worry into a hundred. 💫 Let's slow it down together. You don't have to solve everything tonight. Which worry is the loudest right now?",
        &[
            "📝 Set a 15-minute 'worry window' and park thoughts until then",
            "☕ Cut back on caffeine when you're feeling jittery",
            "🚶 A brisk walk can burn off anxious energy",
            "🤝 Talking to a counsellor can really help with spiralling thoughts",
            "🌙 Keep a steady bedtime - anxiety loves a tired mind",
        ],
    ),
];

const ADULT: Table = &[
    (
        "Anxiety can feel so heavy, especially when so many things depend on you. 🦋 Right now, in this moment, you are safe. Let's breathe together: in for 4... hold for 4... out for 4. What's been worrying you?",
        &[
            "🔍 Ground yourself with the 5-4-3-2-1 technique",
            "📝 Separate what you can control from what you can't",
            "🌬️ Try box breathing for two minutes",
            "🤝 Share the worry with someone you trust",
            "💭 Thoughts are not facts - notice them and let them pass",
        ],
    ),
    (
        "It sounds like your mind has been running at full speed. 💫 That's exhausting. You don't have to carry every 'what if' alone. What would help you feel a little steadier today?",
        &[
            "📋 Write tomorrow's worries down before bed",
            "🚶 Get some movement and daylight",
            "☕ Go easy on caffeine and alcohol",
            "🧘 Try a short guided relaxation",
            "💪 You've handled difficult things before",
        ],
    ),
];

const SENIOR: Table = &[
    (
        "Worry can be so tiring, and it's very natural. 🦋 You are safe right now. Let's take a few slow breaths together: in for 4... hold for 4... out for 4. What's been on your mind?",
        &[
            "🌬️ Breathe slowly and rest your hands in your lap",
            "📞 Talk your worry over with someone you trust",
            "📝 Keep a small notebook for thoughts that keep returning",
            "🌷 Spend some quiet time outdoors",
            "🤝 Mention persistent worry to your doctor",
        ],
    ),
    (
        "Feeling nervous or afraid is nothing to be ashamed of. 💫 You've weathered many storms in your life. Let's take this one gently. What would bring you some comfort right now?",
        &[
            "🎵 Listen to calm, familiar music",
            "🍵 A warm drink and a slow moment can settle the body",
            "👥 Spend time with people who make you feel at ease",
            "😴 Keep a gentle evening routine",
            "🌈 This feeling will pass",
        ],
    ),
];
